#![allow(missing_docs)]

use divan::AllocProfiler;

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

const CHUNK_SIZES: [usize; 3] = [64, 1024, 16384];

fn main() {
    // Run registered benchmarks.
    divan::main();
}

#[divan::bench_group]
mod component {
    use std::fs;

    use component_splitter::{ChunkConfig, ChunkSizer, ComponentSplitter};
    use divan::{counter::BytesCount, Bencher};

    use crate::CHUNK_SIZES;

    const COMPONENT_FILENAMES: &[&str] =
        &["card.jsx", "profile.vue", "nav.svelte", "dashboard.jsx"];

    fn bench<S, G>(bencher: Bencher<'_, '_>, filename: &str, gen_splitter: G)
    where
        G: Fn() -> ComponentSplitter<S> + Sync,
        S: ChunkSizer,
    {
        bencher
            .with_inputs(|| {
                (
                    gen_splitter(),
                    fs::read_to_string(format!("tests/inputs/{filename}")).unwrap(),
                )
            })
            .input_counter(|(_, text)| BytesCount::of_str(text))
            .bench_values(|(splitter, text)| splitter.split_text(&text));
    }

    #[divan::bench(args = COMPONENT_FILENAMES, consts = CHUNK_SIZES)]
    fn characters<const N: usize>(bencher: Bencher<'_, '_>, filename: &str) {
        bench(bencher, filename, || ComponentSplitter::new(N));
    }

    #[divan::bench(args = COMPONENT_FILENAMES, consts = CHUNK_SIZES)]
    fn with_overlap<const N: usize>(bencher: Bencher<'_, '_>, filename: &str) {
        bench(bencher, filename, || {
            ComponentSplitter::new(ChunkConfig::new(N).with_overlap(N / 4))
        });
    }
}

#[divan::bench_group]
mod recursive {
    use std::fs;

    use component_splitter::{ChunkSizer, RecursiveSplitter};
    use divan::{counter::BytesCount, Bencher};

    use crate::CHUNK_SIZES;

    const RECURSIVE_FILENAMES: &[&str] = &["release_notes.txt", "dashboard.jsx"];

    fn bench<S, G>(bencher: Bencher<'_, '_>, filename: &str, gen_splitter: G)
    where
        G: Fn() -> RecursiveSplitter<S> + Sync,
        S: ChunkSizer,
    {
        bencher
            .with_inputs(|| {
                (
                    gen_splitter(),
                    fs::read_to_string(format!("tests/inputs/{filename}")).unwrap(),
                )
            })
            .input_counter(|(_, text)| BytesCount::of_str(text))
            .bench_values(|(splitter, text)| splitter.split_text(&text));
    }

    #[divan::bench(args = RECURSIVE_FILENAMES, consts = CHUNK_SIZES)]
    fn characters<const N: usize>(bencher: Bencher<'_, '_>, filename: &str) {
        bench(bencher, filename, || RecursiveSplitter::new(N));
    }
}
