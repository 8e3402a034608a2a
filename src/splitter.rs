use std::iter::once;

use auto_enums::auto_enum;
use either::Either;
use itertools::Itertools;

use crate::{ChunkConfig, ChunkSizer};

mod component;
mod recursive;

#[allow(clippy::module_name_repetitions)]
pub use component::ComponentSplitter;
#[allow(clippy::module_name_repetitions)]
pub use recursive::RecursiveSplitter;

const NEWLINES: [char; 2] = ['\n', '\r'];

/// Trimming behavior applied to each chunk as it is emitted.
#[derive(Clone, Copy, Debug)]
enum Trim {
    /// Will remove all leading and trailing whitespace.
    All,
    /// Will remove all leading newlines and all trailing whitespace.
    /// If there are newlines within the chunk, then indentation will be
    /// preserved (leading spaces or tabs at the beginning of the chunk). If
    /// not, then all leading whitespace will be trimmed.
    /// Useful for code, where indentation is important to the meaning of the
    /// text.
    PreserveIndentation,
}

impl Trim {
    fn trim(self, chunk: &str) -> &str {
        match self {
            Self::All => chunk.trim(),
            Self::PreserveIndentation => {
                // Preserve indentation if we have newlines inside the chunk
                if chunk.trim().contains(NEWLINES) {
                    chunk.trim_start_matches(NEWLINES).trim_end()
                } else {
                    Self::All.trim(chunk)
                }
            }
        }
    }
}

/// Split the text into chunks using the given separators, in order of
/// preference, then stitch the configured overlap onto each chunk.
///
/// Until the overlap is applied, every chunk is a contiguous slice of the
/// original text, so with trimming off the chunks concatenate back to the
/// input exactly.
fn split<Sizer>(
    text: &str,
    separators: &[String],
    chunk_config: &ChunkConfig<Sizer>,
    trim: Trim,
) -> Vec<String>
where
    Sizer: ChunkSizer,
{
    let mut chunks = Vec::new();
    split_into(&mut chunks, text, separators, chunk_config, trim);
    apply_overlap(&chunks, chunk_config.overlap()).collect()
}

/// Split on the first separator present in the text, merging neighboring
/// pieces back together as far as the capacity allows. Pieces still over the
/// capacity are split again with the remaining separators, and when none are
/// left, at the size boundary.
fn split_into<'text, Sizer>(
    chunks: &mut Vec<&'text str>,
    text: &'text str,
    separators: &[String],
    chunk_config: &ChunkConfig<Sizer>,
    trim: Trim,
) where
    Sizer: ChunkSizer,
{
    let Some(index) = separators
        .iter()
        .position(|separator| text.contains(separator.as_str()))
    else {
        size_boundary_chunks(chunks, text, chunk_config, trim);
        return;
    };

    merge_pieces(
        chunks,
        text,
        split_pieces(text, &separators[index]),
        &separators[index + 1..],
        chunk_config,
        trim,
    );
}

/// Split the text at every occurrence of the separator, keeping each
/// separator attached to the start of the piece that follows it. The pieces
/// tile the text exactly. An empty separator produces one piece per character.
#[auto_enum(Iterator)]
fn split_pieces<'sep, 'text: 'sep>(
    text: &'text str,
    separator: &'sep str,
) -> impl Iterator<Item = (usize, &'text str)> + 'sep {
    match separator {
        "" => text.char_indices().map(move |(offset, c)| {
            (
                offset,
                text.get(offset..offset + c.len_utf8())
                    .expect("char should be valid"),
            )
        }),
        _ => {
            let mut cursor = 0;
            text.match_indices(separator)
                .map(|(offset, _)| offset)
                .chain(once(text.len()))
                .filter_map(move |offset| {
                    let piece = (cursor < offset).then(|| {
                        (
                            cursor,
                            text.get(cursor..offset).expect("match should be valid"),
                        )
                    });
                    cursor = offset;
                    piece
                })
        }
    }
}

/// Greedily merge neighboring pieces into chunks that fill the capacity.
///
/// A chunk closes once its size lands within the capacity range or the next
/// piece would push it over the max. A single piece over the max never joins
/// a chunk. Pending pieces are flushed first so output stays in document
/// order, and then the oversized piece is split with the remaining separators.
fn merge_pieces<'text, Sizer>(
    chunks: &mut Vec<&'text str>,
    text: &'text str,
    pieces: impl Iterator<Item = (usize, &'text str)>,
    remaining: &[String],
    chunk_config: &ChunkConfig<Sizer>,
    trim: Trim,
) where
    Sizer: ChunkSizer,
{
    let capacity = chunk_config.capacity();
    let mut span: Option<(usize, usize)> = None;
    let mut total = 0;

    for (offset, piece) in pieces {
        let size = chunk_config.sizer().size(piece);

        if capacity.fits(size).is_gt() {
            if let Some((start, end)) = span.take() {
                let chunk = text.get(start..end).expect("span should be valid");
                emit(chunks, chunk, chunk_config, trim);
                total = 0;
            }
            if remaining.is_empty() {
                size_boundary_chunks(chunks, piece, chunk_config, trim);
            } else {
                split_into(chunks, piece, remaining, chunk_config, trim);
            }
            continue;
        }

        match span {
            Some((start, end)) if capacity.fits(total + size).is_gt() => {
                let chunk = text.get(start..end).expect("span should be valid");
                emit(chunks, chunk, chunk_config, trim);
                span = Some((offset, offset + piece.len()));
                total = size;
            }
            Some((start, _)) => {
                span = Some((start, offset + piece.len()));
                total += size;
            }
            None => {
                span = Some((offset, offset + piece.len()));
                total = size;
            }
        }

        if capacity.fits(total).is_eq() {
            if let Some((start, end)) = span.take() {
                let chunk = text.get(start..end).expect("span should be valid");
                emit(chunks, chunk, chunk_config, trim);
            }
            total = 0;
        }
    }

    if let Some((start, end)) = span {
        let chunk = text.get(start..end).expect("span should be valid");
        emit(chunks, chunk, chunk_config, trim);
    }
}

/// Last resort when no separator is left or none matched. Fill each chunk
/// with as many characters as fit the capacity. Every chunk gets at least one
/// character so the cursor always moves forward, even if a single character
/// is over the capacity on its own.
fn size_boundary_chunks<'text, Sizer>(
    chunks: &mut Vec<&'text str>,
    text: &'text str,
    chunk_config: &ChunkConfig<Sizer>,
    trim: Trim,
) where
    Sizer: ChunkSizer,
{
    let capacity = chunk_config.capacity();
    let mut start = 0;
    let mut total = 0;

    for (offset, c) in text.char_indices() {
        let size = chunk_config.sizer().size(
            text.get(offset..offset + c.len_utf8())
                .expect("char should be valid"),
        );
        if total > 0 && capacity.fits(total + size).is_gt() {
            let chunk = text.get(start..offset).expect("char should be valid");
            emit(chunks, chunk, chunk_config, trim);
            start = offset;
            total = 0;
        }
        total += size;
    }

    if start < text.len() {
        let chunk = text.get(start..).expect("char should be valid");
        emit(chunks, chunk, chunk_config, trim);
    }
}

/// Push the chunk, trimmed if the config asks for it. Chunks that trim down
/// to nothing are dropped.
fn emit<'text, Sizer>(
    chunks: &mut Vec<&'text str>,
    chunk: &'text str,
    chunk_config: &ChunkConfig<Sizer>,
    trim: Trim,
) where
    Sizer: ChunkSizer,
{
    let chunk = if chunk_config.trim() {
        trim.trim(chunk)
    } else {
        chunk
    };
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
}

/// Prefix each chunk after the first with the last `overlap` characters of
/// the chunk before it. The prefix always comes from the neighbor as it was
/// before any overlap was added, so overlap never compounds across chunks.
fn apply_overlap<'chunks>(
    chunks: &'chunks [&'chunks str],
    overlap: usize,
) -> impl Iterator<Item = String> + 'chunks {
    if overlap == 0 {
        return Either::Left(chunks.iter().map(ToString::to_string));
    }

    Either::Right(chunks.first().map(ToString::to_string).into_iter().chain(
        chunks.iter().copied().tuple_windows().map(move |(previous, chunk)| {
            format!("{}{chunk}", tail_chars(previous, overlap))
        }),
    ))
}

/// The last `count` characters of the chunk, or the whole chunk if it is
/// shorter than that.
fn tail_chars(chunk: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }
    let start = chunk
        .char_indices()
        .rev()
        .nth(count - 1)
        .map_or(0, |(offset, _)| offset);
    chunk.get(start..).expect("char should be valid")
}

#[cfg(test)]
mod tests {
    use crate::ChunkCapacity;

    use super::*;

    fn separators(separators: &[&str]) -> Vec<String> {
        separators.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn separator_stays_attached_to_following_piece() {
        let chunks = split(
            "aa bb cc",
            &separators(&[" "]),
            &ChunkConfig::new(5).with_trim(false),
            Trim::All,
        );
        assert_eq!(chunks, ["aa bb", " cc"]);
    }

    #[test]
    fn oversized_piece_splits_on_remaining_separators() {
        let chunks = split(
            "aaaaa bb",
            &separators(&[" ", ""]),
            &ChunkConfig::new(4).with_trim(false),
            Trim::All,
        );
        assert_eq!(chunks, ["aaaa", "a", " bb"]);
    }

    #[test]
    fn output_stays_in_document_order_around_recursion() {
        let chunks = split(
            "bb ccccccc dd",
            &separators(&[" ", ""]),
            &ChunkConfig::new(4).with_trim(false),
            Trim::All,
        );
        assert_eq!(chunks, ["bb", " ccc", "cccc", " dd"]);
    }

    #[test]
    fn no_matching_separator_splits_at_size_boundary() {
        let chunks = split(
            "abcdefg",
            &separators(&["@@"]),
            &ChunkConfig::new(3).with_trim(false),
            Trim::All,
        );
        assert_eq!(chunks, ["abc", "def", "g"]);
    }

    #[test]
    fn empty_separator_list_splits_at_size_boundary() {
        let chunks = split("abcdefg", &[], &ChunkConfig::new(3).with_trim(false), Trim::All);
        assert_eq!(chunks, ["abc", "def", "g"]);
    }

    #[test]
    fn empty_text_produces_no_chunks() {
        assert!(split("", &separators(&[" ", ""]), &ChunkConfig::new(5), Trim::All).is_empty());
        assert!(split("", &[], &ChunkConfig::new(5), Trim::All).is_empty());
    }

    #[test]
    fn whitespace_only_text_trims_to_nothing() {
        let chunks = split("   ", &separators(&[" "]), &ChunkConfig::new(2), Trim::All);
        assert!(chunks.is_empty());
    }

    #[test]
    fn untrimmed_chunks_reconstruct_the_text() {
        let text = "  one two\n\nthree four five  six\n";
        let chunks = split(
            text,
            &separators(&["\n\n", " ", ""]),
            &ChunkConfig::new(8).with_trim(false),
            Trim::All,
        );
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn capacity_range_closes_chunks_at_desired_size() {
        let config = ChunkConfig::new(ChunkCapacity::new(2).with_max(10).unwrap()).with_trim(false);
        let chunks = split("aaa bb", &separators(&[" "]), &config, Trim::All);
        assert_eq!(chunks, ["aaa", " bb"]);

        let config = ChunkConfig::new(6).with_trim(false);
        let chunks = split("aaa bb", &separators(&[" "]), &config, Trim::All);
        assert_eq!(chunks, ["aaa bb"]);
    }

    #[test]
    fn single_character_over_capacity_still_emitted() {
        struct Bytes;

        impl ChunkSizer for Bytes {
            fn size(&self, chunk: &str) -> usize {
                chunk.len()
            }
        }

        let config = ChunkConfig::new(1).with_sizer(Bytes).with_trim(false);
        let chunks = split("éé", &[], &config, Trim::All);
        assert_eq!(chunks, ["é", "é"]);
    }

    #[test]
    fn overlap_prefixes_tail_of_previous_chunk() {
        let chunks = apply_overlap(&["abcdef", "ghijkl", "mnopqr"], 3).collect::<Vec<_>>();
        assert_eq!(chunks, ["abcdef", "defghijkl", "jklmnopqr"]);
    }

    #[test]
    fn overlap_comes_from_unstitched_neighbor() {
        let chunks = apply_overlap(&["aa", "bb", "cc"], 2).collect::<Vec<_>>();
        assert_eq!(chunks, ["aa", "aabb", "bbcc"]);
    }

    #[test]
    fn overlap_longer_than_previous_chunk_takes_all_of_it() {
        let chunks = apply_overlap(&["ab", "cdefg"], 10).collect::<Vec<_>>();
        assert_eq!(chunks, ["ab", "abcdefg"]);
    }

    #[test]
    fn zero_overlap_leaves_chunks_unchanged() {
        let chunks = apply_overlap(&["ab", "cd"], 0).collect::<Vec<_>>();
        assert_eq!(chunks, ["ab", "cd"]);
    }

    #[test]
    fn tail_chars_counts_characters_not_bytes() {
        assert_eq!(tail_chars("hello", 2), "lo");
        assert_eq!(tail_chars("héllo", 4), "éllo");
        assert_eq!(tail_chars("hi", 5), "hi");
        assert_eq!(tail_chars("hi", 0), "");
    }

    #[test]
    fn trim_all() {
        assert_eq!(Trim::All.trim("  hello world  "), "hello world");
    }

    #[test]
    fn trim_indentation_fallback() {
        assert_eq!(
            Trim::PreserveIndentation.trim("  hello world  "),
            "hello world"
        );
    }

    #[test]
    fn trim_indentation_preserved() {
        assert_eq!(
            Trim::PreserveIndentation.trim("\n  hello\n  world  "),
            "  hello\n  world"
        );
    }
}
