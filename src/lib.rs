/*!
# component-splitter

[![Docs](https://docs.rs/component-splitter/badge.svg)](https://docs.rs/component-splitter/)
[![Licence](https://img.shields.io/crates/l/component-splitter)](https://github.com/component-splitter/component-splitter/blob/main/LICENSE.txt)
[![Crates.io](https://img.shields.io/crates/v/component-splitter)](https://crates.io/crates/component-splitter)

Source files for JS-framework components (React/JSX, Vue, Svelte) are often too large to embed or index whole, and generic text splitters cut them at arbitrary blank lines with no regard for the component structure. This crate splits component source into chunks up to a desired size, preferring boundaries that mean something in the document: the component tags it actually contains, then JavaScript syntax boundaries, then general text boundaries.

No parsing is involved. Tags are found with a single lexical scan, so splitting is fast and never fails on malformed source, at the cost of treating a tag inside a string literal like any other tag.

## Get Started

### By Number of Characters

```rust
use component_splitter::ComponentSplitter;

// Maximum number of characters in a chunk
let splitter = ComponentSplitter::new(1000);

let chunks = splitter.split_text("<Greeting name=\"world\" />\n\nexport default Greeting;\n");
```

### With Overlap

Each chunk after the first can repeat the trailing characters of the chunk
before it, which helps downstream consumers keep context across chunk
boundaries. The repeated prefix comes on top of the chunk capacity, so
stitched chunks can be larger than the capacity alone would allow.

```rust
use component_splitter::{ChunkConfig, ComponentSplitter};

let config = ChunkConfig::new(1000).with_overlap(100);
let splitter = ComponentSplitter::new(config);

let chunks = splitter.split_text("your component source");
```

### Plain Text

For documents without markup, [`RecursiveSplitter`] applies the same
splitting algorithm with a fixed separator list: paragraphs, then lines, then
words, then characters.

```rust
use component_splitter::RecursiveSplitter;

let splitter = RecursiveSplitter::new(1000);

let chunks = splitter.split_text("Some text\n\nfrom a\ndocument");
```

### Using a Range for Chunk Capacity

You also have the option of specifying your chunk capacity as a range.

Once a chunk has reached a length that falls within the range it will be
returned. It is always possible that a chunk may be returned that is less
than the `start` value, as adding the next piece of text may have made it
larger than the `end` capacity.

```rust
use component_splitter::ComponentSplitter;

// Will fill up the chunk until it is somewhere in this range.
let splitter = ComponentSplitter::new(500..2000);

let chunks = splitter.split_text("your component source");
```

### Custom Chunk Sizers

Chunk sizes are measured in characters by default. Anything that implements
[`ChunkSizer`] can stand in, for example to budget by bytes or by tokens.

```rust
use component_splitter::{ChunkConfig, ChunkSizer, ComponentSplitter};

struct Bytes;

impl ChunkSizer for Bytes {
    fn size(&self, chunk: &str) -> usize {
        chunk.len()
    }
}

let splitter = ComponentSplitter::new(ChunkConfig::new(1000).with_sizer(Bytes));
```

## Method

For each call to [`ComponentSplitter::split_text`]:

1. Scan the text for opening component tags (`<Counter`, `<template`, and so on) and convert each unique tag name into a separator. The tag separators are ordered center-out: tags from the middle of the document sort first, since they tend to be more representative of its structure than whichever tag happened to come first or last.
2. Build the full separator list: any base separators you provided, then a fixed list of JavaScript syntax boundaries (`export`, `function`, `const`, control flow keywords), then the derived tag separators, then a small set of universal fallbacks.
3. Split the text at every occurrence of the first separator present in it, keeping each separator attached to the start of the piece that follows.
4. Merge neighboring pieces back together as long as the result stays within the chunk capacity.
5. Split any piece still over the capacity with the remaining separators, and at raw character boundaries once no separator is left.

The separator list is derived fresh on every call, so tags discovered in one
document never influence how the next one is split.

## Inspiration

This crate was inspired by [LangChain's JS framework text splitter](https://python.langchain.com/docs/how_to/code_splitter/), which layers component-tag discovery on top of its recursive character splitter.

*/

mod chunk_size;
mod separator;
mod splitter;

pub use chunk_size::{Characters, ChunkCapacity, ChunkCapacityError, ChunkConfig, ChunkSizer};
pub use splitter::{ComponentSplitter, RecursiveSplitter};
