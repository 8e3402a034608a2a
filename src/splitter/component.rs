/*!
# [`ComponentSplitter`]
Semantic splitting of JSX, Vue, and Svelte component source.
*/

use crate::{
    separator::derive_separators,
    splitter::{split, Trim},
    Characters, ChunkConfig, ChunkSizer,
};

/// Splitter for JS-framework component source. Scans each document for its
/// own opening component tags and splits at those first, then at JavaScript
/// syntax boundaries, then at a set of universal fallbacks, merging
/// neighboring pieces back together to fill out each chunk.
///
/// Chunk boundaries come from a lexical scan, not a parse. There is no tag
/// balancing and no syntax validation, so a boundary can land mid-expression,
/// and a tag inside a string literal counts as a tag.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ComponentSplitter<Sizer>
where
    Sizer: ChunkSizer,
{
    /// Method of determining chunk sizes.
    chunk_config: ChunkConfig<Sizer>,
    /// Separators to try before any derived ones, in order of preference.
    separators: Vec<String>,
}

impl<Sizer> ComponentSplitter<Sizer>
where
    Sizer: ChunkSizer,
{
    /// Creates a new [`ComponentSplitter`].
    ///
    /// ```
    /// use component_splitter::ComponentSplitter;
    ///
    /// // By default, the chunk sizer is based on characters.
    /// let splitter = ComponentSplitter::new(512);
    /// ```
    #[must_use]
    pub fn new(chunk_config: impl Into<ChunkConfig<Sizer>>) -> Self {
        Self {
            chunk_config: chunk_config.into(),
            separators: Vec::new(),
        }
    }

    /// Set separators to try before any derived ones, in order of preference.
    ///
    /// ```
    /// use component_splitter::ComponentSplitter;
    ///
    /// let splitter = ComponentSplitter::new(512).with_separators(["<template", "<script"]);
    /// ```
    #[must_use]
    pub fn with_separators(
        mut self,
        separators: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    /// Generate a list of chunks from a given text. Each chunk will be up to
    /// the chunk capacity, with the configured overlap carried over from the
    /// previous chunk.
    ///
    /// The separator list is derived fresh from this text on every call, so
    /// tags found in one document never affect how the next one is split.
    ///
    /// ```
    /// use component_splitter::ComponentSplitter;
    ///
    /// let splitter = ComponentSplitter::new(10);
    /// let chunks = splitter.split_text("<Foo>hello</Foo><Bar>world</Bar>");
    ///
    /// assert_eq!(
    ///     vec!["<Foo>hello", "</Foo>", "<Bar>world", "</Bar>"],
    ///     chunks
    /// );
    /// ```
    pub fn split_text(&self, text: &str) -> Vec<String> {
        let separators = derive_separators(&self.separators, text);
        split(
            text,
            &separators,
            &self.chunk_config,
            Trim::PreserveIndentation,
        )
    }
}

impl Default for ComponentSplitter<Characters> {
    /// A splitter with the default chunk capacity of 2000 characters and no
    /// overlap.
    fn default() -> Self {
        Self::new(ChunkConfig::default())
    }
}
