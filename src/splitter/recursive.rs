/*!
# [`RecursiveSplitter`]
Recursive splitting of plain text documents.
*/

use crate::{
    splitter::{split, Trim},
    ChunkConfig, ChunkSizer,
};

/// Separators to use if none are provided, from coarsest to finest.
const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Plain-text splitter. Tries each separator in order, starting with
/// paragraph breaks and working down to single characters, and merges
/// neighboring pieces back together to fill out each chunk.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct RecursiveSplitter<Sizer>
where
    Sizer: ChunkSizer,
{
    /// Method of determining chunk sizes.
    chunk_config: ChunkConfig<Sizer>,
    /// Separators to try, in order of preference.
    separators: Vec<String>,
}

impl<Sizer> RecursiveSplitter<Sizer>
where
    Sizer: ChunkSizer,
{
    /// Creates a new [`RecursiveSplitter`].
    ///
    /// ```
    /// use component_splitter::RecursiveSplitter;
    ///
    /// // By default, the chunk sizer is based on characters.
    /// let splitter = RecursiveSplitter::new(512);
    /// ```
    #[must_use]
    pub fn new(chunk_config: impl Into<ChunkConfig<Sizer>>) -> Self {
        Self {
            chunk_config: chunk_config.into(),
            separators: DEFAULT_SEPARATORS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Replace the separators the splitter will try, in order of preference.
    /// The empty string splits between every character, and is worth keeping
    /// as the final entry so that any text can be split down to the capacity.
    ///
    /// ```
    /// use component_splitter::RecursiveSplitter;
    ///
    /// let splitter = RecursiveSplitter::new(512).with_separators(["\n", " ", ""]);
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
    /// ```
    /// use component_splitter::RecursiveSplitter;
    ///
    /// let splitter = RecursiveSplitter::new(10);
    /// let text = "Some text\n\nfrom a\ndocument";
    /// let chunks = splitter.split_text(text);
    ///
    /// assert_eq!(vec!["Some text", "from a", "document"], chunks);
    /// ```
    pub fn split_text(&self, text: &str) -> Vec<String> {
        split(text, &self.separators, &self.chunk_config, Trim::All)
    }
}
