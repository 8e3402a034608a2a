use crate::ChunkSizer;

/// Used for determining the size of a chunk based on the number of characters
/// in the chunk.
///
/// ```
/// use component_splitter::{Characters, ChunkConfig, ComponentSplitter};
///
/// let splitter = ComponentSplitter::new(ChunkConfig::new(512).with_sizer(Characters));
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Characters;

impl ChunkSizer for Characters {
    /// Determine the size of a given chunk to use for validation.
    fn size(&self, chunk: &str) -> usize {
        chunk.chars().count()
    }
}
