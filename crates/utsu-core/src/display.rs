use crate::chunker::{chunk, Chunk};

/// Canonical spelling of `reading` shown as the typing prompt.
pub fn display_romaji(reading: &str) -> String {
    display_chunks(&chunk(reading))
}

/// Concatenate the first candidate of every chunk.
pub fn display_chunks(chunks: &[Chunk]) -> String {
    chunks.iter().map(Chunk::display).collect()
}
