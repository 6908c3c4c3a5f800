//! Romaji input matching for kana typing practice.
//!
//! A reading is split into [`chunker::Chunk`]s, each carrying every accepted
//! spelling; [`matcher::MatchState`] then checks keystrokes against them one at
//! a time, and [`display::display_romaji`] renders the prompt spelling.

pub mod chunker;
pub mod display;
pub mod matcher;
pub mod romaji;
pub mod settings;
pub mod unicode;

pub use chunker::{chunk, Chunk};
pub use display::display_romaji;
pub use matcher::{KeyResult, MatchPhase, MatchState};
