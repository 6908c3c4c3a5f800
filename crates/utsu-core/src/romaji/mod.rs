//! Kana-to-romaji spelling table.
//!
//! Each kana unit (a single kana or a yōon digraph such as きゃ) maps to the
//! ordered list of ASCII spellings a player may type for it.

mod config;
mod table;

pub use config::{parse_romaji_toml, RomajiConfigError};
pub use table::{default_toml, RomajiTable};
