use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_romaji_toml, RomajiConfigError};
use crate::unicode::katakana_to_hiragana;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default romanization table.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Read-only mapping from a kana unit (one kana or a digraph) to its
/// accepted spellings, in display order.
#[derive(Debug)]
pub struct RomajiTable {
    spellings: HashMap<String, Vec<String>>,
}

impl RomajiTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global table.
    pub fn global() -> &'static RomajiTable {
        static INSTANCE: OnceLock<RomajiTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            RomajiTable::from_toml(toml_str).expect("romaji TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        let map = parse_romaji_toml(toml_str)?;
        Ok(Self {
            spellings: map.into_iter().collect(),
        })
    }

    /// Spellings for `unit`. Katakana units fall back to their hiragana entry.
    pub fn lookup(&self, unit: &str) -> Option<&[String]> {
        if let Some(s) = self.spellings.get(unit) {
            return Some(s.as_slice());
        }
        let folded = katakana_to_hiragana(unit);
        if folded == unit {
            return None;
        }
        self.spellings.get(&folded).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.spellings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spellings.is_empty()
    }
}
