use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct RomajiConfig {
    spellings: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[spellings] table is empty")]
    Empty,
    #[error("kana unit must be one or two characters: {0}")]
    BadUnit(String),
    #[error("no spellings for unit: {0}")]
    NoSpellings(String),
    #[error("invalid spelling {spelling:?} for unit {unit}")]
    BadSpelling { unit: String, spelling: String },
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

fn is_spelling_char(c: char) -> bool {
    c.is_ascii_lowercase() || c == '-'
}

/// Parse TOML text into a sorted `BTreeMap<kana unit, spellings>`.
///
/// Spelling order is preserved; the first spelling is the display spelling.
pub fn parse_romaji_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, Vec<String>>, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.spellings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    for (unit, spellings) in &config.spellings {
        let len = unit.chars().count();
        if !(1..=2).contains(&len) {
            return Err(RomajiConfigError::BadUnit(unit.clone()));
        }
        if spellings.is_empty() {
            return Err(RomajiConfigError::NoSpellings(unit.clone()));
        }
        for spelling in spellings {
            if spelling.is_empty() || !spelling.chars().all(is_spelling_char) {
                return Err(RomajiConfigError::BadSpelling {
                    unit: unit.clone(),
                    spelling: spelling.clone(),
                });
            }
        }
    }

    Ok(config.spellings)
}
