//! Word pools and the enemy roster, loaded from TOML.

use rand::Rng;
use serde::Deserialize;

pub const DEFAULT_WORDS_TOML: &str = include_str!("default_words.toml");

/// Returns the embedded default word bank.
pub fn default_toml() -> &'static str {
    DEFAULT_WORDS_TOML
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Word {
    /// Text shown to the player (may contain kanji).
    pub display: String,
    /// Kana reading the player types.
    pub reading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub hp: i64,
    /// Index into the word levels; clamped to the last level.
    pub level: usize,
}

#[derive(Deserialize)]
struct WordBankFile {
    levels: Vec<Level>,
    enemies: Vec<Enemy>,
}

#[derive(Deserialize)]
struct Level {
    words: Vec<Word>,
}

#[derive(Debug, thiserror::Error)]
pub enum WordBankError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("no [[levels]] defined")]
    NoLevels,
    #[error("level {0} has no words")]
    EmptyLevel(usize),
    #[error("word {display:?} in level {level} has an empty reading")]
    EmptyReading { level: usize, display: String },
    #[error("no [[enemies]] defined")]
    NoEnemies,
    #[error("enemy {0:?} must have positive hp")]
    BadEnemyHp(String),
}

#[derive(Debug, Clone)]
pub struct WordBank {
    levels: Vec<Vec<Word>>,
    enemies: Vec<Enemy>,
}

impl Default for WordBank {
    fn default() -> Self {
        Self::from_toml(DEFAULT_WORDS_TOML).expect("default word bank must be valid")
    }
}

impl WordBank {
    pub fn from_toml(toml_str: &str) -> Result<Self, WordBankError> {
        let file: WordBankFile =
            toml::from_str(toml_str).map_err(|e| WordBankError::Parse(e.to_string()))?;

        if file.levels.is_empty() {
            return Err(WordBankError::NoLevels);
        }
        for (i, level) in file.levels.iter().enumerate() {
            if level.words.is_empty() {
                return Err(WordBankError::EmptyLevel(i));
            }
            if let Some(w) = level.words.iter().find(|w| w.reading.is_empty()) {
                return Err(WordBankError::EmptyReading {
                    level: i,
                    display: w.display.clone(),
                });
            }
        }
        if file.enemies.is_empty() {
            return Err(WordBankError::NoEnemies);
        }
        if let Some(e) = file.enemies.iter().find(|e| e.hp <= 0) {
            return Err(WordBankError::BadEnemyHp(e.name.clone()));
        }

        Ok(Self {
            levels: file.levels.into_iter().map(|l| l.words).collect(),
            enemies: file.enemies,
        })
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn words(&self, level: usize) -> &[Word] {
        &self.levels[level.min(self.levels.len() - 1)]
    }

    /// Draw a random word from `level` (clamped to the last level).
    pub fn pick<R: Rng + ?Sized>(&self, level: usize, rng: &mut R) -> &Word {
        let words = self.words(level);
        // Levels are validated non-empty.
        &words[rng.gen_range(0..words.len())]
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn parse_default_bank() {
        let bank = WordBank::default();
        assert_eq!(bank.level_count(), 4);
        assert_eq!(bank.enemies().len(), 10);
        assert_eq!(bank.enemies()[0].name, "スライム");
        assert_eq!(bank.enemies()[0].hp, 50);
        assert_eq!(bank.enemies()[9].level, 3);
    }

    #[test]
    fn default_readings_are_kana() {
        let bank = WordBank::default();
        for level in 0..bank.level_count() {
            for w in bank.words(level) {
                assert!(
                    w.reading.chars().all(utsu_core::unicode::is_kana),
                    "non-kana reading {:?}",
                    w.reading
                );
            }
        }
    }

    #[test]
    fn level_is_clamped() {
        let bank = WordBank::default();
        assert_eq!(bank.words(99), bank.words(3));
    }

    #[test]
    fn pick_is_deterministic_for_seed() {
        let bank = WordBank::default();
        let a = bank.pick(1, &mut StdRng::seed_from_u64(7)).clone();
        let b = bank.pick(1, &mut StdRng::seed_from_u64(7)).clone();
        assert_eq!(a, b);
        assert!(bank.words(1).contains(&a));
    }

    #[test]
    fn error_no_levels() {
        let toml = r#"
levels = []
[[enemies]]
name = "a"
hp = 1
level = 0
"#;
        assert!(matches!(
            WordBank::from_toml(toml).unwrap_err(),
            WordBankError::NoLevels
        ));
    }

    #[test]
    fn error_empty_level() {
        let toml = r#"
[[levels]]
words = [{ display = "ねこ", reading = "ねこ" }]
[[levels]]
words = []
[[enemies]]
name = "a"
hp = 1
level = 0
"#;
        assert!(matches!(
            WordBank::from_toml(toml).unwrap_err(),
            WordBankError::EmptyLevel(1)
        ));
    }

    #[test]
    fn error_empty_reading() {
        let toml = r#"
[[levels]]
words = [{ display = "猫", reading = "" }]
[[enemies]]
name = "a"
hp = 1
level = 0
"#;
        assert!(matches!(
            WordBank::from_toml(toml).unwrap_err(),
            WordBankError::EmptyReading { level: 0, .. }
        ));
    }

    #[test]
    fn error_no_enemies() {
        let toml = r#"
enemies = []
[[levels]]
words = [{ display = "ねこ", reading = "ねこ" }]
"#;
        assert!(matches!(
            WordBank::from_toml(toml).unwrap_err(),
            WordBankError::NoEnemies
        ));
    }

    #[test]
    fn error_bad_hp() {
        let toml = r#"
[[levels]]
words = [{ display = "ねこ", reading = "ねこ" }]
[[enemies]]
name = "ghost"
hp = 0
level = 0
"#;
        assert!(matches!(
            WordBank::from_toml(toml).unwrap_err(),
            WordBankError::BadEnemyHp(_)
        ));
    }
}
