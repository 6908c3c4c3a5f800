use std::fmt;
use std::str::FromStr;

use utsu_core::matcher::MatchState;
use utsu_core::settings::PerDifficulty;

use crate::words::Word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    Title,
    SelectDifficulty,
    Playing,
    GameOver,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Pick this difficulty's entry from a per-difficulty settings table.
    pub fn pick(self, table: &PerDifficulty) -> f64 {
        match self {
            Self::Easy => table.easy,
            Self::Normal => table.normal,
            Self::Hard => table.hard,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown difficulty {0:?} (expected easy, normal or hard)")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

/// Things that happened during one key or tick, in order. The UI and audio
/// layers react to these (hit sound, damage flash, enemy swap).
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    Hit,
    Miss { damage: i64 },
    Timeout { damage: i64 },
    WordCompleted { reading: String },
    EnemyDamaged { damage: i64, remaining: i64 },
    EnemyDefeated { name: String },
    NextEnemy { name: String },
    WordIssued { reading: String, display: String },
    AllCleared { score: i64 },
    GameOver { score: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyResponse {
    pub accepted: bool,
    pub events: Vec<BattleEvent>,
}

impl KeyResponse {
    pub(crate) fn ignored() -> Self {
        Self {
            accepted: false,
            events: Vec::new(),
        }
    }

    pub(crate) fn accepted() -> Self {
        Self {
            accepted: true,
            events: vec![BattleEvent::Hit],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub correct: u32,
    pub misses: u32,
    pub total_typed: u32,
}

impl Stats {
    /// Share of keystrokes that were accepted; 0 before any key.
    pub fn accuracy(&self) -> f64 {
        if self.total_typed == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total_typed as f64
    }
}

/// The word currently under attack. Replaced wholesale, never reset.
#[derive(Debug, Clone)]
pub(crate) struct ActiveWord {
    pub(crate) word: Word,
    pub(crate) display: String,
    pub(crate) matcher: MatchState,
}
