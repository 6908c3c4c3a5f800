//! Typing battle session: enemies, HP, per-word timer and scoring around the
//! romaji matcher.
//!
//! `BattleSession` owns the single active word slot. Every key and every
//! timer tick runs to completion, and a finished or expired word is replaced
//! inside the same call, so callers never observe a stale `MatchState`.

pub(crate) mod types;

mod key_handlers;
mod score;
mod timer;
pub mod words;

#[cfg(test)]
mod tests;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use utsu_core::display::display_romaji;
use utsu_core::matcher::MatchState;
use utsu_core::settings::settings;

pub use score::calculate_score;
pub use types::{BattleEvent, BattlePhase, Difficulty, KeyResponse, Stats, UnknownDifficulty};
pub use words::{Enemy, Word, WordBank, WordBankError};

use types::ActiveWord;

pub struct BattleSession {
    bank: WordBank,
    rng: StdRng,

    phase: BattlePhase,
    difficulty: Difficulty,
    player_hp: i64,
    enemy_index: usize,
    enemy_hp: i64,

    word: Option<ActiveWord>,
    time_remaining: f64,
    total_time: f64,

    stats: Stats,
    score: i64,
}

impl BattleSession {
    pub fn new(bank: WordBank, seed: u64) -> Self {
        Self {
            bank,
            rng: StdRng::seed_from_u64(seed),
            phase: BattlePhase::Title,
            difficulty: Difficulty::Normal,
            player_hp: settings().battle.player_hp,
            enemy_index: 0,
            enemy_hp: 0,
            word: None,
            time_remaining: 0.0,
            total_time: 0.0,
            stats: Stats::default(),
            score: 0,
        }
    }

    /// Back to the title screen with a fresh battle state.
    pub fn go_to_title(&mut self) {
        self.reset();
        self.phase = BattlePhase::Title;
    }

    pub fn go_to_difficulty(&mut self) {
        self.reset();
        self.phase = BattlePhase::SelectDifficulty;
    }

    /// Start a new battle against the first enemy. Returns the events for
    /// the first enemy and word.
    pub fn start(&mut self, difficulty: Difficulty) -> Vec<BattleEvent> {
        self.reset();
        self.difficulty = difficulty;
        self.phase = BattlePhase::Playing;
        self.enemy_hp = self.bank.enemies()[0].hp;

        let mut events = vec![BattleEvent::NextEnemy {
            name: self.bank.enemies()[0].name.clone(),
        }];
        self.issue_word(&mut events);
        events
    }

    fn reset(&mut self) {
        self.difficulty = Difficulty::Normal;
        self.player_hp = settings().battle.player_hp;
        self.enemy_index = 0;
        self.enemy_hp = 0;
        self.word = None;
        self.time_remaining = 0.0;
        self.total_time = 0.0;
        self.stats = Stats::default();
        self.score = 0;
    }

    /// Draw a word for the current enemy and give it a fresh matcher and timer.
    fn issue_word(&mut self, events: &mut Vec<BattleEvent>) {
        let level = self.bank.enemies()[self.enemy_index].level;
        let word = self.bank.pick(level, &mut self.rng).clone();
        let prompt = display_romaji(&word.reading);

        self.total_time = prompt.chars().count() as f64
            * self.difficulty.pick(&settings().difficulty);
        self.time_remaining = self.total_time;
        debug!(reading = %word.reading, %prompt, time = self.total_time, "word issued");

        events.push(BattleEvent::WordIssued {
            reading: word.reading.clone(),
            display: prompt.clone(),
        });
        self.word = Some(ActiveWord {
            matcher: MatchState::new(&word.reading),
            word,
            display: prompt,
        });
    }

    /// Apply damage to the player. Returns true if this ended the battle.
    fn damage_player(&mut self, amount: i64, events: &mut Vec<BattleEvent>) -> bool {
        self.player_hp = (self.player_hp - amount).max(0);
        if self.player_hp > 0 {
            return false;
        }
        debug!("player defeated");
        self.time_remaining = 0.0;
        self.finish(BattlePhase::GameOver, events);
        true
    }

    fn finish(&mut self, phase: BattlePhase, events: &mut Vec<BattleEvent>) {
        self.phase = phase;
        self.word = None;
        self.score = calculate_score(&self.stats, self.difficulty, &settings().score);
        events.push(match phase {
            BattlePhase::Clear => BattleEvent::AllCleared { score: self.score },
            _ => BattleEvent::GameOver { score: self.score },
        });
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn player_hp(&self) -> i64 {
        self.player_hp
    }

    pub fn player_max_hp(&self) -> i64 {
        settings().battle.player_hp
    }

    /// Enemy currently being fought; `None` once every enemy is defeated.
    pub fn current_enemy(&self) -> Option<&Enemy> {
        if self.phase == BattlePhase::Clear {
            return None;
        }
        self.bank.enemies().get(self.enemy_index)
    }

    pub fn enemy_hp(&self) -> i64 {
        self.enemy_hp
    }

    pub fn enemy_count(&self) -> usize {
        self.bank.enemies().len()
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.word.as_ref().map(|w| &w.word)
    }

    /// Prompt spelling of the current word.
    pub fn display_romaji(&self) -> &str {
        self.word.as_ref().map_or("", |w| w.display.as_str())
    }

    pub fn typed_romaji(&self) -> &str {
        self.word.as_ref().map_or("", |w| w.matcher.typed_romaji())
    }

    /// What is left to type for the current word, following the player's spelling.
    pub fn remaining_romaji(&self) -> String {
        self.word
            .as_ref()
            .map_or_else(String::new, |w| w.matcher.remaining_romaji())
    }

    pub fn progress(&self) -> f64 {
        self.word.as_ref().map_or(0.0, |w| w.matcher.progress())
    }

    pub fn time_remaining(&self) -> f64 {
        self.time_remaining
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Final score; zero until the battle ends.
    pub fn score(&self) -> i64 {
        self.score
    }
}
