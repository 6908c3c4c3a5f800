use tracing::{debug, debug_span};

use utsu_core::settings::settings;

use super::types::{BattleEvent, BattlePhase};
use super::BattleSession;

impl BattleSession {
    /// Advance the word timer by `elapsed` seconds. An expired word costs the
    /// player HP and is replaced before this returns.
    pub fn tick(&mut self, elapsed: f64) -> Vec<BattleEvent> {
        let _span = debug_span!("tick", elapsed).entered();

        let mut events = Vec::new();
        if self.phase != BattlePhase::Playing || !(elapsed.is_finite() && elapsed > 0.0) {
            return events;
        }

        self.time_remaining -= elapsed;
        if self.time_remaining > 0.0 {
            return events;
        }

        debug!("word timed out");
        let damage = settings().battle.timeout_damage;
        events.push(BattleEvent::Timeout { damage });
        self.word = None;
        if !self.damage_player(damage, &mut events) {
            self.issue_word(&mut events);
        }
        events
    }

    /// Tick interval the caller's timer should use.
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(settings().battle.tick_interval_ms)
    }
}
