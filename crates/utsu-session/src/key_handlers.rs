use tracing::{debug, debug_span};

use utsu_core::settings::settings;

use super::types::{BattleEvent, BattlePhase, KeyResponse};
use super::BattleSession;

impl BattleSession {
    /// Feed one keystroke to the current word.
    pub fn handle_key(&mut self, key: char) -> KeyResponse {
        let _span = debug_span!("handle_key", ?key).entered();

        if self.phase != BattlePhase::Playing {
            return KeyResponse::ignored();
        }
        let Some(active) = self.word.as_mut() else {
            return KeyResponse::ignored();
        };

        let result = active.matcher.process_key(key);
        if !result.accepted {
            if result.completed {
                // Completed words are replaced immediately; nothing to type into.
                return KeyResponse::ignored();
            }
            return self.handle_miss();
        }

        self.stats.total_typed += 1;
        self.stats.correct += 1;
        let mut resp = KeyResponse::accepted();
        if result.completed {
            self.handle_word_completed(&mut resp.events);
        }
        resp
    }

    fn handle_miss(&mut self) -> KeyResponse {
        self.stats.total_typed += 1;
        self.stats.misses += 1;

        let damage = settings().battle.miss_damage;
        let mut resp = KeyResponse::ignored();
        resp.events.push(BattleEvent::Miss { damage });
        self.damage_player(damage, &mut resp.events);
        resp
    }

    fn handle_word_completed(&mut self, events: &mut Vec<BattleEvent>) {
        let reading = self
            .word
            .take()
            .map(|w| w.word.reading)
            .unwrap_or_default();
        events.push(BattleEvent::WordCompleted { reading });

        let damage = settings().battle.attack_damage;
        self.enemy_hp = (self.enemy_hp - damage).max(0);
        if self.enemy_hp > 0 {
            events.push(BattleEvent::EnemyDamaged {
                damage,
                remaining: self.enemy_hp,
            });
            self.issue_word(events);
            return;
        }

        let defeated = self.bank.enemies()[self.enemy_index].name.clone();
        debug!(enemy = %defeated, "enemy defeated");
        events.push(BattleEvent::EnemyDefeated { name: defeated });

        self.enemy_index += 1;
        let Some(next) = self.bank.enemies().get(self.enemy_index) else {
            self.enemy_index = self.bank.enemies().len() - 1;
            self.finish(BattlePhase::Clear, events);
            return;
        };
        self.enemy_hp = next.hp;
        events.push(BattleEvent::NextEnemy {
            name: next.name.clone(),
        });
        self.issue_word(events);
    }
}
