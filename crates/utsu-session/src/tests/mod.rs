mod basic;

use super::{BattleSession, KeyResponse, WordBank};

pub(super) const TEST_BANK: &str = r#"
[[levels]]
words = [{ display = "猫", reading = "ねこ" }]

[[levels]]
words = [{ display = "鹿", reading = "しか" }]

[[enemies]]
name = "スライム"
hp = 20
level = 0

[[enemies]]
name = "コウモリ"
hp = 10
level = 1
"#;

pub(super) fn make_test_bank() -> WordBank {
    WordBank::from_toml(TEST_BANK).unwrap()
}

pub(super) fn make_session() -> BattleSession {
    BattleSession::new(make_test_bank(), 42)
}

pub(super) fn type_string(session: &mut BattleSession, keys: &str) -> Vec<KeyResponse> {
    keys.chars().map(|k| session.handle_key(k)).collect()
}

/// Type the current word's display spelling; returns the last response.
pub(super) fn type_current_word(session: &mut BattleSession) -> KeyResponse {
    let keys = session.display_romaji().to_string();
    assert!(!keys.is_empty(), "no active word");
    type_string(session, &keys).pop().unwrap()
}
