use super::*;
use crate::{BattleEvent, BattlePhase, Difficulty, Stats};

// --- Phases ---

#[test]
fn test_new_session_is_title() {
    let mut session = make_session();
    assert_eq!(session.phase(), BattlePhase::Title);
    assert!(session.current_word().is_none());
    assert_eq!(session.player_hp(), 100);

    let resp = session.handle_key('n');
    assert!(!resp.accepted);
    assert!(resp.events.is_empty());
}

#[test]
fn test_go_to_difficulty() {
    let mut session = make_session();
    session.go_to_difficulty();
    assert_eq!(session.phase(), BattlePhase::SelectDifficulty);
    assert!(session.handle_key('n').events.is_empty());
}

#[test]
fn test_start_issues_first_word() {
    let mut session = make_session();
    let events = session.start(Difficulty::Normal);

    assert_eq!(session.phase(), BattlePhase::Playing);
    assert_eq!(
        events,
        vec![
            BattleEvent::NextEnemy {
                name: "スライム".into()
            },
            BattleEvent::WordIssued {
                reading: "ねこ".into(),
                display: "neko".into()
            },
        ]
    );
    assert_eq!(session.current_word().unwrap().display, "猫");
    assert_eq!(session.display_romaji(), "neko");
    assert_eq!(session.enemy_hp(), 20);
    assert!((session.total_time() - 8.0).abs() < 1e-9);
    assert_eq!(session.time_remaining(), session.total_time());
}

// --- Keys ---

#[test]
fn test_accepted_key() {
    let mut session = make_session();
    session.start(Difficulty::Normal);

    let resp = session.handle_key('n');
    assert!(resp.accepted);
    assert_eq!(resp.events, vec![BattleEvent::Hit]);
    assert_eq!(session.typed_romaji(), "n");
    assert_eq!(session.remaining_romaji(), "eko");
    assert_eq!(session.stats().correct, 1);
    assert_eq!(session.stats().total_typed, 1);
}

#[test]
fn test_miss_damages_player_and_keeps_word() {
    let mut session = make_session();
    session.start(Difficulty::Normal);
    session.handle_key('n');

    let resp = session.handle_key('x');
    assert!(!resp.accepted);
    assert_eq!(resp.events, vec![BattleEvent::Miss { damage: 10 }]);
    assert_eq!(session.player_hp(), 90);
    assert_eq!(session.typed_romaji(), "n");
    assert_eq!(session.stats().misses, 1);
    assert_eq!(session.stats().total_typed, 2);

    // retrying with the right key continues the word
    assert!(session.handle_key('e').accepted);
    assert_eq!(session.typed_romaji(), "ne");
}

#[test]
fn test_word_completion_damages_enemy() {
    let mut session = make_session();
    session.start(Difficulty::Normal);

    let resp = type_current_word(&mut session);
    assert!(resp.accepted);
    assert_eq!(
        resp.events,
        vec![
            BattleEvent::Hit,
            BattleEvent::WordCompleted {
                reading: "ねこ".into()
            },
            BattleEvent::EnemyDamaged {
                damage: 10,
                remaining: 10
            },
            BattleEvent::WordIssued {
                reading: "ねこ".into(),
                display: "neko".into()
            },
        ]
    );
    // fresh word slot
    assert_eq!(session.typed_romaji(), "");
    assert_eq!(session.progress(), 0.0);
}

#[test]
fn test_defeat_enemy_moves_to_next() {
    let mut session = make_session();
    session.start(Difficulty::Normal);
    type_current_word(&mut session);

    let resp = type_current_word(&mut session);
    assert!(resp.events.contains(&BattleEvent::EnemyDefeated {
        name: "スライム".into()
    }));
    assert!(resp.events.contains(&BattleEvent::NextEnemy {
        name: "コウモリ".into()
    }));
    assert_eq!(session.current_enemy().unwrap().name, "コウモリ");
    assert_eq!(session.enemy_hp(), 10);
    assert_eq!(session.current_word().unwrap().reading, "しか");
    // next level's word: display spelling and timer follow it
    assert_eq!(session.display_romaji(), "sika");
}

#[test]
fn test_alternate_spelling_attacks() {
    let mut session = make_session();
    session.start(Difficulty::Normal);
    type_current_word(&mut session);
    type_current_word(&mut session);

    let responses = type_string(&mut session, "shika");
    assert!(responses.iter().all(|r| r.accepted));
    assert_eq!(session.phase(), BattlePhase::Clear);
}

#[test]
fn test_clear_all_enemies() {
    let mut session = make_session();
    session.start(Difficulty::Hard);
    type_current_word(&mut session);
    type_current_word(&mut session);
    let resp = type_current_word(&mut session);

    assert_eq!(session.phase(), BattlePhase::Clear);
    assert!(session.current_enemy().is_none());
    assert!(session.current_word().is_none());
    // perfect run on hard: (10000 + 10000) * 2.0
    assert_eq!(session.score(), 40000);
    assert_eq!(resp.events.last(), Some(&BattleEvent::AllCleared { score: 40000 }));

    let after = session.handle_key('a');
    assert!(!after.accepted);
    assert!(after.events.is_empty());
}

#[test]
fn test_game_over_after_misses() {
    let mut session = make_session();
    session.start(Difficulty::Easy);

    let responses = type_string(&mut session, "qqqqqqqqqq");
    assert_eq!(session.phase(), BattlePhase::GameOver);
    assert_eq!(session.player_hp(), 0);
    assert_eq!(session.stats().misses, 10);
    assert!(session.current_word().is_none());
    // accuracy 0, ten misses: 10000 - 1000
    assert_eq!(session.score(), 9000);
    assert_eq!(
        responses.last().unwrap().events.last(),
        Some(&BattleEvent::GameOver { score: 9000 })
    );
}

#[test]
fn test_go_to_title_resets() {
    let mut session = make_session();
    session.start(Difficulty::Hard);
    type_string(&mut session, "nq");
    session.go_to_title();

    assert_eq!(session.phase(), BattlePhase::Title);
    assert_eq!(session.player_hp(), 100);
    assert_eq!(session.stats(), Stats::default());
    assert!(session.current_word().is_none());
    assert_eq!(session.difficulty(), Difficulty::Normal);
}

#[test]
fn test_restart_after_game_over() {
    let mut session = make_session();
    session.start(Difficulty::Normal);
    type_string(&mut session, "qqqqqqqqqq");
    assert_eq!(session.phase(), BattlePhase::GameOver);

    session.start(Difficulty::Normal);
    assert_eq!(session.phase(), BattlePhase::Playing);
    assert_eq!(session.player_hp(), 100);
    assert_eq!(session.score(), 0);
}

// --- Difficulty ---

#[test]
fn test_difficulty_from_str() {
    assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
    assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    let err = "extreme".parse::<Difficulty>().unwrap_err();
    assert!(err.to_string().contains("extreme"));
    assert_eq!(Difficulty::Normal.to_string(), "normal");
}
