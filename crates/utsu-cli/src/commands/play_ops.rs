use std::fs;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use utsu_session::{BattleEvent, BattlePhase, BattleSession, Difficulty, WordBank};

use super::die;

pub fn play(difficulty: Difficulty, seed: Option<u64>, words_file: Option<&str>) {
    let bank = match words_file {
        Some(file) => {
            let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
            die!(WordBank::from_toml(&content), "Error in {file}: {}")
        }
        None => WordBank::default(),
    };
    let seed = seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let mut session = BattleSession::new(bank, seed);
    let stdin = io::stdin();
    let stdout = io::stdout();
    die!(
        run(&mut session, difficulty, stdin.lock(), stdout.lock()),
        "Error: {}"
    );
}

/// Line-based battle loop. Each input line is a burst of keys; the time spent
/// at the prompt is charged to the word timer before the keys are applied.
fn run<R: BufRead, W: Write>(
    session: &mut BattleSession,
    difficulty: Difficulty,
    input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "difficulty: {difficulty}")?;
    report(&mut out, &session.start(difficulty))?;

    let mut lines = input.lines();
    let mut last = Instant::now();
    while session.phase() == BattlePhase::Playing {
        prompt(&mut out, session)?;
        let Some(line) = lines.next().transpose()? else {
            writeln!(out, "\nquit")?;
            return Ok(());
        };

        let events = session.tick(last.elapsed().as_secs_f64());
        last = Instant::now();
        let timed_out = events.iter().any(|e| matches!(e, BattleEvent::Timeout { .. }));
        report(&mut out, &events)?;
        if timed_out {
            // The line was typed against the expired word.
            continue;
        }

        for key in line.trim_end().chars() {
            if session.phase() != BattlePhase::Playing {
                break;
            }
            report(&mut out, &session.handle_key(key).events)?;
        }
    }

    let stats = session.stats();
    writeln!(
        out,
        "{}: score {}  ({} correct, {} misses, {:.1}% accuracy)",
        if session.phase() == BattlePhase::Clear { "CLEAR" } else { "GAME OVER" },
        session.score(),
        stats.correct,
        stats.misses,
        stats.accuracy() * 100.0
    )?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W, session: &BattleSession) -> io::Result<()> {
    let enemy = session.current_enemy().map_or("", |e| e.name.as_str());
    let word = session.current_word().map_or("", |w| w.display.as_str());
    write!(
        out,
        "[HP {}/{}] {} ({})  {:.1}s  {}  {}|{}\n> ",
        session.player_hp(),
        session.player_max_hp(),
        enemy,
        session.enemy_hp(),
        session.time_remaining(),
        word,
        session.typed_romaji(),
        session.remaining_romaji()
    )?;
    out.flush()
}

fn report<W: Write>(out: &mut W, events: &[BattleEvent]) -> io::Result<()> {
    for line in events.iter().filter_map(describe) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn describe(event: &BattleEvent) -> Option<String> {
    Some(match event {
        BattleEvent::Hit | BattleEvent::WordIssued { .. } => return None,
        BattleEvent::Miss { damage } => format!("miss! -{damage} HP"),
        BattleEvent::Timeout { damage } => format!("time up! -{damage} HP"),
        BattleEvent::WordCompleted { reading } => format!("{reading}: done"),
        BattleEvent::EnemyDamaged { damage, remaining } => {
            format!("enemy takes {damage} ({remaining} left)")
        }
        BattleEvent::EnemyDefeated { name } => format!("{name} defeated"),
        BattleEvent::NextEnemy { name } => format!("{name} appears"),
        BattleEvent::AllCleared { .. } | BattleEvent::GameOver { .. } => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK: &str = r#"
[[levels]]
words = [{ display = "猫", reading = "ねこ" }]

[[enemies]]
name = "スライム"
hp = 10
level = 0
"#;

    fn session() -> BattleSession {
        BattleSession::new(WordBank::from_toml(BANK).unwrap(), 7)
    }

    fn play_lines(input: &str) -> (BattleSession, String) {
        let mut s = session();
        let mut out = Vec::new();
        run(&mut s, Difficulty::Easy, input.as_bytes(), &mut out).unwrap();
        (s, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_clear_in_one_line() {
        let (s, out) = play_lines("neko\n");
        assert_eq!(s.phase(), BattlePhase::Clear);
        assert!(out.contains("スライム defeated"));
        assert!(out.contains("CLEAR"));
    }

    #[test]
    fn test_misses_reported() {
        let (s, out) = play_lines("nxeko\n");
        assert_eq!(s.phase(), BattlePhase::Clear);
        assert_eq!(s.stats().misses, 1);
        assert!(out.contains("miss! -10 HP"));
    }

    #[test]
    fn test_eof_quits() {
        let (s, out) = play_lines("ne\n");
        assert_eq!(s.phase(), BattlePhase::Playing);
        assert_eq!(s.typed_romaji(), "ne");
        assert!(out.ends_with("quit\n"));
    }

    #[test]
    fn test_describe_skips_noise() {
        assert_eq!(describe(&BattleEvent::Hit), None);
        assert_eq!(
            describe(&BattleEvent::Timeout { damage: 10 }).as_deref(),
            Some("time up! -10 HP")
        );
    }
}
