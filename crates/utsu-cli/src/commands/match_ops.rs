use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use utsu_core::{chunk, display_romaji, MatchState};

use super::die;

pub fn romaji(reading: &str) {
    println!("{}", display_romaji(reading));
}

pub fn chunks(reading: &str, json: bool) {
    let chunks = chunk(reading);
    if json {
        print_json(&chunks);
        return;
    }

    let width = chunks
        .iter()
        .map(|c| c.source.width())
        .max()
        .unwrap_or(0)
        .max("source".width());
    println!("{}  spellings", pad("source", width));
    for c in &chunks {
        let mark = if c.geminate { " (geminate)" } else { "" };
        println!("{}  {}{}", pad(&c.source, width), c.candidates.join(" "), mark);
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", die!(serde_json::to_string_pretty(value), "Error encoding JSON: {}"));
}

/// Left-align `s` to `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

#[derive(Serialize)]
struct KeyStep {
    key: char,
    accepted: bool,
    completed: bool,
    chunk_index: usize,
    progress: f64,
}

#[derive(Serialize)]
struct CheckReport {
    reading: String,
    display: String,
    typed: String,
    remaining: String,
    complete: bool,
    misses: usize,
    steps: Vec<KeyStep>,
}

fn run_check(reading: &str, keys: &str) -> CheckReport {
    let mut state = MatchState::new(reading);
    let steps: Vec<KeyStep> = keys
        .chars()
        .map(|key| {
            let r = state.process_key(key);
            KeyStep {
                key,
                accepted: r.accepted,
                completed: r.completed,
                chunk_index: state.chunk_index(),
                progress: state.progress(),
            }
        })
        .collect();

    CheckReport {
        reading: reading.to_string(),
        display: display_romaji(reading),
        typed: state.typed_romaji().to_string(),
        remaining: state.remaining_romaji(),
        complete: state.is_complete(),
        misses: steps.iter().filter(|s| !s.accepted && !s.completed).count(),
        steps,
    }
}

/// Replay `keys` against `reading`. Returns whether the word was completed.
pub fn check(reading: &str, keys: &str, json: bool) -> bool {
    let report = run_check(reading, keys);
    if json {
        print_json(&report);
        return report.complete;
    }

    println!("reading: {}  ({})", report.reading, report.display);
    for s in &report.steps {
        let verdict = match (s.accepted, s.completed) {
            (true, true) => "ok, complete",
            (true, false) => "ok",
            (false, true) => "ignored",
            (false, false) => "miss",
        };
        println!(
            "  {:?}  {:<12} chunk {}  {:>3.0}%",
            s.key,
            verdict,
            s.chunk_index,
            s.progress * 100.0
        );
    }
    println!("typed: {}", report.typed);
    if report.complete {
        println!("complete ({} misses)", report.misses);
    } else {
        println!("incomplete, remaining: {}", report.remaining);
    }
    report.complete
}
