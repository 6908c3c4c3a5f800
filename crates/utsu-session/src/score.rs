use utsu_core::settings::ScoreSettings;

use crate::types::{Difficulty, Stats};

/// Final score: base plus an accuracy bonus minus a per-miss penalty,
/// scaled by the difficulty multiplier. Never negative.
pub fn calculate_score(stats: &Stats, difficulty: Difficulty, s: &ScoreSettings) -> i64 {
    let accuracy_bonus = (stats.accuracy() * s.accuracy_weight as f64).floor() as i64;
    let raw = s.base + accuracy_bonus - i64::from(stats.misses) * s.miss_penalty;
    let scaled = (raw as f64 * difficulty.pick(&s.multiplier)).floor();
    scaled.max(0.0) as i64
}

#[cfg(test)]
mod tests {
    use utsu_core::settings::settings;

    use super::*;

    fn stats(correct: u32, misses: u32) -> Stats {
        Stats {
            correct,
            misses,
            total_typed: correct + misses,
        }
    }

    #[test]
    fn test_perfect_normal() {
        let s = &settings().score;
        // (10000 + 10000) * 1.5
        assert_eq!(calculate_score(&stats(40, 0), Difficulty::Normal, s), 30000);
    }

    #[test]
    fn test_misses_cost_accuracy_and_penalty() {
        let s = &settings().score;
        // accuracy 0.75 -> 7500; 10 misses -> -1000; easy x1.0
        assert_eq!(calculate_score(&stats(30, 10), Difficulty::Easy, s), 16500);
    }

    #[test]
    fn test_no_keys() {
        let s = &settings().score;
        assert_eq!(calculate_score(&Stats::default(), Difficulty::Hard, s), 20000);
    }

    #[test]
    fn test_never_negative() {
        let s = &settings().score;
        assert_eq!(calculate_score(&stats(0, 500), Difficulty::Hard, s), 0);
    }
}
