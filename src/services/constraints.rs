use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty band driving the length window and the generator prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Length window and difficulty derived from a progression level
/// Computed per request and discarded after use
#[derive(Debug, Clone)]
pub struct WordConstraints {
    pub min_len: usize,
    pub max_len: usize,
    pub difficulty: Difficulty,
    pub theme: Option<String>,
}

/// Map a progression level onto one of six bands
/// Levels below 1 clamp to the first band; anything past 30 lands in the last
pub fn level_to_constraints(level: i64) -> WordConstraints {
    let (min_len, max_len, difficulty) = if level <= 5 {
        (4, 6, Difficulty::Easy)
    } else if level <= 10 {
        (5, 7, Difficulty::Medium)
    } else if level <= 15 {
        (6, 8, Difficulty::Medium)
    } else if level <= 20 {
        (7, 9, Difficulty::Hard)
    } else if level <= 30 {
        (8, 10, Difficulty::Hard)
    } else {
        (9, 12, Difficulty::Hard)
    };

    WordConstraints {
        min_len,
        max_len,
        difficulty,
        theme: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(level_to_constraints(5).difficulty, Difficulty::Easy);
        assert_eq!(level_to_constraints(6).min_len, 5);
        assert_eq!(level_to_constraints(7).difficulty, Difficulty::Medium);
        assert_eq!(level_to_constraints(11).difficulty, Difficulty::Medium);
        assert_eq!(level_to_constraints(16).difficulty, Difficulty::Hard);
        assert_eq!(level_to_constraints(21).difficulty, Difficulty::Hard);
        assert_eq!(level_to_constraints(31).max_len, 12);
    }

    #[test]
    fn test_clamps_out_of_range_levels() {
        let low = level_to_constraints(-3);
        assert_eq!((low.min_len, low.max_len), (4, 6));
        assert_eq!(low.difficulty, Difficulty::Easy);

        let high = level_to_constraints(10_000);
        assert_eq!((high.min_len, high.max_len), (9, 12));
        assert_eq!(high.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_bands_monotonic() {
        let mut prev = level_to_constraints(1);
        for level in 2..=60 {
            let next = level_to_constraints(level);
            assert!(next.min_len <= next.max_len);
            assert!(next.min_len >= prev.min_len);
            assert!(next.max_len >= prev.max_len);
            assert!(next.difficulty >= prev.difficulty);
            prev = next;
        }
    }
}
