use crate::utils::{day_diff, yesterday_key};
use serde::{Deserialize, Serialize};

/// Outcome of one resolved daily round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Won,
    Lost,
}

/// Consecutive-day solve counter, held client-side and passed through the
/// transition functions below
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStreakRecord {
    #[serde(default)]
    pub current: u32,
    #[serde(default)]
    pub last_solved_date: Option<String>,
    #[serde(default)]
    pub last_played_date: Option<String>,
}

/// Missed-day decay, applied when a new day's puzzle is loaded and before
/// any outcome for that day is recorded: a gap of more than one day since
/// the last play zeroes the streak
pub fn apply_load_decay(mut record: DailyStreakRecord, today_key: &str) -> DailyStreakRecord {
    if let Some(last_played) = record.last_played_date.as_deref() {
        if day_diff(last_played, today_key) > 1 {
            record.current = 0;
        }
    }
    record
}

/// Transition for one resolved round
///
/// A win on a new day extends the streak only when yesterday was solved,
/// otherwise restarts it at 1. A loss zeroes it unless today was already
/// solved. The last-played date always moves forward.
pub fn resolve(
    mut record: DailyStreakRecord,
    outcome: RoundOutcome,
    date_key: &str,
) -> DailyStreakRecord {
    let already_solved_today = record.last_solved_date.as_deref() == Some(date_key);

    match outcome {
        RoundOutcome::Won if !already_solved_today => {
            let solved_yesterday = match yesterday_key(date_key) {
                Some(yesterday) => record.last_solved_date.as_deref() == Some(yesterday.as_str()),
                None => false,
            };
            record.current = if solved_yesterday { record.current + 1 } else { 1 };
            record.last_solved_date = Some(date_key.to_string());
        }
        RoundOutcome::Lost if !already_solved_today => {
            record.current = 0;
        }
        _ => {}
    }

    record.last_played_date = Some(date_key.to_string());
    record
}
