use crate::services::daily::DailyPool;
use crate::services::orchestrator::{Orchestrator, WordSource};
use crate::services::streak::{DailyStreakRecord, RoundOutcome};
use serde::{Deserialize, Serialize};

/// Application state shared across all handlers
pub struct AppState {
    pub engine: Orchestrator,
    pub daily_pool: DailyPool,
}

#[derive(Deserialize)]
pub struct WordQuery {
    pub level: Option<i64>,
    pub theme: Option<String>,
    pub player_id: Option<String>,
    pub previous_word: Option<String>,
}

#[derive(Serialize)]
pub struct WordResponse {
    pub word: String,
    pub definition: String,
    pub source: WordSource,
}

#[derive(Serialize)]
pub struct DailyResponse {
    pub date_key: String,
    pub word: String,
    pub definition: String,
}

#[derive(Deserialize)]
pub struct HintQuery {
    pub word: String,
    /// Letters already guessed wrong, as a plain string of characters
    pub incorrect: Option<String>,
    /// Letters revealed by earlier hints this round
    pub revealed: Option<String>,
    /// Total letters to reveal, default 1
    pub reveal: Option<usize>,
}

#[derive(Serialize)]
pub struct HintResponse {
    pub hint: String,
    pub revealed: String,
}

#[derive(Deserialize)]
pub struct StreakResolveRequest {
    #[serde(default)]
    pub record: DailyStreakRecord,
    pub outcome: RoundOutcome,
    pub date_key: String,
}

#[derive(Deserialize)]
pub struct StreakLoadRequest {
    #[serde(default)]
    pub record: DailyStreakRecord,
    pub date_key: String,
}
