use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub lesson_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Advisory only; countdown enforcement lives in the client.
    pub time_limit_minutes: Option<i32>,
    /// None = unlimited attempts.
    pub max_attempts: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Quiz {
    /// True when `completed_count` exhausts the configured attempt limit.
    /// Unlimited quizzes never exhaust.
    pub fn attempts_exhausted(&self, completed_count: u64) -> bool {
        match self.max_attempts {
            Some(limit) => completed_count >= limit.max(0) as u64,
            None => false,
        }
    }
}
