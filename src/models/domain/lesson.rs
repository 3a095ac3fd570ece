use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A content unit inside a course. Quizzes hang off lessons; resolving a
/// quiz to its owning course goes through here.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Lesson {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub position: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
