use async_graphql::Enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Enrollment {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub status: EnrollmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrolled_at: Option<DateTime<Utc>>,
}

/// Only `Active` enrollments satisfy the quiz-access check; a dropped or
/// completed enrollment no longer grants access to course quizzes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, Copy)]
pub enum EnrollmentStatus {
    Active,
    Dropped,
    Completed,
}

impl Enrollment {
    pub fn is_active(&self) -> bool {
        self.status == EnrollmentStatus::Active
    }
}
