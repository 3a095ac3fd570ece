use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One instance of a student taking a quiz. At most one open
/// (`completed == false`) attempt may exist per (student, quiz) pair;
/// the ledger enforces that with a partial unique index. A completed
/// attempt is never mutated again.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub id: String,
    pub student_id: String,
    pub quiz_id: String,
    /// None while the attempt is open; set exactly once at completion.
    pub score: Option<i32>,
    /// Snapshot of the question set's total points at grading time.
    pub max_score: i32,
    pub completed: bool,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl QuizAttempt {
    /// A fresh open attempt. `max_score` is filled in at completion, once
    /// the question snapshot has been graded.
    pub fn open(student_id: &str, quiz_id: &str, started_at: DateTime<Utc>) -> Self {
        QuizAttempt {
            id: Uuid::new_v4().to_string(),
            student_id: student_id.to_string(),
            quiz_id: quiz_id.to_string(),
            score: None,
            max_score: 0,
            completed: false,
            started_at,
            completed_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        !self.completed
    }

    /// Checks the `score` invariants: present iff completed, and within
    /// `[0, max_score]` when present.
    pub fn score_is_consistent(&self) -> bool {
        match self.score {
            Some(score) => self.completed && score >= 0 && score <= self.max_score,
            None => !self.completed,
        }
    }
}
