use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizAttempt,
    repositories::QuizAttemptRepository,
    services::{scoring::ScoringEngine, EnrollmentService, QuizService},
};

/// Orchestrates a quiz submission: enrollment check, question loading,
/// attempt-limit enforcement, grading, and the upsert-on-open-attempt
/// write. Submission both opens (if needed) and closes an attempt in one
/// call; there is no separate "start attempt" operation.
pub struct QuizAttemptService {
    quiz_service: Arc<QuizService>,
    enrollment_service: Arc<EnrollmentService>,
    attempts: Arc<dyn QuizAttemptRepository>,
}

impl QuizAttemptService {
    pub fn new(
        quiz_service: Arc<QuizService>,
        enrollment_service: Arc<EnrollmentService>,
        attempts: Arc<dyn QuizAttemptRepository>,
    ) -> Self {
        Self {
            quiz_service,
            enrollment_service,
            attempts,
        }
    }

    /// Submit answers for a quiz, producing a completed attempt.
    ///
    /// Fails with `NotFound`/`NotEnrolled` (authorization), `NoQuestions`
    /// (empty question bank) or `MaxAttemptsExceeded` (limit policy) —
    /// all detected before any ledger write. Losing a ledger race to a
    /// concurrent submission for the same (student, quiz) pair is retried
    /// once; a second loss is surfaced.
    pub async fn submit(
        &self,
        student_id: &str,
        quiz_id: &str,
        answers: &HashMap<String, String>,
    ) -> AppResult<QuizAttempt> {
        match self.try_submit(student_id, quiz_id, answers).await {
            Err(err) if err.is_ledger_race() => {
                log::warn!(
                    "Ledger race for student '{}' on quiz '{}' ({}); retrying once",
                    student_id,
                    quiz_id,
                    err
                );
                self.try_submit(student_id, quiz_id, answers).await
            }
            result => result,
        }
    }

    async fn try_submit(
        &self,
        student_id: &str,
        quiz_id: &str,
        answers: &HashMap<String, String>,
    ) -> AppResult<QuizAttempt> {
        let quiz = self.quiz_service.get_quiz(quiz_id).await?;

        self.enrollment_service.authorize(student_id, &quiz).await?;

        let questions = self.quiz_service.load_question_bank(quiz_id).await?;

        let open_attempt = self.attempts.find_open(student_id, quiz_id).await?;

        // The limit counts completed attempts only. Finishing an open
        // attempt does not create a row, so it is exempt even when the
        // numeric limit has been reached.
        if open_attempt.is_none() {
            let completed_count = self.attempts.count_completed(student_id, quiz_id).await?;
            if quiz.attempts_exhausted(completed_count) {
                return Err(AppError::MaxAttemptsExceeded(format!(
                    "Student '{}' has used all {} attempts on quiz '{}'",
                    student_id,
                    quiz.max_attempts.unwrap_or_default(),
                    quiz_id
                )));
            }
        }

        let summary = ScoringEngine::grade(&questions, answers);
        let now = Utc::now();

        let attempt_id = match open_attempt {
            Some(attempt) => attempt.id,
            None => {
                // New submissions pass through the open state so the
                // partial unique index serializes concurrent submissions
                // for the same pair.
                let inserted = self
                    .attempts
                    .insert_open(QuizAttempt::open(student_id, quiz_id, now))
                    .await?;
                inserted.id
            }
        };

        self.attempts
            .complete(&attempt_id, summary.score, summary.max_score, now)
            .await
    }
}
