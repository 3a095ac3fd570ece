use std::collections::HashMap;

use crate::models::domain::QuizQuestion;

pub struct ScoringEngine;

/// Totals for one graded attempt. `max_score` is the snapshot of the
/// question set in use; completed attempts never recompute it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeSummary {
    pub score: i32,
    pub max_score: i32,
}

impl ScoringEngine {
    /// Grading comparison key: surrounding whitespace stripped, case folded.
    fn normalize(answer: &str) -> String {
        answer.trim().to_lowercase()
    }

    /// Grade a single question against the submitted answer, if any.
    ///
    /// The same normalized string equality applies to every question type;
    /// `question_type` only drives presentation. A missing answer is an
    /// incorrect answer worth zero points, not an error.
    pub fn evaluate(question: &QuizQuestion, submitted: Option<&str>) -> (bool, i32) {
        let Some(submitted) = submitted else {
            return (false, 0);
        };

        let correct = Self::normalize(submitted) == Self::normalize(&question.correct_answer);
        let points = if correct { question.points } else { 0 };

        (correct, points)
    }

    /// Grade a full question set against the caller's answer map, keyed by
    /// question id.
    pub fn grade(questions: &[QuizQuestion], answers: &HashMap<String, String>) -> GradeSummary {
        let mut score = 0;
        let mut max_score = 0;

        for question in questions {
            let submitted = answers.get(&question.id).map(String::as_str);
            let (_, points_awarded) = Self::evaluate(question, submitted);

            score += points_awarded;
            max_score += question.points;
        }

        GradeSummary { score, max_score }
    }
}
