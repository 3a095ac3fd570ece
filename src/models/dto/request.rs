use std::collections::HashMap;

use async_graphql::InputObject;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct QuestionAnswerInput {
    #[validate(length(min = 1, max = 100))]
    pub question_id: String,

    #[validate(length(max = 10000))]
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct SubmitQuizAttemptInput {
    #[validate(length(min = 1, max = 100))]
    pub quiz_id: String,

    #[validate(nested)]
    pub answers: Vec<QuestionAnswerInput>,
}

/// REST body for `POST /api/quizzes/{id}/attempts`; the quiz id comes from
/// the path instead.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAnswersRequest {
    #[validate(nested)]
    pub answers: Vec<QuestionAnswerInput>,
}

/// Collapses submitted answers into the question-id keyed map the grading
/// engine consumes. A repeated question id keeps the last value.
pub fn answers_to_map(answers: &[QuestionAnswerInput]) -> HashMap<String, String> {
    answers
        .iter()
        .map(|a| (a.question_id.clone(), a.answer.clone()))
        .collect()
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }
}
