use async_graphql::Enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: String,
    pub quiz_id: String,
    pub prompt: String,
    /// Affects how the question is presented, never how it is graded.
    pub question_type: QuestionType,
    /// Choice labels shown to the student; presentation metadata only.
    pub options: Vec<String>,
    pub correct_answer: String,
    pub points: i32,
    /// Display order within the quiz. Scoring ignores it.
    pub position: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, Copy)]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}
