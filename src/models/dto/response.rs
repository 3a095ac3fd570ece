use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{
    quiz_question::QuestionType, Quiz, QuizAttempt, QuizQuestion,
};

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuizAttemptResponse {
    pub id: String,
    pub quiz_id: String,
    pub student_id: String,
    pub score: Option<i32>,
    pub max_score: i32,
    pub completed: bool,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<QuizAttempt> for QuizAttemptResponse {
    fn from(attempt: QuizAttempt) -> Self {
        QuizAttemptResponse {
            id: attempt.id,
            quiz_id: attempt.quiz_id,
            student_id: attempt.student_id,
            score: attempt.score,
            max_score: attempt.max_score,
            completed: attempt.completed,
            started_at: attempt.started_at,
            completed_at: attempt.completed_at,
        }
    }
}

/// A question as shown to a student taking the quiz: the canonical answer
/// never leaves the server.
#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuestionForTaking {
    pub id: String,
    pub prompt: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub points: i32,
    pub position: i32,
}

impl From<QuizQuestion> for QuestionForTaking {
    fn from(question: QuizQuestion) -> Self {
        QuestionForTaking {
            id: question.id,
            prompt: question.prompt,
            question_type: question.question_type,
            options: question.options,
            points: question.points,
            position: question.position,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuizForTaking {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub time_limit_minutes: Option<i32>,
    pub max_attempts: Option<i32>,
    pub questions: Vec<QuestionForTaking>,
}

impl QuizForTaking {
    pub fn from_quiz(quiz: Quiz, questions: Vec<QuizQuestion>) -> Self {
        QuizForTaking {
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            time_limit_minutes: quiz.time_limit_minutes,
            max_attempts: quiz.max_attempts,
            questions: questions.into_iter().map(QuestionForTaking::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct PaginationMetadata {
    pub offset: i64,
    pub limit: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct PaginatedResponseQuizAttempt {
    pub data: Vec<QuizAttemptResponse>,
    pub pagination: PaginationMetadata,
}
