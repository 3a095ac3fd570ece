use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Quiz, QuizQuestion},
        dto::response::QuizForTaking,
    },
    repositories::{QuizQuestionRepository, QuizRepository},
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuizQuestionRepository>,
}

impl QuizService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        questions: Arc<dyn QuizQuestionRepository>,
    ) -> Self {
        Self { quizzes, questions }
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        let quiz = self
            .quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        Ok(quiz)
    }

    /// The graded question set of a quiz, in display order. An empty set
    /// is a content-authoring defect and fails with `NoQuestions` rather
    /// than grading to a plausible-looking score.
    pub async fn load_question_bank(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        let questions = self.questions.find_by_quiz(quiz_id).await?;

        if questions.is_empty() {
            return Err(AppError::NoQuestions(format!(
                "Quiz '{}' has no questions and cannot be attempted",
                quiz_id
            )));
        }

        Ok(questions)
    }

    /// The student-facing view of a quiz: questions in display order with
    /// canonical answers stripped.
    pub async fn quiz_for_taking(&self, id: &str) -> AppResult<QuizForTaking> {
        let quiz = self.get_quiz(id).await?;
        let questions = self.load_question_bank(id).await?;

        Ok(QuizForTaking::from_quiz(quiz, questions))
    }
}
