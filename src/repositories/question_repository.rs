use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

#[cfg(test)]
use mockall::automock;

use crate::{db::Database, errors::AppResult, models::domain::QuizQuestion};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuizQuestionRepository: Send + Sync {
    /// All questions of a quiz in display order. An empty result means the
    /// quiz cannot be attempted; the caller decides how to surface that.
    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>>;
}

pub struct MongoQuizQuestionRepository {
    collection: Collection<QuizQuestion>,
}

impl MongoQuizQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_questions");
        Self { collection }
    }
}

#[async_trait]
impl QuizQuestionRepository for MongoQuizQuestionRepository {
    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        let questions = self
            .collection
            .find(doc! { "quiz_id": quiz_id })
            .sort(doc! { "position": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }
}
