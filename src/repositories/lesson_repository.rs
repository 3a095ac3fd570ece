use async_trait::async_trait;
use mongodb::{bson::doc, Collection};

#[cfg(test)]
use mockall::automock;

use crate::{db::Database, errors::AppResult, models::domain::Lesson};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait LessonRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Lesson>>;
}

pub struct MongoLessonRepository {
    collection: Collection<Lesson>,
}

impl MongoLessonRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("lessons");
        Self { collection }
    }
}

#[async_trait]
impl LessonRepository for MongoLessonRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Lesson>> {
        let lesson = self.collection.find_one(doc! { "id": id }).await?;
        Ok(lesson)
    }
}
