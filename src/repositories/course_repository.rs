use async_trait::async_trait;
use mongodb::{bson::doc, Collection};

#[cfg(test)]
use mockall::automock;

use crate::{db::Database, errors::AppResult, models::domain::Course};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>>;
}

pub struct MongoCourseRepository {
    collection: Collection<Course>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("courses");
        Self { collection }
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let course = self.collection.find_one(doc! { "id": id }).await?;
        Ok(course)
    }
}
