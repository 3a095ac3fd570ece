use async_trait::async_trait;
use mongodb::{bson::doc, Collection, IndexModel};

#[cfg(test)]
use mockall::automock;

use crate::{db::Database, errors::AppResult, models::domain::Enrollment};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// The student's active enrollment in a course, if any. Dropped or
    /// completed enrollments do not match.
    async fn find_active(&self, student_id: &str, course_id: &str)
        -> AppResult<Option<Enrollment>>;
}

pub struct MongoEnrollmentRepository {
    collection: Collection<Enrollment>,
}

impl MongoEnrollmentRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("enrollments");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for enrollments collection");

        let student_course_index = IndexModel::builder()
            .keys(doc! { "student_id": 1, "course_id": 1 })
            .build();

        self.collection.create_index(student_course_index).await?;

        Ok(())
    }
}

#[async_trait]
impl EnrollmentRepository for MongoEnrollmentRepository {
    async fn find_active(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> AppResult<Option<Enrollment>> {
        let enrollment = self
            .collection
            .find_one(doc! {
                "student_id": student_id,
                "course_id": course_id,
                "status": "Active"
            })
            .await?;
        Ok(enrollment)
    }
}
