use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppError, errors::AppResult, models::domain::QuizAttempt};

/// The attempt ledger. Serialization of concurrent submissions for the
/// same (student, quiz) pair happens here, at the storage boundary, so the
/// guarantees hold across multiple service instances:
///
/// - `insert_open` relies on a partial unique index over open attempts;
///   losing a race yields `AlreadyExists`.
/// - `complete` is a compare-and-swap on `completed == false`; losing a
///   race yields `Conflict`.
///
/// Both are transient from the caller's point of view and retried once by
/// the submit flow.
#[async_trait]
pub trait QuizAttemptRepository: Send + Sync {
    async fn insert_open(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt>;
    async fn complete(
        &self,
        attempt_id: &str,
        score: i32,
        max_score: i32,
        completed_at: DateTime<Utc>,
    ) -> AppResult<QuizAttempt>;
    async fn find_open(&self, student_id: &str, quiz_id: &str) -> AppResult<Option<QuizAttempt>>;
    async fn count_completed(&self, student_id: &str, quiz_id: &str) -> AppResult<u64>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizAttempt>>;
    async fn find_by_student(
        &self,
        student_id: &str,
        quiz_id: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<QuizAttempt>, i64)>;
}

pub struct MongoQuizAttemptRepository {
    collection: Collection<QuizAttempt>,
}

impl MongoQuizAttemptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_attempts");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_attempts collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        // At most one open attempt per (student, quiz) pair.
        let open_attempt_index = IndexModel::builder()
            .keys(doc! { "student_id": 1, "quiz_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .partial_filter_expression(doc! { "completed": false })
                    .name("open_attempt_unique".to_string())
                    .build(),
            )
            .build();

        let student_quiz_index = IndexModel::builder()
            .keys(doc! { "student_id": 1, "quiz_id": 1, "completed": 1 })
            .options(
                IndexOptions::builder()
                    .name("student_quiz_completed".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(open_attempt_index).await?;
        self.collection.create_index(student_quiz_index).await?;

        Ok(())
    }

    fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
        matches!(
            err.kind.as_ref(),
            ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
        )
    }
}

#[async_trait]
impl QuizAttemptRepository for MongoQuizAttemptRepository {
    async fn insert_open(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        match self.collection.insert_one(&attempt).await {
            Ok(_) => Ok(attempt),
            Err(err) if Self::is_duplicate_key(&err) => Err(AppError::AlreadyExists(format!(
                "An open attempt already exists for student '{}' on quiz '{}'",
                attempt.student_id, attempt.quiz_id
            ))),
            Err(err) => Err(err.into()),
        }
    }

    async fn complete(
        &self,
        attempt_id: &str,
        score: i32,
        max_score: i32,
        completed_at: DateTime<Utc>,
    ) -> AppResult<QuizAttempt> {
        let completed_at_bson = mongodb::bson::to_bson(&completed_at)?;

        let updated = self
            .collection
            .find_one_and_update(
                doc! { "id": attempt_id, "completed": false },
                doc! { "$set": {
                    "score": score,
                    "max_score": max_score,
                    "completed": true,
                    "completed_at": completed_at_bson,
                }},
            )
            .return_document(ReturnDocument::After)
            .await?;

        updated.ok_or_else(|| {
            AppError::Conflict(format!(
                "Attempt '{}' was already completed by a concurrent submission",
                attempt_id
            ))
        })
    }

    async fn find_open(&self, student_id: &str, quiz_id: &str) -> AppResult<Option<QuizAttempt>> {
        let attempt = self
            .collection
            .find_one(doc! {
                "student_id": student_id,
                "quiz_id": quiz_id,
                "completed": false
            })
            .await?;
        Ok(attempt)
    }

    async fn count_completed(&self, student_id: &str, quiz_id: &str) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! {
                "student_id": student_id,
                "quiz_id": quiz_id,
                "completed": true
            })
            .await?;
        Ok(count)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizAttempt>> {
        let attempt = self.collection.find_one(doc! { "id": id }).await?;
        Ok(attempt)
    }

    async fn find_by_student(
        &self,
        student_id: &str,
        quiz_id: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<QuizAttempt>, i64)> {
        let mut filter = doc! { "student_id": student_id };

        if let Some(qid) = quiz_id {
            filter.insert("quiz_id", qid);
        }

        let total = self.collection.count_documents(filter.clone()).await?;

        let attempts = self
            .collection
            .find(filter)
            .skip(offset.max(0) as u64)
            .limit(limit)
            .sort(doc! { "started_at": -1 })
            .await?
            .try_collect()
            .await?;

        Ok((attempts, total as i64))
    }
}
