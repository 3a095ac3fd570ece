use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoCourseRepository, MongoEnrollmentRepository, MongoLessonRepository,
        MongoQuizAttemptRepository, MongoQuizQuestionRepository, MongoQuizRepository,
        MongoUserRepository, QuizAttemptRepository,
    },
    services::{EnrollmentService, QuizAttemptService, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub quiz_attempt_service: Arc<QuizAttemptService>,
    pub attempt_repository: Arc<dyn QuizAttemptRepository>,
    pub config: Arc<Config>,
    pub db: Database,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let question_repository = Arc::new(MongoQuizQuestionRepository::new(&db));
        let lesson_repository = Arc::new(MongoLessonRepository::new(&db));
        let course_repository = Arc::new(MongoCourseRepository::new(&db));

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let enrollment_repository = Arc::new(MongoEnrollmentRepository::new(&db));
        enrollment_repository.ensure_indexes().await?;

        let attempt_repository = Arc::new(MongoQuizAttemptRepository::new(&db));
        attempt_repository.ensure_indexes().await?;
        let attempt_repository: Arc<dyn QuizAttemptRepository> = attempt_repository;

        let quiz_service = Arc::new(QuizService::new(quiz_repository, question_repository));
        let enrollment_service = Arc::new(EnrollmentService::new(
            user_repository,
            lesson_repository,
            course_repository,
            enrollment_repository,
        ));
        let quiz_attempt_service = Arc::new(QuizAttemptService::new(
            quiz_service.clone(),
            enrollment_service,
            attempt_repository.clone(),
        ));

        Ok(Self {
            quiz_service,
            quiz_attempt_service,
            attempt_repository,
            config: Arc::new(config),
            db,
        })
    }
}
