pub mod attempt_repository;
pub mod course_repository;
pub mod enrollment_repository;
pub mod lesson_repository;
pub mod question_repository;
pub mod quiz_repository;
pub mod user_repository;

pub use attempt_repository::{MongoQuizAttemptRepository, QuizAttemptRepository};
pub use course_repository::{CourseRepository, MongoCourseRepository};
pub use enrollment_repository::{EnrollmentRepository, MongoEnrollmentRepository};
pub use lesson_repository::{LessonRepository, MongoLessonRepository};
pub use question_repository::{MongoQuizQuestionRepository, QuizQuestionRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
