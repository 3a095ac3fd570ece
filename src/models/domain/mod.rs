pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_question;
pub mod user;

pub use course::Course;
pub use enrollment::Enrollment;
pub use lesson::Lesson;
pub use quiz::Quiz;
pub use quiz_attempt::QuizAttempt;
pub use quiz_question::QuizQuestion;
pub use user::User;
