pub mod enrollment_service;
pub mod quiz_attempt_service;
pub mod quiz_service;
pub mod scoring;

pub use enrollment_service::EnrollmentService;
pub use quiz_attempt_service::QuizAttemptService;
pub use quiz_service::QuizService;
pub use scoring::ScoringEngine;
