pub mod quiz_handler;

pub use quiz_handler::{get_quiz_for_taking, health_check, list_my_attempts, submit_quiz_attempt};
