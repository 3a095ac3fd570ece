use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Quiz,
    repositories::{CourseRepository, EnrollmentRepository, LessonRepository, UserRepository},
};

/// The authorization check binding a student to a course before quiz
/// access. Runs before any attempt-ledger mutation so an unauthorized
/// submission never creates ledger rows.
pub struct EnrollmentService {
    users: Arc<dyn UserRepository>,
    lessons: Arc<dyn LessonRepository>,
    courses: Arc<dyn CourseRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl EnrollmentService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        lessons: Arc<dyn LessonRepository>,
        courses: Arc<dyn CourseRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
    ) -> Self {
        Self {
            users,
            lessons,
            courses,
            enrollments,
        }
    }

    /// Resolves the quiz to its owning course through the content
    /// hierarchy and requires an active enrollment linking the student to
    /// that course. A broken content link is `NotFound`; an absent or
    /// inactive enrollment is `NotEnrolled`.
    pub async fn authorize(&self, student_id: &str, quiz: &Quiz) -> AppResult<()> {
        self.users
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student '{}' not found", student_id)))?;

        let lesson = self
            .lessons
            .find_by_id(&quiz.lesson_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Lesson '{}' not found", quiz.lesson_id))
            })?;

        let course = self
            .courses
            .find_by_id(&lesson.course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Course '{}' not found", lesson.course_id))
            })?;

        self.enrollments
            .find_active(student_id, &course.id)
            .await?
            .ok_or_else(|| {
                AppError::NotEnrolled(format!(
                    "Student '{}' has no active enrollment in course '{}'",
                    student_id, course.id
                ))
            })?;

        Ok(())
    }
}
