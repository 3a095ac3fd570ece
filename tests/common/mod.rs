#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use studyhall_server::{
    errors::{AppError, AppResult},
    models::domain::{
        enrollment::EnrollmentStatus, quiz_question::QuestionType, user::UserRole, Course,
        Enrollment, Lesson, Quiz, QuizAttempt, QuizQuestion, User,
    },
    repositories::{
        CourseRepository, EnrollmentRepository, LessonRepository, QuizAttemptRepository,
        QuizQuestionRepository, QuizRepository, UserRepository,
    },
    services::{EnrollmentService, QuizAttemptService, QuizService},
};

// ---------------------------------------------------------------------------
// In-memory repositories
// ---------------------------------------------------------------------------

pub struct InMemoryQuizRepository {
    quizzes: RwLock<HashMap<String, Quiz>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: RwLock::new(HashMap::new()),
        }
    }

    pub async fn put(&self, quiz: Quiz) {
        self.quizzes.write().await.insert(quiz.id.clone(), quiz);
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }
}

pub struct InMemoryQuizQuestionRepository {
    questions: RwLock<Vec<QuizQuestion>>,
}

impl InMemoryQuizQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: RwLock::new(Vec::new()),
        }
    }

    pub async fn put(&self, question: QuizQuestion) {
        self.questions.write().await.push(question);
    }
}

#[async_trait]
impl QuizQuestionRepository for InMemoryQuizQuestionRepository {
    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        let questions = self.questions.read().await;
        let mut items: Vec<QuizQuestion> = questions
            .iter()
            .filter(|q| q.quiz_id == quiz_id)
            .cloned()
            .collect();
        items.sort_by_key(|q| q.position);
        Ok(items)
    }
}

pub struct InMemoryLessonRepository {
    lessons: RwLock<HashMap<String, Lesson>>,
}

impl InMemoryLessonRepository {
    pub fn new() -> Self {
        Self {
            lessons: RwLock::new(HashMap::new()),
        }
    }

    pub async fn put(&self, lesson: Lesson) {
        self.lessons.write().await.insert(lesson.id.clone(), lesson);
    }
}

#[async_trait]
impl LessonRepository for InMemoryLessonRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Lesson>> {
        let lessons = self.lessons.read().await;
        Ok(lessons.get(id).cloned())
    }
}

pub struct InMemoryCourseRepository {
    courses: RwLock<HashMap<String, Course>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self {
            courses: RwLock::new(HashMap::new()),
        }
    }

    pub async fn put(&self, course: Course) {
        self.courses.write().await.insert(course.id.clone(), course);
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let courses = self.courses.read().await;
        Ok(courses.get(id).cloned())
    }
}

pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    pub async fn put(&self, user: User) {
        self.users.write().await.insert(user.id.clone(), user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }
}

pub struct InMemoryEnrollmentRepository {
    enrollments: RwLock<Vec<Enrollment>>,
}

impl InMemoryEnrollmentRepository {
    pub fn new() -> Self {
        Self {
            enrollments: RwLock::new(Vec::new()),
        }
    }

    pub async fn put(&self, enrollment: Enrollment) {
        self.enrollments.write().await.push(enrollment);
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn find_active(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> AppResult<Option<Enrollment>> {
        let enrollments = self.enrollments.read().await;
        Ok(enrollments
            .iter()
            .find(|e| {
                e.student_id == student_id && e.course_id == course_id && e.is_active()
            })
            .cloned())
    }
}

/// In-memory attempt ledger with the same guarantees the Mongo
/// implementation gets from its indexes: at most one open attempt per
/// (student, quiz) pair, and compare-and-swap completion.
pub struct InMemoryQuizAttemptRepository {
    attempts: RwLock<HashMap<String, QuizAttempt>>,
}

impl InMemoryQuizAttemptRepository {
    pub fn new() -> Self {
        Self {
            attempts: RwLock::new(HashMap::new()),
        }
    }

    pub async fn all_for_pair(&self, student_id: &str, quiz_id: &str) -> Vec<QuizAttempt> {
        let attempts = self.attempts.read().await;
        attempts
            .values()
            .filter(|a| a.student_id == student_id && a.quiz_id == quiz_id)
            .cloned()
            .collect()
    }

    pub async fn total_rows(&self) -> usize {
        self.attempts.read().await.len()
    }
}

#[async_trait]
impl QuizAttemptRepository for InMemoryQuizAttemptRepository {
    async fn insert_open(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        let mut attempts = self.attempts.write().await;

        let open_exists = attempts.values().any(|a| {
            a.student_id == attempt.student_id && a.quiz_id == attempt.quiz_id && a.is_open()
        });
        if open_exists || attempts.contains_key(&attempt.id) {
            return Err(AppError::AlreadyExists(format!(
                "An open attempt already exists for student '{}' on quiz '{}'",
                attempt.student_id, attempt.quiz_id
            )));
        }

        attempts.insert(attempt.id.clone(), attempt.clone());
        Ok(attempt)
    }

    async fn complete(
        &self,
        attempt_id: &str,
        score: i32,
        max_score: i32,
        completed_at: chrono::DateTime<Utc>,
    ) -> AppResult<QuizAttempt> {
        let mut attempts = self.attempts.write().await;

        match attempts.get_mut(attempt_id) {
            Some(attempt) if attempt.is_open() => {
                attempt.score = Some(score);
                attempt.max_score = max_score;
                attempt.completed = true;
                attempt.completed_at = Some(completed_at);
                Ok(attempt.clone())
            }
            _ => Err(AppError::Conflict(format!(
                "Attempt '{}' was already completed by a concurrent submission",
                attempt_id
            ))),
        }
    }

    async fn find_open(&self, student_id: &str, quiz_id: &str) -> AppResult<Option<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts
            .values()
            .find(|a| a.student_id == student_id && a.quiz_id == quiz_id && a.is_open())
            .cloned())
    }

    async fn count_completed(&self, student_id: &str, quiz_id: &str) -> AppResult<u64> {
        let attempts = self.attempts.read().await;
        Ok(attempts
            .values()
            .filter(|a| a.student_id == student_id && a.quiz_id == quiz_id && a.completed)
            .count() as u64)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts.get(id).cloned())
    }

    async fn find_by_student(
        &self,
        student_id: &str,
        quiz_id: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<QuizAttempt>, i64)> {
        let attempts = self.attempts.read().await;
        let mut items: Vec<QuizAttempt> = attempts
            .values()
            .filter(|a| {
                a.student_id == student_id
                    && quiz_id.map(|qid| a.quiz_id == qid).unwrap_or(true)
            })
            .cloned()
            .collect();

        items.sort_by(|a, b| b.started_at.cmp(&a.started_at));

        let total = items.len() as i64;
        let start = offset.max(0) as usize;
        let end = (start + limit.max(0) as usize).min(items.len());

        let page = if start >= items.len() {
            vec![]
        } else {
            items[start..end].to_vec()
        };

        Ok((page, total))
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn make_user(id: &str) -> User {
    User {
        id: id.to_string(),
        display_name: "Test Student".to_string(),
        email: format!("{}@example.com", id),
        role: UserRole::Student,
        created_at: Some(Utc::now()),
    }
}

pub fn make_course(id: &str) -> Course {
    Course {
        id: id.to_string(),
        title: "Intro to Geography".to_string(),
        created_by_user_id: "teacher-1".to_string(),
        created_at: Some(Utc::now()),
    }
}

pub fn make_lesson(id: &str, course_id: &str) -> Lesson {
    Lesson {
        id: id.to_string(),
        course_id: course_id.to_string(),
        title: "Unit 1".to_string(),
        position: 1,
        created_at: Some(Utc::now()),
    }
}

pub fn make_enrollment(student_id: &str, course_id: &str, status: EnrollmentStatus) -> Enrollment {
    Enrollment {
        id: Uuid::new_v4().to_string(),
        student_id: student_id.to_string(),
        course_id: course_id.to_string(),
        status,
        enrolled_at: Some(Utc::now()),
    }
}

pub fn make_quiz(id: &str, lesson_id: &str, max_attempts: Option<i32>) -> Quiz {
    Quiz {
        id: id.to_string(),
        lesson_id: lesson_id.to_string(),
        title: "Unit 1 checkpoint".to_string(),
        description: None,
        time_limit_minutes: None,
        max_attempts,
        created_at: Some(Utc::now()),
        modified_at: Some(Utc::now()),
    }
}

pub fn make_question(
    id: &str,
    quiz_id: &str,
    correct_answer: &str,
    points: i32,
    position: i32,
) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        quiz_id: quiz_id.to_string(),
        prompt: format!("Question {}", id),
        question_type: QuestionType::ShortAnswer,
        options: vec![],
        correct_answer: correct_answer.to_string(),
        points,
        position,
        created_at: Some(Utc::now()),
        modified_at: Some(Utc::now()),
    }
}

// ---------------------------------------------------------------------------
// Wired-up service stack over the in-memory repositories
// ---------------------------------------------------------------------------

pub struct TestWorld {
    pub quizzes: Arc<InMemoryQuizRepository>,
    pub questions: Arc<InMemoryQuizQuestionRepository>,
    pub lessons: Arc<InMemoryLessonRepository>,
    pub courses: Arc<InMemoryCourseRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub enrollments: Arc<InMemoryEnrollmentRepository>,
    pub attempts: Arc<InMemoryQuizAttemptRepository>,
    pub quiz_service: Arc<QuizService>,
    pub attempt_service: QuizAttemptService,
}

impl TestWorld {
    pub fn new() -> Self {
        let quizzes = Arc::new(InMemoryQuizRepository::new());
        let questions = Arc::new(InMemoryQuizQuestionRepository::new());
        let lessons = Arc::new(InMemoryLessonRepository::new());
        let courses = Arc::new(InMemoryCourseRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let enrollments = Arc::new(InMemoryEnrollmentRepository::new());
        let attempts = Arc::new(InMemoryQuizAttemptRepository::new());

        let quiz_service = Arc::new(QuizService::new(quizzes.clone(), questions.clone()));
        let enrollment_service = Arc::new(EnrollmentService::new(
            users.clone(),
            lessons.clone(),
            courses.clone(),
            enrollments.clone(),
        ));
        let attempt_service = QuizAttemptService::new(
            quiz_service.clone(),
            enrollment_service,
            attempts.clone(),
        );

        Self {
            quizzes,
            questions,
            lessons,
            courses,
            users,
            enrollments,
            attempts,
            quiz_service,
            attempt_service,
        }
    }

    /// Seeds a student with an active enrollment in a course whose single
    /// lesson owns the given quiz.
    pub async fn seed_enrolled_quiz(
        &self,
        student_id: &str,
        quiz_id: &str,
        max_attempts: Option<i32>,
    ) {
        self.users.put(make_user(student_id)).await;
        self.courses.put(make_course("course-1")).await;
        self.lessons.put(make_lesson("lesson-1", "course-1")).await;
        self.enrollments
            .put(make_enrollment(
                student_id,
                "course-1",
                EnrollmentStatus::Active,
            ))
            .await;
        self.quizzes
            .put(make_quiz(quiz_id, "lesson-1", max_attempts))
            .await;
    }

    /// The three-question set used throughout the scenario tests:
    /// 10 + 5 + 15 points, answers "4" / "true" / "Paris".
    pub async fn seed_standard_questions(&self, quiz_id: &str) {
        self.questions
            .put(make_question("q-1", quiz_id, "4", 10, 1))
            .await;
        self.questions
            .put(make_question("q-2", quiz_id, "true", 5, 2))
            .await;
        self.questions
            .put(make_question("q-3", quiz_id, "Paris", 15, 3))
            .await;
    }
}

pub fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
