use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    identity::CallerIdentity,
    models::dto::{
        request::{answers_to_map, PaginationParams, SubmitAnswersRequest},
        response::{PaginatedResponseQuizAttempt, PaginationMetadata, QuizAttemptResponse},
    },
};

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.db.health_check().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })))
}

/// Student-facing quiz view; canonical answers never leave the server.
#[get("/api/quizzes/{id}")]
pub async fn get_quiz_for_taking(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _caller: CallerIdentity,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.quiz_for_taking(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/api/quizzes/{id}/attempts")]
pub async fn submit_quiz_attempt(
    state: web::Data<AppState>,
    id: web::Path<String>,
    caller: CallerIdentity,
    request: web::Json<SubmitAnswersRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let answers = answers_to_map(&request.answers);

    let attempt = state
        .quiz_attempt_service
        .submit(&caller.user_id, &id, &answers)
        .await?;

    Ok(HttpResponse::Created().json(QuizAttemptResponse::from(attempt)))
}

// serde_urlencoded cannot flatten nested structs, so the pagination
// fields are spelled out and folded into PaginationParams by hand.
#[derive(Debug, Deserialize)]
struct AttemptListQuery {
    quiz_id: Option<String>,
    offset: Option<i64>,
    limit: Option<i64>,
}

#[get("/api/attempts")]
pub async fn list_my_attempts(
    state: web::Data<AppState>,
    caller: CallerIdentity,
    query: web::Query<AttemptListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = PaginationParams {
        offset: query.offset,
        limit: query.limit,
    };
    let offset = page.offset();
    let limit = page.limit();

    let (attempts, total) = state
        .attempt_repository
        .find_by_student(&caller.user_id, query.quiz_id.as_deref(), offset, limit)
        .await?;

    let data = attempts
        .into_iter()
        .map(QuizAttemptResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(PaginatedResponseQuizAttempt {
        data,
        pagination: PaginationMetadata {
            offset,
            limit,
            total,
        },
    }))
}
