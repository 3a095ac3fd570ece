use async_graphql::{Context, Object, ID};

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    graphql::helpers::parse_id,
    identity::{extract_identity_from_context, require_owner},
    models::dto::response::{
        PaginatedResponseQuizAttempt, PaginationMetadata, QuizAttemptResponse, QuizForTaking,
    },
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn quiz_for_taking(&self, ctx: &Context<'_>, id: ID) -> AppResult<QuizForTaking> {
        let state = ctx.data::<AppState>()?;
        extract_identity_from_context(ctx)?;

        let quiz_id = parse_id(&id)?;

        state.quiz_service.quiz_for_taking(&quiz_id).await
    }

    async fn my_quiz_attempts(
        &self,
        ctx: &Context<'_>,
        quiz_id: Option<ID>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> AppResult<PaginatedResponseQuizAttempt> {
        let state = ctx.data::<AppState>()?;
        let identity = extract_identity_from_context(ctx)?;

        let offset = offset.unwrap_or(0).max(0);
        let limit = limit.unwrap_or(10).clamp(1, 50);

        let quiz_id = match quiz_id {
            Some(id) => Some(parse_id(&id)?),
            None => None,
        };

        let (attempts, total) = state
            .attempt_repository
            .find_by_student(&identity.user_id, quiz_id.as_deref(), offset, limit)
            .await?;

        let data = attempts
            .into_iter()
            .map(QuizAttemptResponse::from)
            .collect();

        Ok(PaginatedResponseQuizAttempt {
            data,
            pagination: PaginationMetadata {
                offset,
                limit,
                total,
            },
        })
    }

    async fn quiz_attempt(
        &self,
        ctx: &Context<'_>,
        attempt_id: ID,
    ) -> AppResult<QuizAttemptResponse> {
        let state = ctx.data::<AppState>()?;
        let identity = extract_identity_from_context(ctx)?;

        let attempt_id = parse_id(&attempt_id)?;

        let attempt = state
            .attempt_repository
            .find_by_id(&attempt_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz attempt not found".to_string()))?;

        require_owner(identity, &attempt.student_id)?;

        Ok(QuizAttemptResponse::from(attempt))
    }
}
