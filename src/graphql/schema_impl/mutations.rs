use async_graphql::{Context, Object};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppResult,
    graphql::helpers::parse_id,
    identity::extract_identity_from_context,
    models::dto::{
        request::{answers_to_map, SubmitQuizAttemptInput},
        response::QuizAttemptResponse,
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn submit_quiz_attempt(
        &self,
        ctx: &Context<'_>,
        input: SubmitQuizAttemptInput,
    ) -> AppResult<QuizAttemptResponse> {
        let state = ctx.data::<AppState>()?;
        let identity = extract_identity_from_context(ctx)?;

        input.validate()?;

        let quiz_id = parse_id(&input.quiz_id)?;
        let answers = answers_to_map(&input.answers);

        let attempt = state
            .quiz_attempt_service
            .submit(&identity.user_id, &quiz_id, &answers)
            .await?;

        Ok(QuizAttemptResponse::from(attempt))
    }
}
