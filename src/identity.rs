use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpRequest};
use async_graphql::Context;

use crate::errors::{AppError, AppResult};

/// Header carrying the caller's user id. Populated by the gateway in front
/// of this service, which has already authenticated the session; this
/// service treats the value as a trusted identity.
pub const CALLER_ID_HEADER: &str = "x-caller-id";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: String,
}

/// Reads the trusted identity header, if present and non-empty.
pub fn caller_identity_from(req: &HttpRequest) -> Option<CallerIdentity> {
    req.headers()
        .get(CALLER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| CallerIdentity {
            user_id: v.to_string(),
        })
}

// Extractor for the calling user in handlers
impl FromRequest for CallerIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let identity = caller_identity_from(req)
            .ok_or_else(|| AppError::Unauthorized("Caller identity missing".to_string()));

        ready(identity)
    }
}

/// Helper to pull the caller identity out of the GraphQL context. The HTTP
/// handler inserts it as request data before executing the query.
pub fn extract_identity_from_context<'a>(ctx: &'a Context<'_>) -> AppResult<&'a CallerIdentity> {
    ctx.data_opt::<CallerIdentity>()
        .ok_or_else(|| AppError::Unauthorized("Caller identity missing".to_string()))
}

pub fn require_owner(identity: &CallerIdentity, owner_user_id: &str) -> AppResult<()> {
    if identity.user_id != owner_user_id {
        return Err(AppError::Unauthorized(
            "Only the owner may view this resource".to_string(),
        ));
    }
    Ok(())
}
