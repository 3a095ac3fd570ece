use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Helper to parse a UUID out of a GraphQL ID string.
pub fn parse_id(id: &str) -> AppResult<String> {
    Uuid::parse_str(id)
        .map(|uuid| uuid.to_string())
        .map_err(|_| AppError::ValidationError("Invalid UUID format".to_string()))
}
