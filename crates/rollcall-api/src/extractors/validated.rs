//! Validated JSON extractor
//!
//! Extracts and validates JSON request bodies using the validator crate.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Validated JSON extractor
///
/// Any body that is not JSON of the expected shape is a 400, as is a
/// body that fails its `Validate` rules.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| match e {
            JsonRejection::JsonSyntaxError(_) => ApiError::invalid_body("Malformed JSON body"),
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::invalid_body("Expected a JSON body with Content-Type: application/json")
            }
            other => ApiError::invalid_body(other.body_text()),
        })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
