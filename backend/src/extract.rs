//! Validated JSON request bodies
//!
//! `ValidatedJson<T>` is the one place request bodies are parsed and
//! checked. Anything axum's `Json` would reject (missing content type,
//! empty body, syntax errors, missing required fields) becomes a 400, and
//! so does any `validator` rule failure. Handlers never see a body that
//! failed either step.

use crate::error::ApiError;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// JSON body that has passed its `validator` rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;

        value.validate().map_err(validation_error)?;

        Ok(Self(value))
    }
}

/// Collapse `validator` output into one error, first field by name
fn validation_error(errors: ValidationErrors) -> ApiError {
    let mut problems: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let reason = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (field.to_string(), reason)
            })
        })
        .collect();
    problems.sort();

    let field = problems.first().map(|(field, _)| field.clone());
    let message = problems
        .iter()
        .map(|(field, reason)| format!("{}: {}", field, reason))
        .collect::<Vec<_>>()
        .join("; ");

    ApiError::Validation { message, field }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header::CONTENT_TYPE};
    use bookmarks_shared::AuthRequest;

    fn json_request(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn extract(req: Request) -> Result<ValidatedJson<AuthRequest>, ApiError> {
        ValidatedJson::<AuthRequest>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let ValidatedJson(body) = extract(json_request(r#"{"email":"a@x.com","password":"secret"}"#))
            .await
            .unwrap();
        assert_eq!(body.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let err = extract(json_request(r#"{"email":"a@x.com"}"#)).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_validation_error() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let err = extract(req).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_rule_failure_names_field() {
        let err = extract(json_request(r#"{"email":"nope","password":"secret"}"#))
            .await
            .unwrap_err();
        match err {
            ApiError::Validation { field, message } => {
                assert_eq!(field.as_deref(), Some("email"));
                assert!(message.starts_with("email:"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
