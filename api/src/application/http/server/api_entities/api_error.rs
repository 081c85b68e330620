use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

use chefinbox_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("bad gateway: {0}")]
    BadGateway(String),

    #[error("internal server error: {0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub message: String,
}

impl From<CoreError> for ApiError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::EmptyIngredientList => ApiError::BadRequest(value.to_string()),
            CoreError::ExternalServiceError(details) => ApiError::BadGateway(details),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::ValidationError(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            ApiError::BadGateway(details) => {
                // Remote failure details stay in the logs; the client gets a
                // stable generic message.
                tracing::error!("recipe generation failed: {}", details);
                (
                    StatusCode::BAD_GATEWAY,
                    "recipe generation failed, please try again".to_string(),
                )
            }
            ApiError::InternalServerError(details) => {
                tracing::error!("internal server error: {}", details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ApiErrorResponse { message })).into_response()
    }
}

/// Json extractor that also runs the payload's `validator` rules.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        payload
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(Self(payload))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_message(response: axum::response::Response) -> String {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: ApiErrorResponse = serde_json::from_slice(&body).unwrap();
        parsed.message
    }

    #[tokio::test]
    async fn test_empty_ingredient_list_maps_to_400_with_its_message() {
        let response = ApiError::from(CoreError::EmptyIngredientList).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_message(response).await,
            "at least one ingredient is required"
        );
    }

    #[tokio::test]
    async fn test_external_service_error_maps_to_502_hiding_remote_details() {
        let response = ApiError::from(CoreError::ExternalServiceError(
            "LLM API returned error: 500 - quota exceeded".to_string(),
        ))
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_message(response).await,
            "recipe generation failed, please try again"
        );
    }

    #[tokio::test]
    async fn test_internal_error_maps_to_500_with_generic_message() {
        let response = ApiError::from(CoreError::InternalServerError).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_message(response).await, "internal server error");
    }

    #[tokio::test]
    async fn test_validation_error_maps_to_422() {
        let response =
            ApiError::ValidationError("at least one ingredient is required".to_string())
                .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
