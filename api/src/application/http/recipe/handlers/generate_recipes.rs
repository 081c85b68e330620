use axum::extract::State;

use crate::application::http::{
    recipe::validators::GenerateRecipesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use chefinbox_core::domain::recipe::{
    entities::RecipeSuggestions, ports::RecipeSuggestionService,
    value_objects::GenerateRecipesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipesResponse {
    pub data: RecipeSuggestions,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipes",
    summary = "Generate recipe suggestions",
    description = "Generates recipe suggestions for the given ingredients and meal time",
    responses(
        (status = 200, body = GenerateRecipesResponse)
    ),
    request_body = GenerateRecipesRequest
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipesRequest>,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let suggestions = state
        .service
        .generate_recipes(GenerateRecipesInput {
            ingredients: payload.ingredients,
            meal_time: payload.meal_time,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipesResponse { data: suggestions }))
}
