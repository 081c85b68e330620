use axum::extract::State;

use crate::application::http::{
    recipe::{handlers::generate_recipes::GenerateRecipesResponse, validators::GenerateRecipesRequest},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use chefinbox_core::domain::recipe::{
    ports::RecipeSuggestionService, value_objects::GenerateRecipesInput,
};

#[utoipa::path(
    post,
    path = "/generate-with-images",
    tag = "recipes",
    summary = "Generate recipe suggestions with dish photos",
    description = "Generates recipe suggestions, then requests one illustrative photo per recipe \
                   concurrently; recipes whose photo fails are returned without an image",
    responses(
        (status = 200, body = GenerateRecipesResponse)
    ),
    request_body = GenerateRecipesRequest
)]
pub async fn generate_recipes_with_images(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipesRequest>,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let suggestions = state
        .service
        .generate_recipes_with_images(GenerateRecipesInput {
            ingredients: payload.ingredients,
            meal_time: payload.meal_time,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipesResponse { data: suggestions }))
}
