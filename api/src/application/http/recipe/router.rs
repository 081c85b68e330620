use super::handlers::{
    generate_recipes::{__path_generate_recipes, generate_recipes},
    generate_recipes_with_images::{
        __path_generate_recipes_with_images, generate_recipes_with_images,
    },
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipes, generate_recipes_with_images))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/generate", state.args.server.root_path),
            post(generate_recipes),
        )
        .route(
            &format!(
                "{}/recipes/generate-with-images",
                state.args.server.root_path
            ),
            post(generate_recipes_with_images),
        )
}
