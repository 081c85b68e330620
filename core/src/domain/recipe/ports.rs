use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::RecipeSuggestions,
        value_objects::{GenerateRecipesInput, GeneratedImage},
    },
};

/// Client trait for calling generative AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Structured generation: the response must follow `response_schema`.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Returns `Ok(None)` when the model answered without an image part.
    fn generate_image(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<Option<GeneratedImage>, CoreError>> + Send;
}

/// Service trait for the recipe generation workflow
#[cfg_attr(test, mockall::automock)]
pub trait RecipeSuggestionService: Send + Sync {
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<RecipeSuggestions, CoreError>> + Send;

    fn generate_recipes_with_images(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<RecipeSuggestions, CoreError>> + Send;
}
