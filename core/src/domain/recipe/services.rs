use futures::future::join_all;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::{Recipe, RecipeList, RecipeSuggestions},
        ports::{LLMClient, RecipeSuggestionService},
        prompts::{image_prompt, recipe_prompt},
        schema::recipe_response_schema,
        value_objects::{GenerateRecipesInput, IngredientSet},
    },
};

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    async fn request_recipes(
        &self,
        input: &GenerateRecipesInput,
    ) -> Result<RecipeSuggestions, CoreError> {
        // 1. Validate ingredients before touching the LLM
        let ingredients: IngredientSet = input.ingredients.iter().collect();
        if ingredients.is_empty() {
            return Err(CoreError::EmptyIngredientList);
        }

        // 2. Build prompt and response schema
        let prompt = recipe_prompt(&ingredients, input.meal_time);
        let response_schema = recipe_response_schema();

        // 3. Call LLM
        let raw_response = self
            .llm_client
            .generate_with_text(prompt, response_schema)
            .await?;

        // 4. Parse strictly; a payload missing required fields is a failed
        //    generation, not a partially populated result
        let parsed: RecipeList = serde_json::from_str(&raw_response).map_err(|e| {
            tracing::error!("Failed to parse LLM response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        Ok(RecipeSuggestions::new(input.meal_time, parsed.recipes))
    }

    /// Requests an illustrative photo for one recipe. Any failure degrades
    /// to "no image" so a single bad call cannot abort the whole workflow.
    async fn request_recipe_image(&self, recipe: &Recipe) -> Option<String> {
        let prompt = image_prompt(&recipe.name, &recipe.description);

        match self.llm_client.generate_image(prompt).await {
            Ok(Some(image)) => Some(image.to_data_uri()),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Image generation failed for {}: {}", recipe.name, e);
                None
            }
        }
    }
}

impl<LLM> RecipeSuggestionService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> Result<RecipeSuggestions, CoreError> {
        self.request_recipes(&input).await
    }

    async fn generate_recipes_with_images(
        &self,
        input: GenerateRecipesInput,
    ) -> Result<RecipeSuggestions, CoreError> {
        let mut suggestions = self.request_recipes(&input).await?;

        // One image call per recipe, all in flight at once. join_all keeps
        // results in recipe order regardless of completion order.
        let images = join_all(
            suggestions
                .recipes
                .iter()
                .map(|recipe| self.request_recipe_image(recipe)),
        )
        .await;

        for (recipe, image_url) in suggestions.recipes.iter_mut().zip(images) {
            recipe.image_url = image_url;
        }

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::recipe::entities::{Difficulty, MealTime};
    use crate::domain::recipe::value_objects::GeneratedImage;

    /// LLM double with scriptable text output and per-recipe image failures.
    struct StubLLM {
        text_response: Result<String, CoreError>,
        text_calls: AtomicUsize,
        text_prompts: Mutex<Vec<String>>,
        image_calls: AtomicUsize,
        failing_image_names: Vec<&'static str>,
    }

    impl StubLLM {
        fn new(text_response: Result<String, CoreError>) -> Self {
            Self {
                text_response,
                text_calls: AtomicUsize::new(0),
                text_prompts: Mutex::new(Vec::new()),
                image_calls: AtomicUsize::new(0),
                failing_image_names: Vec::new(),
            }
        }

        fn with_failing_images(mut self, names: Vec<&'static str>) -> Self {
            self.failing_image_names = names;
            self
        }
    }

    impl LLMClient for StubLLM {
        async fn generate_with_text(
            &self,
            prompt: String,
            _response_schema: serde_json::Value,
        ) -> Result<String, CoreError> {
            self.text_calls.fetch_add(1, Ordering::SeqCst);
            self.text_prompts.lock().unwrap().push(prompt);
            self.text_response.clone()
        }

        async fn generate_image(
            &self,
            prompt: String,
        ) -> Result<Option<GeneratedImage>, CoreError> {
            self.image_calls.fetch_add(1, Ordering::SeqCst);

            if self
                .failing_image_names
                .iter()
                .any(|name| prompt.contains(name))
            {
                return Err(CoreError::ExternalServiceError(
                    "image model unavailable".to_string(),
                ));
            }

            Ok(Some(GeneratedImage {
                mime_type: "image/png".to_string(),
                bytes: vec![1, 2, 3],
            }))
        }
    }

    fn sample_payload() -> String {
        serde_json::json!({
            "recipes": [
                {
                    "name": "Kimchi fried rice",
                    "description": "A spicy classic",
                    "ingredients": ["rice", "kimchi", "egg"],
                    "instructions": ["Fry kimchi", "Add rice", "Top with egg"],
                    "cooking_time": "15 minutes",
                    "difficulty": "easy",
                    "decoration_tips": "Sprinkle sesame seeds"
                },
                {
                    "name": "Egg drop soup",
                    "description": "Light and quick",
                    "ingredients": ["egg", "stock"],
                    "instructions": ["Boil stock", "Whisk in egg"],
                    "cooking_time": "10 minutes",
                    "difficulty": "medium",
                    "decoration_tips": "Garnish with scallions"
                },
                {
                    "name": "Rice omelette",
                    "description": "Comfort food",
                    "ingredients": ["rice", "egg"],
                    "instructions": ["Cook rice", "Wrap in omelette"],
                    "cooking_time": "20 minutes",
                    "difficulty": "hard",
                    "decoration_tips": "Drizzle ketchup"
                }
            ]
        })
        .to_string()
    }

    fn input(ingredients: &[&str]) -> GenerateRecipesInput {
        GenerateRecipesInput {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            meal_time: MealTime::Lunch,
        }
    }

    #[tokio::test]
    async fn test_empty_ingredients_never_reach_the_llm() {
        let service = Service::new(StubLLM::new(Ok(sample_payload())));

        let result = service.generate_recipes(input(&[])).await;

        assert_eq!(result.unwrap_err(), CoreError::EmptyIngredientList);
        assert_eq!(service.llm_client.text_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_blank_only_ingredients_count_as_empty() {
        let service = Service::new(StubLLM::new(Ok(sample_payload())));

        let result = service
            .generate_recipes_with_images(input(&["", "   "]))
            .await;

        assert_eq!(result.unwrap_err(), CoreError::EmptyIngredientList);
        assert_eq!(service.llm_client.text_calls.load(Ordering::SeqCst), 0);
        assert_eq!(service.llm_client.image_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_successful_generation_preserves_model_order() {
        let service = Service::new(StubLLM::new(Ok(sample_payload())));

        let suggestions = service
            .generate_recipes(input(&["rice", "egg", "kimchi"]))
            .await
            .unwrap();

        let names: Vec<&str> = suggestions
            .recipes
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Kimchi fried rice", "Egg drop soup", "Rice omelette"]
        );
        assert_eq!(suggestions.recipes[0].difficulty, Difficulty::Easy);
        assert_eq!(suggestions.recipes[0].cooking_time, "15 minutes");
        assert_eq!(
            suggestions.recipes[0].decoration_tips.as_deref(),
            Some("Sprinkle sesame seeds")
        );
        assert_eq!(suggestions.meal_time, MealTime::Lunch);
        assert!(suggestions.recipes.iter().all(|r| r.image_url.is_none()));
    }

    #[tokio::test]
    async fn test_duplicate_ingredients_collapse_in_prompt() {
        let service = Service::new(StubLLM::new(Ok(sample_payload())));

        service
            .generate_recipes(input(&["egg", " egg ", "rice"]))
            .await
            .unwrap();

        let prompts = service.llm_client.text_prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("egg, rice"));
        assert_eq!(prompts[0].matches("egg").count(), 1);
    }

    #[tokio::test]
    async fn test_text_failure_yields_no_recipes() {
        let service = Service::new(StubLLM::new(Err(CoreError::ExternalServiceError(
            "LLM API returned error: 500".to_string(),
        ))));

        let result = service.generate_recipes(input(&["rice"])).await;

        assert!(matches!(
            result,
            Err(CoreError::ExternalServiceError(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_a_generation_failure() {
        // "instructions" and "decoration_tips" are required by the schema
        // but absent here; "decoration_tips" stays optional in the domain
        // type, "instructions" does not
        let payload = serde_json::json!({
            "recipes": [{
                "name": "Soup",
                "description": "Missing fields",
                "ingredients": ["water"],
                "cooking_time": "5 minutes",
                "difficulty": "easy"
            }]
        })
        .to_string();
        let service = Service::new(StubLLM::new(Ok(payload)));

        let result = service.generate_recipes(input(&["water"])).await;

        assert!(matches!(
            result,
            Err(CoreError::ExternalServiceError(_))
        ));
    }

    #[tokio::test]
    async fn test_image_failure_only_affects_its_recipe() {
        let llm = StubLLM::new(Ok(sample_payload())).with_failing_images(vec!["Egg drop soup"]);
        let service = Service::new(llm);

        let suggestions = service
            .generate_recipes_with_images(input(&["rice", "egg"]))
            .await
            .unwrap();

        assert_eq!(suggestions.recipes.len(), 3);
        assert_eq!(service.llm_client.image_calls.load(Ordering::SeqCst), 3);
        assert!(
            suggestions.recipes[0]
                .image_url
                .as_deref()
                .unwrap()
                .starts_with("data:image/png;base64,")
        );
        assert!(suggestions.recipes[1].image_url.is_none());
        assert!(suggestions.recipes[2].image_url.is_some());
    }

    #[tokio::test]
    async fn test_text_failure_skips_image_fanout() {
        let llm = StubLLM::new(Err(CoreError::ExternalServiceError("boom".to_string())));
        let service = Service::new(llm);

        let result = service
            .generate_recipes_with_images(input(&["rice"]))
            .await;

        assert!(result.is_err());
        assert_eq!(service.llm_client.image_calls.load(Ordering::SeqCst), 0);
    }
}
