use chefinbox_core::domain::recipe::entities::MealTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateRecipesRequest {
    /// Free-text ingredient names; duplicates are collapsed server-side
    #[validate(length(min = 1, message = "at least one ingredient is required"))]
    pub ingredients: Vec<String>,
    pub meal_time: MealTime,
}
