use crate::domain::recipe::{entities::MealTime, value_objects::IngredientSet};

/// Prompt asking for three suggestions built around the given ingredients.
pub fn recipe_prompt(ingredients: &IngredientSet, meal_time: MealTime) -> String {
    format!(
        "Ingredients available in the fridge: {}. Meal time: {meal_time}. \
         Suggest 3 recipes that suit {meal_time} and mainly use these ingredients. \
         For each recipe, fill the 'decoration_tips' field with plating advice or a \
         garnish recommendation that makes the dish look more appetizing.",
        ingredients.join(", ")
    )
}

/// Prompt for an illustrative photo of a finished dish.
pub fn image_prompt(name: &str, description: &str) -> String {
    format!(
        "A professional, high-resolution food photography shot of {name}. {description}. \
         The dish is elegantly plated on a modern ceramic plate, soft natural lighting, \
         gourmet restaurant style, focus on the texture of the food."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_prompt_embeds_ingredients_and_meal_time() {
        let ingredients: IngredientSet = ["egg", "rice"].iter().collect();
        let prompt = recipe_prompt(&ingredients, MealTime::Dinner);

        assert!(prompt.contains("egg, rice"));
        assert!(prompt.contains("dinner"));
        assert!(prompt.contains("decoration_tips"));
    }

    #[test]
    fn test_image_prompt_embeds_name_and_description() {
        let prompt = image_prompt("Kimchi fried rice", "A spicy classic");

        assert!(prompt.contains("Kimchi fried rice"));
        assert!(prompt.contains("A spicy classic"));
    }
}
