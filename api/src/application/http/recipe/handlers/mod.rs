pub mod generate_recipes;
pub mod generate_recipes_with_images;
