use crate::application::http::recipe::router::RecipeApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ChefInBox API",
        description = "Generates recipe suggestions from a meal time and a list of ingredients"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
    )
)]
pub struct ApiDoc;
