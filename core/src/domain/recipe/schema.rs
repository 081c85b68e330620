use serde_json::json;

/// Returns the JSON schema declared for recipe generation responses
pub fn recipe_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recipes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "Name of the dish" },
                        "description": { "type": "string", "description": "Short description of the dish" },
                        "ingredients": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Required ingredients"
                        },
                        "instructions": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Step by step cooking instructions"
                        },
                        "cooking_time": { "type": "string", "description": "Estimated cooking time" },
                        "difficulty": {
                            "type": "string",
                            "enum": ["easy", "medium", "hard"]
                        },
                        "decoration_tips": { "type": "string", "description": "Plating and garnish tips" }
                    },
                    "required": [
                        "name", "description", "ingredients",
                        "instructions", "cooking_time", "difficulty", "decoration_tips"
                    ]
                }
            }
        },
        "required": ["recipes"]
    })
}
