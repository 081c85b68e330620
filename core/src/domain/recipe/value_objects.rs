use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::MealTime;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipesInput {
    pub ingredients: Vec<String>,
    pub meal_time: MealTime,
}

/// Ordered collection of ingredient names. Entries are trimmed, blanks are
/// dropped and duplicates are ignored on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSet {
    items: Vec<String>,
}

impl IngredientSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns whether the ingredient was actually inserted.
    pub fn add(&mut self, raw: &str) -> bool {
        let item = raw.trim();
        if item.is_empty() || self.items.iter().any(|existing| existing == item) {
            return false;
        }

        self.items.push(item.to_string());
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn join(&self, separator: &str) -> String {
        self.items.join(separator)
    }
}

impl<S: AsRef<str>> FromIterator<S> for IngredientSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = IngredientSet::new();
        for item in iter {
            set.add(item.as_ref());
        }
        set
    }
}

/// Inline image payload returned by the image model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl GeneratedImage {
    /// Renders the image the way the UI consumes it.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_set_deduplicates_and_keeps_order() {
        let set: IngredientSet = ["egg", "rice", "egg", "kimchi", "rice"].iter().collect();
        assert_eq!(set.as_slice(), &["egg", "rice", "kimchi"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_ingredient_set_trims_and_drops_blanks() {
        let set: IngredientSet = ["  tofu ", "", "   ", "tofu"].iter().collect();
        assert_eq!(set.as_slice(), &["tofu"]);
    }

    #[test]
    fn test_ingredient_set_add_reports_insertion() {
        let mut set = IngredientSet::new();
        assert!(set.add("onion"));
        assert!(!set.add("onion"));
        assert!(!set.add("  "));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ingredient_set_remove_by_index() {
        let mut set: IngredientSet = ["a", "b", "c"].iter().collect();
        assert_eq!(set.remove(1), Some("b".to_string()));
        assert_eq!(set.as_slice(), &["a", "c"]);
        assert_eq!(set.remove(5), None);
    }

    #[test]
    fn test_generated_image_data_uri() {
        let image = GeneratedImage {
            mime_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        };
        assert_eq!(image.to_data_uri(), "data:image/png;base64,AQID");
    }
}
