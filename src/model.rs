use serde::{Deserialize, Serialize};

/// A stored recipe, as returned by the store and serialized over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Identifier assigned by the store; never reused
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Free-form ingredient list
    pub ingredients: String,
    pub instructions: String,
}

/// The full set of user-supplied fields.
///
/// Used as the body of create (`POST`) and full replace (`PUT`) requests.
/// Every field must be present in the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
}

impl NewRecipe {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
        }
    }

    pub(crate) fn with_id(self, id: u64) -> Recipe {
        Recipe {
            id,
            title: self.title,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
        }
    }
}

/// A partial update. Fields left as `None` (absent or `null` in JSON) keep
/// their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl RecipePatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.ingredients.is_none()
            && self.instructions.is_none()
    }

    /// Overwrite the supplied fields of `recipe`, leaving the rest untouched.
    pub(crate) fn apply_to(self, recipe: &mut Recipe) {
        if let Some(title) = self.title {
            recipe.title = title;
        }
        if let Some(description) = self.description {
            recipe.description = description;
        }
        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = self.instructions {
            recipe.instructions = instructions;
        }
    }
}
