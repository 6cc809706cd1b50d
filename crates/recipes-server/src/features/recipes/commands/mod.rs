pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateRecipeCommand, CreateRecipeError};
pub use delete::{DeleteRecipeCommand, DeleteRecipeError};
pub use update::{UpdateRecipeCommand, UpdateRecipeError};

use recipes_common::Recipe;

use crate::features::shared::ValidationErrors;

pub const NAME_REQUIRED: &str = "Recipe Name can not be null or empty";
pub const TYPE_REQUIRED: &str = "Recipe Type can not be null or empty";
pub const INSTRUCTION_REQUIRED: &str = "Instructions can not be null or empty";

/// Field checks shared by create and update
///
/// `name`, `type` and `instruction` must be non-blank. Ingredients and the
/// serving capacity are not checked.
pub fn validate_recipe(recipe: &Recipe) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.require_not_blank("name", &recipe.name, NAME_REQUIRED);
    errors.require_not_blank("type", &recipe.dish_type, TYPE_REQUIRED);
    errors.require_not_blank("instruction", &recipe.instruction, INSTRUCTION_REQUIRED);
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_recipe_passes() {
        let recipe = Recipe::new("Cake", "veg", None, "Bake");
        assert!(validate_recipe(&recipe).is_ok());
    }

    #[test]
    fn test_each_blank_field_is_reported() {
        let recipe = Recipe::new(" ", "", Some(2), "\n");
        let errors = validate_recipe(&recipe).unwrap_err();

        let messages: Vec<_> = errors.errors().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec![NAME_REQUIRED, TYPE_REQUIRED, INSTRUCTION_REQUIRED]);

        let fields: Vec<_> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "type", "instruction"]);
    }
}
