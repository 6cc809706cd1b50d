pub mod get;
pub mod list;
pub mod search;

pub use get::{GetRecipeError, GetRecipeQuery};
pub use list::{ListRecipesError, ListRecipesQuery};
pub use search::{SearchRecipesError, SearchRecipesQuery};
