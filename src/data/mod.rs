mod model;

pub use model::{CraftingData, RecipeData, Requirement};
