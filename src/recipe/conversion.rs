use super::definition::CraftingDefinition;
use crate::error::RecipeConversionError;

/// A trait for custom data models that can be converted into a keikaku `CraftingDefinition`.
///
/// This is the extension point that keeps the planner format-agnostic. Implement
/// it on the structs your own recipe format deserializes into, and the compiler
/// can plan over it. `CraftingData` implements it for the bundled JSON format.
///
/// # Example
///
/// ```rust,no_run
/// use keikaku::error::RecipeConversionError;
/// use keikaku::recipe::{CraftingDefinition, IntoCrafting, RecipeDefinition};
///
/// struct Workbench {
///     outputs: Vec<(String, f64)>,
/// }
///
/// impl IntoCrafting for Workbench {
///     fn into_crafting(self) -> Result<CraftingDefinition, RecipeConversionError> {
///         let items: Vec<String> = self.outputs.iter().map(|(n, _)| n.clone()).collect();
///         let recipes = self
///             .outputs
///             .into_iter()
///             .map(|(name, time)| RecipeDefinition::new(format!("make {}", name), time).produces(name, 1))
///             .collect();
///         Ok(CraftingDefinition {
///             items,
///             recipes,
///             ..Default::default()
///         })
///     }
/// }
/// ```
pub trait IntoCrafting {
    /// Consumes the object and converts it into a keikaku crafting definition.
    fn into_crafting(self) -> Result<CraftingDefinition, RecipeConversionError>;
}

impl IntoCrafting for CraftingDefinition {
    fn into_crafting(self) -> Result<CraftingDefinition, RecipeConversionError> {
        Ok(self)
    }
}
