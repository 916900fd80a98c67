use crate::error::{LoadError, RecipeConversionError};
use crate::goal::GoalSemantics;
use crate::recipe::{CraftingDefinition, GoalDefinition, IntoCrafting, RecipeDefinition};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Represents a crafting problem, matching the `Crafting.json` format.
///
/// `Recipes` is kept as an ordered JSON object so declaration order survives
/// loading; each entry is parsed into a `RecipeData` on conversion.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CraftingData {
    pub items: Vec<String>,
    #[serde(default)]
    pub initial: BTreeMap<String, u32>,
    #[serde(default)]
    pub goal: BTreeMap<String, u32>,
    #[serde(default)]
    pub goal_semantics: GoalSemantics,
    #[serde(default)]
    pub recipes: Map<String, Value>,
}

/// A single recipe entry of `Crafting.json`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeData {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub requires: BTreeMap<String, Requirement>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub consumes: BTreeMap<String, u32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub produces: BTreeMap<String, u32>,
    pub time: f64,
}

/// A `Requires` value: either a presence flag or a minimum quantity.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum Requirement {
    Present(bool),
    AtLeast(u32),
}

impl Requirement {
    /// The minimum quantity required, or `None` if the entry asks for nothing.
    pub fn min_quantity(self) -> Option<u32> {
        match self {
            Requirement::Present(true) => Some(1),
            Requirement::Present(false) => None,
            Requirement::AtLeast(quantity) => Some(quantity),
        }
    }
}

impl CraftingData {
    /// Load a crafting problem from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Parse a crafting problem from a JSON string. Every recipe entry is
    /// checked here so format errors surface at load time.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let data: Self =
            serde_json::from_str(json).map_err(|e| LoadError::JsonParseError(e.to_string()))?;
        data.recipe_data()?;
        Ok(data)
    }

    /// The recipes in declaration order.
    pub fn recipe_data(&self) -> Result<Vec<(String, RecipeData)>, LoadError> {
        self.recipes
            .iter()
            .map(|(name, value)| {
                serde_json::from_value(value.clone())
                    .map(|recipe| (name.clone(), recipe))
                    .map_err(|e| LoadError::MalformedRecipe {
                        recipe: name.clone(),
                        message: e.to_string(),
                    })
            })
            .collect()
    }

    /// Adds a recipe at the end of the declaration order.
    pub fn insert_recipe(
        &mut self,
        name: impl Into<String>,
        recipe: &RecipeData,
    ) -> Result<(), LoadError> {
        let name = name.into();
        let value = serde_json::to_value(recipe).map_err(|e| LoadError::MalformedRecipe {
            recipe: name.clone(),
            message: e.to_string(),
        })?;
        self.recipes.insert(name, value);
        Ok(())
    }
}

impl IntoCrafting for CraftingData {
    fn into_crafting(self) -> Result<CraftingDefinition, RecipeConversionError> {
        let recipes = self
            .recipe_data()?
            .into_iter()
            .map(|(name, data)| RecipeDefinition {
                name,
                requires: data
                    .requires
                    .into_iter()
                    .filter_map(|(item, req)| req.min_quantity().map(|q| (item, q)))
                    .collect(),
                consumes: data.consumes.into_iter().collect(),
                produces: data.produces.into_iter().collect(),
                cost: data.time,
            })
            .collect();

        Ok(CraftingDefinition {
            items: self.items,
            initial: self.initial.into_iter().collect(),
            goal: GoalDefinition {
                semantics: self.goal_semantics,
                targets: self.goal.into_iter().collect(),
            },
            recipes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRAFTING_JSON: &str = r#"{
        "Items": ["bench", "plank", "wood"],
        "Initial": {"wood": 1},
        "Goal": {"plank": 4},
        "Recipes": {
            "wood for plank": {"Consumes": {"wood": 1}, "Produces": {"plank": 4}, "Time": 1},
            "craft bench": {"Consumes": {"plank": 4}, "Produces": {"bench": 1}, "Time": 1},
            "punch for wood": {"Produces": {"wood": 1}, "Time": 4},
            "plank at bench": {"Requires": {"bench": true}, "Consumes": {"wood": 1}, "Produces": {"plank": 5}, "Time": 2}
        }
    }"#;

    #[test]
    fn recipes_keep_declaration_order() {
        let data = CraftingData::from_json(CRAFTING_JSON).unwrap();
        let names: Vec<_> = data.recipes.keys().cloned().collect();
        assert_eq!(
            names,
            ["wood for plank", "craft bench", "punch for wood", "plank at bench"]
        );
        assert_eq!(data.goal_semantics, GoalSemantics::AtLeast);
    }

    #[test]
    fn conversion_maps_boolean_requirements_to_one() {
        let definition = CraftingData::from_json(CRAFTING_JSON)
            .unwrap()
            .into_crafting()
            .unwrap();
        let at_bench = &definition.recipes[3];
        assert_eq!(at_bench.requires, vec![("bench".to_string(), 1)]);
        assert_eq!(at_bench.cost, 2.0);
        assert_eq!(definition.initial, vec![("wood".to_string(), 1)]);
        assert_eq!(definition.goal.targets, vec![("plank".to_string(), 4)]);
    }

    #[test]
    fn malformed_recipe_is_named() {
        let json = r#"{"Items": ["wood"], "Recipes": {"broken": {"Produces": {"wood": 1}}}}"#;
        match CraftingData::from_json(json).unwrap_err() {
            LoadError::MalformedRecipe { recipe, .. } => assert_eq!(recipe, "broken"),
            other => panic!("expected MalformedRecipe, got {other:?}"),
        }
    }

    #[test]
    fn goal_semantics_field_is_read() {
        let json = r#"{"Items": ["wood"], "Goal": {}, "GoalSemantics": "at_most", "Recipes": {}}"#;
        let data = CraftingData::from_json(json).unwrap();
        assert_eq!(data.goal_semantics, GoalSemantics::AtMost);
    }

    #[test]
    fn numeric_and_false_requirements() {
        assert_eq!(Requirement::AtLeast(3).min_quantity(), Some(3));
        assert_eq!(Requirement::Present(false).min_quantity(), None);
        let parsed: Requirement = serde_json::from_str("true").unwrap();
        assert_eq!(parsed, Requirement::Present(true));
    }
}
