use crate::error::CompileError;
use crate::goal::{Goal, GoalSemantics};
use crate::inventory::{Inventory, ItemRegistry};
use crate::recipe::CraftingDefinition;
use ahash::AHashSet;
use tracing::{debug, warn};

mod recipe;

pub use recipe::CompiledRecipe;

/// Everything a search needs, with item names interned.
#[derive(Debug, Clone)]
pub struct CompiledCrafting {
    pub registry: ItemRegistry,
    /// Accepted recipes in declaration order.
    pub recipes: Vec<CompiledRecipe>,
    pub initial: Inventory,
    pub goal: Goal,
    /// Recipes that failed to compile. They are left out of `recipes`.
    pub rejected: Vec<CompileError>,
}

pub struct Compiler {
    definition: CraftingDefinition,
    strict: bool,
    goal_semantics: Option<GoalSemantics>,
}

pub struct CompilerBuilder {
    definition: CraftingDefinition,
    strict: bool,
    goal_semantics: Option<GoalSemantics>,
}

impl CompilerBuilder {
    pub fn new(definition: CraftingDefinition) -> Self {
        Self {
            definition,
            strict: false,
            goal_semantics: None,
        }
    }

    /// Fail the whole compilation if any recipe is rejected.
    /// Every recipe is still examined so the error lists all of them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Overrides the goal semantics declared in the definition.
    pub fn with_goal_semantics(mut self, semantics: GoalSemantics) -> Self {
        self.goal_semantics = Some(semantics);
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            definition: self.definition,
            strict: self.strict,
            goal_semantics: self.goal_semantics,
        }
    }
}

impl Compiler {
    pub fn builder(definition: CraftingDefinition) -> CompilerBuilder {
        CompilerBuilder::new(definition)
    }

    /// Interns items and compiles every recipe, the initial inventory and the goal.
    ///
    /// A malformed recipe (bad cost, undeclared item, repeated name) is
    /// rejected on its own and recorded in `CompiledCrafting::rejected`; the
    /// remaining recipes still compile. Problems with the item list, the
    /// initial inventory or the goal abort compilation.
    pub fn compile(self) -> Result<CompiledCrafting, CompileError> {
        let definition = self.definition;
        let registry = ItemRegistry::from_items(&definition.items)?;

        let mut recipes = Vec::with_capacity(definition.recipes.len());
        let mut rejected = Vec::new();
        let mut seen_names = AHashSet::new();

        for recipe_definition in &definition.recipes {
            let compiled = if seen_names.contains(recipe_definition.name.as_str()) {
                Err(CompileError::DuplicateRecipe(recipe_definition.name.clone()))
            } else {
                CompiledRecipe::compile(recipe_definition, &registry)
            };

            match compiled {
                Ok(recipe) => {
                    seen_names.insert(recipe_definition.name.as_str());
                    recipes.push(recipe);
                }
                Err(e) => {
                    warn!(recipe = %recipe_definition.name, error = %e, "rejected recipe");
                    rejected.push(e);
                }
            }
        }

        if self.strict && !rejected.is_empty() {
            return Err(CompileError::RejectedRecipes {
                total: definition.recipes.len(),
                errors: rejected,
            });
        }

        let initial = Inventory::from_named(
            &registry,
            definition
                .initial
                .iter()
                .map(|(name, quantity)| (name.as_str(), *quantity)),
            "initial",
        )?;

        let semantics = self.goal_semantics.unwrap_or(definition.goal.semantics);
        let targets = definition
            .goal
            .targets
            .iter()
            .map(|(name, quantity)| {
                registry
                    .id(name)
                    .map(|id| (id, *quantity))
                    .ok_or_else(|| CompileError::UndeclaredInventoryItem {
                        context: "goal".to_string(),
                        item: name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let goal = Goal::new(semantics, registry.len(), targets);

        debug!(
            items = registry.len(),
            recipes = recipes.len(),
            rejected = rejected.len(),
            %semantics,
            "compiled crafting definition"
        );

        Ok(CompiledCrafting {
            registry,
            recipes,
            initial,
            goal,
            rejected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{GoalDefinition, RecipeDefinition};

    fn definition() -> CraftingDefinition {
        CraftingDefinition {
            items: vec!["wood".into(), "plank".into()],
            initial: vec![("wood".into(), 1)],
            goal: GoalDefinition {
                semantics: GoalSemantics::AtLeast,
                targets: vec![("plank".into(), 4)],
            },
            recipes: vec![
                RecipeDefinition::new("punch", 4.0).produces("wood", 1),
                RecipeDefinition::new("free wood", 0.0).produces("wood", 1),
                RecipeDefinition::new("saw", 1.0)
                    .consumes("wood", 1)
                    .produces("plank", 4),
                RecipeDefinition::new("punch", 1.0).produces("wood", 2),
                RecipeDefinition::new("smelt", 1.0).consumes("ore", 1),
            ],
        }
    }

    #[test]
    fn malformed_recipes_do_not_stop_the_rest() {
        let compiled = Compiler::builder(definition()).build().compile().unwrap();
        let names: Vec<_> = compiled.recipes.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["punch", "saw"]);
        assert_eq!(compiled.rejected.len(), 3);
        assert!(matches!(compiled.rejected[0], CompileError::InvalidCost { .. }));
        assert_eq!(
            compiled.rejected[1],
            CompileError::DuplicateRecipe("punch".to_string())
        );
        assert!(matches!(compiled.rejected[2], CompileError::UndeclaredItem { .. }));
    }

    #[test]
    fn strict_mode_reports_every_rejection() {
        let err = Compiler::builder(definition())
            .strict(true)
            .build()
            .compile()
            .unwrap_err();
        match err {
            CompileError::RejectedRecipes { total, errors } => {
                assert_eq!(total, 5);
                assert_eq!(errors.len(), 3);
            }
            other => panic!("expected RejectedRecipes, got {other:?}"),
        }
    }

    #[test]
    fn goal_semantics_can_be_overridden() {
        let compiled = Compiler::builder(definition())
            .with_goal_semantics(GoalSemantics::AtMost)
            .build()
            .compile()
            .unwrap();
        assert_eq!(compiled.goal.semantics(), GoalSemantics::AtMost);
    }

    #[test]
    fn undeclared_goal_item_is_fatal() {
        let mut def = definition();
        def.goal.targets.push(("diamond".into(), 1));
        let err = Compiler::builder(def).build().compile().unwrap_err();
        assert_eq!(
            err,
            CompileError::UndeclaredInventoryItem {
                context: "goal".to_string(),
                item: "diamond".to_string(),
            }
        );
    }
}
