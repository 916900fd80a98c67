//! # Keikaku - Crafting Plan Search Engine
//!
//! **Keikaku** finds the cheapest sequence of crafting actions that turns a
//! starting inventory into one that satisfies a goal. Recipes are declared
//! with the items they require, consume and produce plus a time cost, compiled
//! once into fast predicates and transitions, and then searched with a
//! cost-ordered frontier under a wall-clock budget.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Parse a recipe file (the bundled `CraftingData` reads `Crafting.json`),
//!     or implement `IntoCrafting` for your own format.
//! 2.  **Compile**: `Compiler::builder(definition).build().compile()` interns item names and
//!     validates every recipe. Malformed recipes are rejected one by one without stopping the rest.
//! 3.  **Plan**: Build a `Planner` from the compiled recipes and call `plan` with the initial
//!     inventory and the goal. The result is either a `Plan` or a typed `PlanError`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keikaku::prelude::*;
//! use std::time::Duration;
//!
//! fn main() -> Result<()> {
//!     let definition = CraftingDefinition {
//!         items: vec!["wood".to_string()],
//!         goal: GoalDefinition {
//!             semantics: GoalSemantics::AtLeast,
//!             targets: vec![("wood".to_string(), 3)],
//!         },
//!         recipes: vec![RecipeDefinition::new("gather_wood", 1.0).produces("wood", 1)],
//!         ..Default::default()
//!     };
//!
//!     let compiled = Compiler::builder(definition).build().compile()?;
//!     let planner = Planner::from_compiled(&compiled).with_time_limit(Duration::from_secs(5));
//!
//!     match planner.plan(&compiled.initial, &compiled.goal) {
//!         Ok(plan) => println!("{}", PlanFormatter::format_plan(&plan, &compiled.registry)),
//!         Err(e) => println!("{}", PlanFormatter::format_failure(&e)),
//!     }
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod data;
pub mod error;
pub mod goal;
pub mod inventory;
pub mod prelude;
pub mod recipe;
pub mod search;
pub mod trace;
