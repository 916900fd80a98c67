//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the keikaku crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use keikaku::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let data = CraftingData::from_file("path/to/Crafting.json")?;
//! let compiled = Compiler::builder(data.into_crafting()?).build().compile()?;
//!
//! let planner = Planner::from_compiled(&compiled);
//! let plan = planner.plan(&compiled.initial, &compiled.goal)?;
//!
//! println!("{}", PlanFormatter::format_plan(&plan, &compiled.registry));
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::compiler::{CompiledCrafting, CompiledRecipe, Compiler, CompilerBuilder};

// Search
pub use crate::search::{
    FailureReason, Heuristic, Plan, PlanStep, Planner, PlannerConfig, SearchStats,
    ToolCapHeuristic, ZeroHeuristic, expand, plan,
};

// State and goals
pub use crate::goal::{Goal, GoalSemantics};
pub use crate::inventory::{Inventory, ItemId, ItemRegistry};

// Definitions and loading
pub use crate::data::CraftingData;
pub use crate::recipe::{CraftingDefinition, GoalDefinition, IntoCrafting, RecipeDefinition};

// Error types
pub use crate::error::{CompileError, LoadError, PlanError, RecipeConversionError};

// Plan formatting
pub use crate::trace::PlanFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
