use crate::inventory::ItemId;
use crate::search::{FailureReason, SearchStats};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// The recipe field an item reference was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeField {
    Requires,
    Consumes,
    Produces,
}

impl fmt::Display for RecipeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeField::Requires => write!(f, "requires"),
            RecipeField::Consumes => write!(f, "consumes"),
            RecipeField::Produces => write!(f, "produces"),
        }
    }
}

/// Errors that can occur while compiling a crafting definition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Item '{0}' is declared more than once")]
    DuplicateItem(String),

    #[error("Recipe '{recipe}' has an invalid cost {cost}: costs must be positive and finite")]
    InvalidCost { recipe: String, cost: f64 },

    #[error("Recipe '{recipe}' references undeclared item '{item}' in its {field} set")]
    UndeclaredItem {
        recipe: String,
        item: String,
        field: RecipeField,
    },

    #[error("Recipe '{0}' is defined more than once")]
    DuplicateRecipe(String),

    #[error("The {context} inventory references undeclared item '{item}'")]
    UndeclaredInventoryItem { context: String, item: String },

    #[error("{} of {total} recipes were rejected", .errors.len())]
    RejectedRecipes {
        total: usize,
        errors: Vec<CompileError>,
    },
}

/// Raised when a recipe transition would produce an invalid inventory.
///
/// The expansion function only applies recipes whose predicate holds, so
/// seeing one of these during a search means the predicate and the
/// transition disagree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Recipe '{recipe}' would leave item {item} negative ({have} - {amount})")]
    NegativeQuantity {
        recipe: String,
        item: ItemId,
        have: u32,
        amount: u32,
    },

    #[error("Recipe '{recipe}' would overflow the quantity of item {item}")]
    QuantityOverflow { recipe: String, item: ItemId },

    #[error("Recipe '{recipe}' touches item {item}, which the inventory has no slot for")]
    ItemOutOfRange { recipe: String, item: ItemId },
}

/// Errors returned by the planner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("No plan found ({reason}) after expanding {expansions} states", expansions = .stats.expansions)]
    NotFound {
        reason: FailureReason,
        stats: SearchStats,
    },

    #[error("Search aborted: {0}")]
    Transition(#[from] TransitionError),

    #[error("Time limit must be positive, got {0:?}")]
    InvalidTimeLimit(Duration),

    #[error("Initial inventory has {got} slots but the recipes and goal use {expected} items")]
    InventoryMismatch { expected: usize, got: usize },
}

impl PlanError {
    /// The failure reason, if the search ran out of time or states.
    pub fn reason(&self) -> Option<FailureReason> {
        match self {
            PlanError::NotFound { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Errors that can occur while loading a crafting file.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    #[error("Could not read crafting file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse crafting JSON: {0}")]
    JsonParseError(String),

    #[error("Recipe '{recipe}' is malformed: {message}")]
    MalformedRecipe { recipe: String, message: String },
}

/// Errors that can occur when converting a custom user format into a `CraftingDefinition`.
#[derive(Error, Debug, Clone)]
pub enum RecipeConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Load(#[from] LoadError),
}
