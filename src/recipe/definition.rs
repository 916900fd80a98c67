use crate::goal::GoalSemantics;

/// The complete, canonical definition of a crafting problem, ready for compilation.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CraftingDefinition {
    /// Every item a state tracks, in declaration order.
    pub items: Vec<String>,
    pub initial: Vec<(String, u32)>,
    pub goal: GoalDefinition,
    /// Recipes in declaration order. The order decides which plan wins a cost tie.
    pub recipes: Vec<RecipeDefinition>,
}

/// The target condition of a crafting problem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalDefinition {
    pub semantics: GoalSemantics,
    pub targets: Vec<(String, u32)>,
}

/// Defines a single recipe by item name.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDefinition {
    pub name: String,
    /// Items that must be present but are not consumed, with their minimum quantity.
    pub requires: Vec<(String, u32)>,
    pub consumes: Vec<(String, u32)>,
    pub produces: Vec<(String, u32)>,
    pub cost: f64,
}

impl RecipeDefinition {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            requires: Vec::new(),
            consumes: Vec::new(),
            produces: Vec::new(),
            cost,
        }
    }

    pub fn requires(mut self, item: impl Into<String>, quantity: u32) -> Self {
        self.requires.push((item.into(), quantity));
        self
    }

    pub fn consumes(mut self, item: impl Into<String>, quantity: u32) -> Self {
        self.consumes.push((item.into(), quantity));
        self
    }

    pub fn produces(mut self, item: impl Into<String>, quantity: u32) -> Self {
        self.produces.push((item.into(), quantity));
        self
    }
}
