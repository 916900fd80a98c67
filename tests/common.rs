//! Common test utilities for building crafting definitions.
use keikaku::prelude::*;

/// A small tool-crafting problem in the `Crafting.json` format.
///
/// Every item is produced by exactly one recipe, so each state fixes how many
/// times each recipe ran and every path to a state costs the same.
/// The cheapest plan for the stone pickaxe costs 31.
#[allow(dead_code)]
pub const TOOLS_JSON: &str = r#"{
    "Items": ["bench", "cobble", "plank", "stick", "stone_pickaxe", "wood", "wooden_pickaxe"],
    "Initial": {},
    "Goal": {"stone_pickaxe": 1},
    "Recipes": {
        "punch for wood": {"Produces": {"wood": 1}, "Time": 4},
        "wood for plank": {"Consumes": {"wood": 1}, "Produces": {"plank": 4}, "Time": 1},
        "craft stick": {"Consumes": {"plank": 2}, "Produces": {"stick": 4}, "Time": 1},
        "craft bench": {"Consumes": {"plank": 4}, "Produces": {"bench": 1}, "Time": 1},
        "craft wooden_pickaxe at bench": {
            "Requires": {"bench": true},
            "Consumes": {"plank": 3, "stick": 2},
            "Produces": {"wooden_pickaxe": 1},
            "Time": 1
        },
        "wooden_pickaxe for cobble": {"Requires": {"wooden_pickaxe": true}, "Produces": {"cobble": 1}, "Time": 4},
        "craft stone_pickaxe at bench": {
            "Requires": {"bench": true},
            "Consumes": {"cobble": 3, "stick": 2},
            "Produces": {"stone_pickaxe": 1},
            "Time": 1
        }
    }
}"#;

#[allow(dead_code)]
pub fn id(index: usize) -> ItemId {
    ItemId::new(index)
}

#[allow(dead_code)]
pub fn compile(definition: CraftingDefinition) -> CompiledCrafting {
    Compiler::builder(definition)
        .build()
        .compile()
        .expect("Failed to compile definition")
}

#[allow(dead_code)]
pub fn compile_tools() -> CompiledCrafting {
    let definition = CraftingData::from_json(TOOLS_JSON)
        .expect("Failed to parse tools JSON")
        .into_crafting()
        .expect("Failed to convert tools JSON");
    compile(definition)
}

/// Scenario: a single gathering recipe, goal of three wood.
#[allow(dead_code)]
pub fn gather_wood_definition() -> CraftingDefinition {
    CraftingDefinition {
        items: vec!["wood".to_string()],
        initial: vec![("wood".to_string(), 0)],
        goal: GoalDefinition {
            semantics: GoalSemantics::AtLeast,
            targets: vec![("wood".to_string(), 3)],
        },
        recipes: vec![RecipeDefinition::new("gather_wood", 1.0).produces("wood", 1)],
    }
}

/// Many items that can all be gathered and combined, with an unreachable goal.
/// The reachable state space is unbounded.
#[allow(dead_code)]
pub fn large_definition(items: usize) -> CraftingDefinition {
    let names: Vec<String> = (0..items).map(|i| format!("item_{}", i)).collect();
    let mut recipes = Vec::new();
    for (i, name) in names.iter().enumerate() {
        recipes.push(RecipeDefinition::new(format!("gather {}", name), 1.0 + (i % 3) as f64).produces(name, 1));
        if i > 0 {
            recipes.push(
                RecipeDefinition::new(format!("refine {}", name), 2.0)
                    .consumes(&names[i - 1], 2)
                    .produces(name, 1),
            );
        }
    }
    let mut all = names.clone();
    all.push("unobtainium".to_string());
    CraftingDefinition {
        items: all,
        initial: Vec::new(),
        goal: GoalDefinition {
            semantics: GoalSemantics::AtLeast,
            targets: vec![("unobtainium".to_string(), 1)],
        },
        recipes,
    }
}
