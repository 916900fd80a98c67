use clap::Parser;
use keikaku::data::{CraftingData, RecipeData, Requirement};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::fs;

/// A CLI tool to generate random crafting problems for stress testing the planner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_crafting.json")]
    output: String,

    /// Number of items to declare
    #[arg(long, default_value_t = 30)]
    items: usize,

    /// Number of crafting recipes on top of one gathering recipe per raw item
    #[arg(long, default_value_t = 60)]
    recipes: usize,

    /// Number of raw items that can be gathered from nothing
    #[arg(long, default_value_t = 4)]
    raw: usize,

    /// Seed for reproducible output
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.raw == 0 || cli.raw >= cli.items {
        eprintln!(
            "Error: --raw ({}) must be at least 1 and smaller than --items ({})",
            cli.raw, cli.items
        );
        std::process::exit(1);
    }

    println!(
        "Generating {} items and {} recipes (seed {})...",
        cli.items, cli.recipes, cli.seed
    );

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let data = generate(&mut rng, &cli)?;

    let json_output = serde_json::to_string_pretty(&data)?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved crafting data to '{}'", cli.output);
    Ok(())
}

fn item_name(index: usize) -> String {
    format!("item_{:03}", index)
}

/// Items are layered: raw items are gathered, every other item is crafted
/// from items with a smaller index. Some recipes need an earlier item as a tool.
fn generate(rng: &mut StdRng, cli: &Cli) -> Result<CraftingData, Box<dyn std::error::Error>> {
    let mut data = CraftingData {
        items: (0..cli.items).map(item_name).collect(),
        ..Default::default()
    };

    for raw in 0..cli.raw {
        let recipe = RecipeData {
            produces: BTreeMap::from([(item_name(raw), 1)]),
            time: f64::from(rng.random_range(1..5u32)),
            ..Default::default()
        };
        data.insert_recipe(format!("gather {}", item_name(raw)), &recipe)?;
    }

    for index in 0..cli.recipes {
        let output = rng.random_range(cli.raw..cli.items);
        let mut recipe = RecipeData {
            produces: BTreeMap::from([(item_name(output), rng.random_range(1..4u32))]),
            time: f64::from(rng.random_range(1..10u32)),
            ..Default::default()
        };
        for _ in 0..rng.random_range(1..=3usize) {
            let input = rng.random_range(0..output);
            *recipe.consumes.entry(item_name(input)).or_insert(0) += rng.random_range(1..3u32);
        }
        if rng.random_bool(0.3) {
            let tool = rng.random_range(0..output);
            recipe
                .requires
                .insert(item_name(tool), Requirement::Present(true));
        }
        data.insert_recipe(format!("craft {} #{}", item_name(output), index), &recipe)?;
    }

    data.goal
        .insert(item_name(cli.items - 1), rng.random_range(1..3u32));
    Ok(data)
}
