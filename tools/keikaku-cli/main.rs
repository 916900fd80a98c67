use clap::{Parser, ValueEnum};
use keikaku::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SemanticsCli {
    AtLeast,
    AtMost,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicCli {
    /// Plain uniform-cost search
    Zero,
    /// Prune states holding more tools than any recipe needs
    ToolCap,
}

/// Finds the cheapest crafting plan for a Crafting.json problem
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the crafting JSON file
    crafting_path: String,

    /// Search time limit in seconds
    #[arg(short, long, default_value_t = 5.0)]
    time_limit: f64,

    /// Override the goal semantics declared in the file
    #[arg(short, long, value_enum)]
    semantics: Option<SemanticsCli>,

    /// The heuristic guiding the search
    #[arg(long, value_enum, default_value_t = HeuristicCli::Zero)]
    heuristic: HeuristicCli,

    /// Fail if any recipe is malformed
    #[arg(long)]
    strict: bool,

    /// Print debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !(cli.time_limit.is_finite() && cli.time_limit > 0.0) {
        exit_with_error(&format!(
            "--time-limit must be a positive number of seconds, got {}",
            cli.time_limit
        ));
    }

    run_planner(cli);
}

fn init_logging(verbose: bool) {
    let directive = if verbose { "keikaku=debug" } else { "keikaku=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run_planner(cli: Cli) {
    let total_start = Instant::now();

    // --- 1. Loading ---
    let data = CraftingData::from_file(&cli.crafting_path)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    println!("All items: {:?}", data.items);
    println!("Initial inventory: {:?}", data.initial);
    println!("Goal ({:?}): {:?}", data.goal_semantics, data.goal);

    let definition = data
        .into_crafting()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert crafting data: {}", e)));

    // --- 2. Compilation ---
    let mut builder = Compiler::builder(definition).strict(cli.strict);
    if let Some(semantics) = cli.semantics {
        builder = builder.with_goal_semantics(match semantics {
            SemanticsCli::AtLeast => GoalSemantics::AtLeast,
            SemanticsCli::AtMost => GoalSemantics::AtMost,
        });
    }
    let compiled = builder
        .build()
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Compilation failed: {}", e)));

    for rejected in &compiled.rejected {
        println!("Skipping recipe: {}", rejected);
    }
    info!(
        recipes = compiled.recipes.len(),
        rejected = compiled.rejected.len(),
        "recipes compiled"
    );

    // --- 3. Search ---
    let config = PlannerConfig::default().with_time_limit(Duration::from_secs_f64(cli.time_limit));
    let planner = Planner::from_compiled(&compiled).with_config(config);
    let planner = match cli.heuristic {
        HeuristicCli::Zero => planner,
        HeuristicCli::ToolCap => {
            let heuristic = ToolCapHeuristic::new(&compiled.recipes, &compiled.goal, &compiled.initial);
            debug!(durable_items = heuristic.durable_items(), "tool cap heuristic");
            planner.with_heuristic(heuristic)
        }
    };

    println!(
        "\nSearching from {} ...",
        compiled.initial.display(&compiled.registry)
    );
    match planner.plan(&compiled.initial, &compiled.goal) {
        Ok(plan) => {
            println!("{}", PlanFormatter::format_plan(&plan, &compiled.registry));
        }
        Err(e) => {
            println!("{}", PlanFormatter::format_failure(&e));
        }
    }

    println!("Total execution: {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
