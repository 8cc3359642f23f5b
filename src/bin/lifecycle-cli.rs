use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lifecycle_orchestrator::config::load_config;
use lifecycle_orchestrator::plan::{preview, OrderPreview};

#[derive(Parser)]
#[command(name = "lifecycle-cli")]
#[command(about = "Inspect component plans for the lifecycle orchestrator", long_about = None)]
struct Cli {
    /// Path to the plan file (TOML).
    #[arg(short, long, default_value = "plan.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the plan
    Check,
    /// Print the init and shutdown order
    Order {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Check => {
            println!(
                "{}: ok ({} components)",
                cli.config.display(),
                config.components.len()
            );
        }
        Commands::Order { json } => {
            let order = preview(&config);
            if json {
                println!("{}", serde_json::to_string_pretty(&order)?);
            } else {
                print_order(&order);
            }
        }
    }

    Ok(())
}

fn print_order(order: &OrderPreview) {
    println!("post-construct:");
    for name in &order.post_construct {
        println!("  {}", name);
    }
    println!("init:");
    for (i, entry) in order.init.iter().enumerate() {
        println!("  {}. {} (phase {})", i + 1, entry.name, entry.phase);
    }
    println!("shutdown:");
    for (i, entry) in order.shutdown.iter().enumerate() {
        println!("  {}. {} (phase {})", i + 1, entry.name, entry.phase);
    }
    if !order.unmanaged.is_empty() {
        println!("unmanaged: {}", order.unmanaged.join(", "));
    }
}
