use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Services;

#[derive(Parser)]
#[command(name = "ladle")]
#[command(about = "Ladle - a pantry-aware recipe assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recipe for a dish and save it
    Generate {
        /// The dish to cook, e.g. "tomato soup"
        dish: String,
        /// Ingredients currently on hand
        #[arg(long, default_value = "")]
        have: String,
    },
    /// Show or update the dietary profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// List saved recipes
    Recipes,
    /// Pull the remote profile and recipes into the local store
    Sync,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the current profile
    Show,
    /// Replace the profile
    Set {
        #[arg(long, default_value = "")]
        diet: String,
        #[arg(long, default_value = "")]
        allergies: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let services = Services::init()?;

    match cli.command {
        Commands::Sync => commands::sync::run(&services).await,
        command => {
            // Startup pull: adopt remote state before doing anything else.
            // Best effort, a failed pull degrades to local-only operation.
            let outcome = services.sync.pull().await;
            tracing::debug!(?outcome, "startup pull finished");

            match command {
                Commands::Generate { dish, have } => {
                    commands::generate::run(&services, dish, have).await
                }
                Commands::Profile { action } => match action {
                    ProfileAction::Show => commands::profile::show(&services),
                    ProfileAction::Set { diet, allergies } => {
                        commands::profile::set(&services, &diet, &allergies).await
                    }
                },
                Commands::Recipes => commands::recipes::run(&services),
                Commands::Sync => unreachable!(),
            }
        }
    }
}
