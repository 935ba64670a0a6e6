mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;

use crate::commands::{
    cmd_calc, cmd_history_calcs, cmd_history_changes, cmd_ingredient_add, cmd_ingredient_list,
    cmd_ingredient_remove, cmd_ingredient_rename, cmd_ingredient_save, cmd_theme,
};
use crate::config::Config;
use ladle_core::service::LadleService;

#[derive(Parser)]
#[command(
    name = "ladle",
    version,
    about = "A batch calculator for the house baba ghanoush",
    long_about = "\n\n  ██╗      █████╗ ██████╗ ██╗     ███████╗
  ██║     ██╔══██╗██╔══██╗██║     ██╔════╝
  ██║     ███████║██║  ██║██║     █████╗
  ██║     ██╔══██║██║  ██║██║     ██╔══╝
  ███████╗██║  ██║██████╔╝███████╗███████╗
  ╚══════╝╚═╝  ╚═╝╚═════╝ ╚══════╝╚══════╝
     scale the batch, not the guesswork.
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scale the ingredient table to a target batch weight
    Calc {
        /// Batch weight in kilograms
        quantity: f64,
        /// Number of pots to split the batch across
        #[arg(short, long, default_value = "3")]
        pots: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage the per-100-kg ingredient table
    Ingredient {
        #[command(subcommand)]
        command: IngredientCommands,
    },
    /// View the edit and calculation histories
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Show or set the display theme
    Theme {
        /// Theme to switch to: dark or light (omit to show the current one)
        mode: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum IngredientCommands {
    /// Add an ingredient to the table
    Add {
        /// Ingredient name
        name: String,
        /// Kilograms per 100 kg of batch
        amount: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rename an ingredient and set its amount
    Rename {
        /// Current ingredient name
        old: String,
        /// New ingredient name (may equal the current one)
        new: String,
        /// Kilograms per 100 kg of batch
        amount: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove an ingredient from the table
    Remove {
        /// Ingredient name
        name: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the current ingredient table
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Commit the working table as the saved snapshot
    Save {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// Show ingredient edits, newest first
    Changes {
        /// Show at most this many records
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show calculation runs, newest first
    Calcs {
        /// Show at most this many records
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let mut svc = LadleService::open(&config.store_path)?;

    match cli.command {
        Commands::Calc {
            quantity,
            pots,
            json,
        } => cmd_calc(&mut svc, quantity, pots, json),
        Commands::Ingredient { command } => match command {
            IngredientCommands::Add { name, amount, json } => {
                cmd_ingredient_add(&mut svc, &name, amount, json)
            }
            IngredientCommands::Rename {
                old,
                new,
                amount,
                json,
            } => cmd_ingredient_rename(&mut svc, &old, &new, amount, json),
            IngredientCommands::Remove { name, yes, json } => {
                cmd_ingredient_remove(&mut svc, &name, yes, json)
            }
            IngredientCommands::List { json } => cmd_ingredient_list(&svc, json),
            IngredientCommands::Save { json } => cmd_ingredient_save(&mut svc, json),
        },
        Commands::History { command } => match command {
            HistoryCommands::Changes { limit, json } => cmd_history_changes(&svc, limit, json),
            HistoryCommands::Calcs { limit, json } => cmd_history_calcs(&svc, limit, json),
        },
        Commands::Theme { mode, json } => cmd_theme(&svc, mode.as_deref(), json),
    }
}
