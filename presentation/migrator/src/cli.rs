use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Manage the shopping list database schema",
    long_about = None
)]
pub struct Cli {
    /// Connection string; built from the DB_* variables when omitted.
    #[arg(long, global = true, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Directory holding the `.up.sql` / `.down.sql` migration pairs.
    #[arg(
        long,
        global = true,
        env = "MIGRATIONS_PATH",
        default_value = "./migrations"
    )]
    pub migrations_path: String,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Action {
    /// Apply every pending migration
    Up,
    /// Revert the most recently applied migration
    Down,
    /// Print the latest applied migration
    Version,
    /// Drop all application tables and the migration history
    Drop {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Only an explicit "y" or "Y" confirms a destructive action.
pub fn is_confirmed(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y")
}
