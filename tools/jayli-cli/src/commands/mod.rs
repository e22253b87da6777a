//! CLI command implementations.

pub mod ask;
pub mod catalog;
pub mod config;
pub mod quote;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show one category (e.g. "wedding" or "Kids Corner").
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Flavor option id.
    #[arg(long, default_value = "vanilla")]
    pub flavor: String,

    /// Filling option id.
    #[arg(long, default_value = "buttercream")]
    pub filling: String,

    /// Frosting option id.
    #[arg(long, default_value = "semi_naked")]
    pub frosting: String,

    /// Weight in kg (1 to 5, in 0.5 steps).
    #[arg(short, long, default_value_t = 1.0)]
    pub weight: f64,

    /// Message to pipe on the cake (max 30 characters).
    #[arg(short, long)]
    pub message: Option<String>,
}

/// Arguments for the ask command.
#[derive(Args)]
pub struct AskArgs {
    /// Question for Baker AI. Starts an interactive chat when omitted.
    pub question: Vec<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Print the path of the config file in use.
    Path,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// File to write (default: jayli.toml).
        #[arg(short, long)]
        output: Option<String>,
    },
}
