//! Jayli CLI - the Jayli bakery storefront in your terminal.
//!
//! Commands:
//! - `jayli catalog` - List ready-made cakes
//! - `jayli reviews` - Show customer reviews
//! - `jayli options` - List custom cake options
//! - `jayli quote` - Price a custom cake
//! - `jayli shop` - Interactive shopping session
//! - `jayli ask` - Chat with Baker AI
//! - `jayli config` - Manage configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AskArgs, CatalogArgs, ConfigArgs, QuoteArgs};

/// Jayli - order cakes from the Jayli bakery
#[derive(Parser)]
#[command(name = "jayli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cakes on the menu
    Catalog(CatalogArgs),

    /// Show customer reviews
    Reviews,

    /// List flavors, fillings and finishes for custom cakes
    Options,

    /// Price a custom cake
    Quote(QuoteArgs),

    /// Start an interactive shopping session
    Shop,

    /// Ask Baker AI for advice
    Ask(AskArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Reviews => commands::catalog::reviews(&ctx).await,
        Commands::Options => commands::quote::options(&ctx).await,
        Commands::Quote(args) => commands::quote::run(args, &ctx).await,
        Commands::Shop => commands::shop::run(&ctx).await,
        Commands::Ask(args) => commands::ask::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,jayli_commerce=debug,jayli_assistant=debug,jayli_storefront=debug,jayli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
