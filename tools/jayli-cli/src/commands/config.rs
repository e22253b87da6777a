//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use jayli_storefront::generate_default_config;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Path => show_path(ctx),
        ConfigCommand::Init { force, output } => init_config(force, output.as_deref(), ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    if let Some(path) = &ctx.config_path {
        ctx.output.debug(&format!("Loaded from {}", path.display()));
    }
    ctx.output.header("[shop]");
    ctx.output.field("name", &ctx.config.shop.name);
    ctx.output.field("whatsapp_number", &ctx.config.shop.whatsapp_number);
    ctx.output.field("currency", &ctx.config.shop.currency);
    ctx.output.field("delivery_area", &ctx.config.shop.delivery_area);

    ctx.output.header("[pricing]");
    ctx.output.field("base_price_per_kg", ctx.config.pricing.base_price_per_kg);
    ctx.output.field("delivery_fee", ctx.config.pricing.delivery_fee);

    ctx.output.header("[assistant]");
    ctx.output.field("model", &ctx.config.assistant.model);
    ctx.output.field("endpoint", &ctx.config.assistant.endpoint);
    ctx.output.field("api_key_env", &ctx.config.assistant.api_key_env);

    if !ctx.assistant_available() {
        ctx.output.warn(&format!(
            "{} is not set; Baker AI will be offline",
            ctx.config.assistant.api_key_env
        ));
    }

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    match &ctx.config_path {
        Some(path) => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "path": path }));
            } else {
                println!("{}", path.display());
            }
            Ok(())
        }
        None => bail!("No config file found. Run `jayli config init` to create one."),
    }
}

fn init_config(force: bool, output: Option<&str>, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path(output.unwrap_or("jayli.toml"));

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if config_path.extension().map_or(false, |ext| ext == "json") {
        jayli_storefront::StorefrontConfig::default().save(&config_path)?;
    } else {
        fs::write(&config_path, generate_default_config())?;
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
