//! Custom cake options and price quotes.

use anyhow::Result;
use jayli_commerce::builder::{
    BuilderMenu, CustomConfiguration, OptionFamily, Weight, MAX_MESSAGE_CHARS,
};
use jayli_commerce::pricing;
use serde_json::json;

use super::QuoteArgs;
use crate::context::Context;

const FAMILIES: [OptionFamily; 3] = [
    OptionFamily::Flavor,
    OptionFamily::Filling,
    OptionFamily::Frosting,
];

/// Run the options command.
pub async fn options(ctx: &Context) -> Result<()> {
    let menu = BuilderMenu::standard();

    if ctx.output.is_json() {
        ctx.output.json(&menu);
        return Ok(());
    }

    let rules = ctx.config.pricing_rules()?;
    ctx.output.header("Build Your Cake");
    ctx.output.price("Base price per kg", &rules.base_price_per_kg);

    for family in FAMILIES {
        let rows: Vec<Vec<String>> = menu
            .family(family)
            .iter()
            .map(|option| {
                let surcharge = if option.has_surcharge() {
                    format!("+{}/kg", option.price_modifier_per_kg.display())
                } else {
                    "included".to_string()
                };
                vec![option.id.to_string(), option.name.clone(), surcharge]
            })
            .collect();
        ctx.output.header(&family.to_string());
        ctx.output.table(&["ID", "OPTION", "PRICE"], &rows, &[14, 26, 16]);
    }

    Ok(())
}

/// Run the quote command.
pub async fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let menu = BuilderMenu::standard();
    let rules = ctx.config.pricing_rules()?;

    let mut config = CustomConfiguration::initial(&menu);
    config.flavor = menu.find(OptionFamily::Flavor, &args.flavor)?.clone();
    config.filling = menu.find(OptionFamily::Filling, &args.filling)?.clone();
    config.frosting = menu.find(OptionFamily::Frosting, &args.frosting)?.clone();
    config.weight = Weight::from_kg(args.weight)?;
    if let Some(message) = &args.message {
        config.set_message(message);
    }

    let breakdown = pricing::breakdown(&rules, &config)?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "configuration": config,
            "breakdown": breakdown,
        }));
        return Ok(());
    }

    ctx.output.configuration(&config);
    if args.message.as_deref().map_or(false, |m| m.chars().count() > MAX_MESSAGE_CHARS) {
        ctx.output.warn(&format!("Message shortened to {} characters", MAX_MESSAGE_CHARS));
    }

    ctx.output.breakdown(&breakdown, true);

    Ok(())
}
