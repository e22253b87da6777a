//! Interactive shopping session.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use jayli_commerce::builder::{BuilderStep, OptionFamily, Weight};
use jayli_commerce::catalog::CakeCategory;
use jayli_commerce::checkout::{CheckoutForm, PaymentMethod};
use jayli_commerce::{CommerceError, ProductId};
use jayli_storefront::StorefrontError;
use tracing::debug;

use super::ask;
use crate::context::{Context, Shop};

const MAIN_MENU: [&str; 7] = [
    "Browse cakes",
    "Build your cake",
    "View basket",
    "Checkout",
    "Track order",
    "Ask Baker AI",
    "Quit",
];

/// Run the shop command.
pub async fn run(ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;

    ctx.output.header(&format!("Karibu {}!", ctx.config.shop.name));
    ctx.output.info(&format!(
        "Cakes baked fresh and delivered within {}.",
        ctx.config.shop.delivery_area
    ));
    if !ctx.assistant_available() {
        ctx.output.warn("Baker AI is offline (no API key)");
    }

    loop {
        let count = shop.basket().item_count();
        let choice = Select::new()
            .with_prompt(format!("What would you like to do? (basket: {})", count))
            .items(&MAIN_MENU)
            .default(0)
            .interact()?;

        let result = match choice {
            0 => browse(&mut shop, ctx),
            1 => build_cake(&mut shop, ctx),
            2 => manage_basket(&mut shop, ctx),
            3 => checkout(&mut shop, ctx),
            4 => track(&shop, ctx),
            5 => ask::chat_loop(&mut shop, ctx).await,
            _ => break,
        };
        if let Err(e) = result {
            keep_shopping(e, ctx)?;
        }
    }

    if !shop.basket().is_empty() {
        ctx.output.warn("Your basket was not checked out and has been discarded");
    }
    ctx.output.info("Asante! Come again.");
    Ok(())
}

/// Report a shop error and carry on; terminal and I/O errors still end the session.
fn keep_shopping(error: anyhow::Error, ctx: &Context) -> Result<()> {
    let recoverable = error.downcast_ref::<StorefrontError>().is_some()
        || error.downcast_ref::<CommerceError>().is_some();
    if !recoverable {
        return Err(error);
    }
    debug!(error = %error, "shop action failed");
    ctx.output.warn(&error.to_string());
    Ok(())
}

fn browse(shop: &mut Shop, ctx: &Context) -> Result<()> {
    let mut categories = vec!["All cakes".to_string()];
    categories.extend(CakeCategory::ALL.iter().map(|c| c.display_name().to_string()));

    let picked = Select::new()
        .with_prompt("Category")
        .items(&categories)
        .default(0)
        .interact()?;
    let category = picked.checked_sub(1).map(|i| CakeCategory::ALL[i]);

    let items: Vec<(String, String)> = shop
        .browse(category)
        .into_iter()
        .map(|item| {
            (
                item.id.to_string(),
                format!("{} ({}/kg) {:.1}★", item.name, item.unit_price.display(), item.rating),
            )
        })
        .collect();

    let mut labels: Vec<&str> = items.iter().map(|(_, label)| label.as_str()).collect();
    labels.push("Back");

    let picked = Select::new()
        .with_prompt("Choose a cake")
        .items(&labels)
        .default(0)
        .interact()?;
    let Some((id, _)) = items.get(picked) else {
        return Ok(());
    };

    let item = shop.catalog().get(&ProductId::new(id.as_str()))?;
    ctx.output.header(&item.name);
    ctx.output.info(&item.description);
    ctx.output.field("Category", item.category.display_name());
    ctx.output.field("Rating", format_args!("{:.1}", item.rating));
    ctx.output.price("Per kg", &item.unit_price);

    let action = Select::new()
        .with_prompt("Add to basket?")
        .items(&["Add to basket", "Buy now", "Back"])
        .default(0)
        .interact()?;

    match action {
        0 => match shop.add_to_basket(id) {
            Ok(_) => ctx.output.success("Added to basket"),
            Err(e) => ctx.output.warn(&e.to_string()),
        },
        1 => {
            shop.buy_now(id)?;
            checkout(shop, ctx)?;
        }
        _ => {}
    }
    Ok(())
}

fn build_cake(shop: &mut Shop, ctx: &Context) -> Result<()> {
    loop {
        let step = shop.configurator().step();
        ctx.output.builder_step(step);
        ctx.output.price("Current price", &shop.builder_price()?);

        let go_on = match step {
            BuilderStep::Flavor => {
                pick_option(shop, OptionFamily::Flavor, "Choose your sponge")?;
                true
            }
            BuilderStep::FillingAndFrosting => {
                pick_option(shop, OptionFamily::Filling, "Choose a filling")?;
                pick_option(shop, OptionFamily::Frosting, "Choose the outer finish")?;
                forward_or_back(shop)?
            }
            BuilderStep::SizeAndMessage => {
                pick_size_and_message(shop, ctx)?;
                forward_or_back(shop)?
            }
            BuilderStep::Review => {
                if review(shop, ctx)? {
                    return Ok(());
                }
                false
            }
        };

        if go_on {
            shop.builder_next()?;
        }
    }
}

/// Returns `true` to advance; steps back otherwise.
fn forward_or_back(shop: &mut Shop) -> Result<bool> {
    let choice = Select::new()
        .items(&["Next", "Back"])
        .default(0)
        .interact()?;
    if choice == 1 {
        shop.builder_back()?;
        return Ok(false);
    }
    Ok(true)
}

fn pick_option(shop: &mut Shop, family: OptionFamily, prompt: &str) -> Result<()> {
    let options = shop.menu().family(family);
    let current = shop.configurator().configuration();
    let selected = match family {
        OptionFamily::Flavor => &current.flavor,
        OptionFamily::Filling => &current.filling,
        OptionFamily::Frosting => &current.frosting,
    };

    let labels: Vec<String> = options
        .iter()
        .map(|o| {
            if o.has_surcharge() {
                format!("{} (+{}/kg)", o.name, o.price_modifier_per_kg.display())
            } else {
                o.name.clone()
            }
        })
        .collect();
    let default = options.iter().position(|o| o.id == selected.id).unwrap_or(0);

    let picked = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    let id = options[picked].id.to_string();
    shop.choose_option(family, &id)?;
    Ok(())
}

fn pick_size_and_message(shop: &mut Shop, ctx: &Context) -> Result<()> {
    let weights: Vec<f64> = (2..=10).map(|halves| halves as f64 / 2.0).collect();
    let labels: Vec<String> = weights
        .iter()
        .filter_map(|kg| Weight::from_kg(*kg).ok())
        .map(|w| {
            let (low, high) = w.servings();
            format!("{} kg (serves {}-{})", w, low, high)
        })
        .collect();
    let current = shop.configurator().configuration().weight.half_kilograms() as usize;

    let picked = Select::new()
        .with_prompt("How big?")
        .items(&labels)
        .default(current.saturating_sub(2))
        .interact()?;
    shop.set_weight_kg(weights[picked])?;

    let message: String = Input::new()
        .with_prompt("Message on cake (optional, 30 characters)")
        .with_initial_text(shop.configurator().configuration().message())
        .allow_empty(true)
        .interact_text()?;
    shop.set_message(message.trim());
    if message.trim().chars().count() > shop.configurator().configuration().message().chars().count() {
        ctx.output.warn("Message shortened to fit");
    }

    let toppers: String = Input::new()
        .with_prompt("Toppers (comma separated, optional)")
        .allow_empty(true)
        .interact_text()?;
    for topper in toppers.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !shop.configurator().configuration().toppers.contains(topper) {
            shop.toggle_topper(topper);
        }
    }
    Ok(())
}

/// Returns `true` when the customer is done with the builder.
fn review(shop: &mut Shop, ctx: &Context) -> Result<bool> {
    let config = shop.configurator().configuration().clone();
    let breakdown = shop.builder_breakdown()?;

    ctx.output.configuration(&config);
    ctx.output.breakdown(&breakdown, false);

    let choice = Select::new()
        .items(&["Add to basket", "Back", "Start over", "Keep for later"])
        .default(0)
        .interact()?;
    match choice {
        0 => {
            let id = shop.add_custom_cake()?;
            debug!(line = %id, "custom cake committed");
            ctx.output.success("Custom cake added to basket");
            Ok(true)
        }
        1 => {
            shop.builder_back()?;
            Ok(false)
        }
        2 => {
            shop.restart_builder();
            Ok(false)
        }
        _ => Ok(true),
    }
}

fn show_basket(shop: &Shop, ctx: &Context) -> Result<bool> {
    let summary = shop.basket_summary()?;
    if summary.is_empty() {
        ctx.output.info("Your basket is empty");
        return Ok(false);
    }

    ctx.output.basket(&summary);
    Ok(true)
}

fn manage_basket(shop: &mut Shop, ctx: &Context) -> Result<()> {
    loop {
        if !show_basket(shop, ctx)? {
            return Ok(());
        }

        let lines: Vec<(String, String)> = shop
            .basket()
            .lines()
            .iter()
            .map(|l| (l.id.to_string(), l.name.clone()))
            .collect();
        let mut labels: Vec<&str> = lines.iter().map(|(_, name)| name.as_str()).collect();
        labels.push("Done");

        let picked = Select::new()
            .with_prompt("Edit a line")
            .items(&labels)
            .default(labels.len() - 1)
            .interact()?;
        let Some((id, name)) = lines.get(picked) else {
            return Ok(());
        };

        let action = Select::new()
            .with_prompt(name)
            .items(&["Add one", "Remove one", "Remove from basket", "Back"])
            .default(0)
            .interact()?;
        let updated = match action {
            0 => shop.update_quantity(id, 1),
            1 => shop.update_quantity(id, -1),
            2 => {
                shop.remove_from_basket(id);
                continue;
            }
            _ => continue,
        };
        if let Err(e) = updated {
            ctx.output.warn(&e.to_string());
        }
    }
}

fn checkout(shop: &mut Shop, ctx: &Context) -> Result<()> {
    if !show_basket(shop, ctx)? {
        return Ok(());
    }

    ctx.output.header("Delivery Details");
    let name: String = Input::new().with_prompt("Full name").interact_text()?;
    let phone: String = Input::new().with_prompt("Phone number").interact_text()?;
    let address: String = Input::new()
        .with_prompt("Delivery location (estate, street, landmark)")
        .interact_text()?;
    ctx.output.field("Payment", PaymentMethod::Mpesa.display_name());

    let form = CheckoutForm::new(name, phone, address);
    if let Err(e) = form.validate() {
        ctx.output.warn(&e.to_string());
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt("Send order via WhatsApp?")
        .default(true)
        .interact()?;
    if !confirmed {
        ctx.output.warn("Checkout cancelled");
        return Ok(());
    }

    let receipt = shop.checkout(&form)?;
    ctx.output.success(&format!("Order {} placed", receipt.order.id));
    ctx.output
        .info("Open this link to send the order to the bakery on WhatsApp:");
    println!("{}", receipt.whatsapp_url);
    ctx.output.info(&format!(
        "Keep your order ID ({}) to track your cake.",
        receipt.order.id
    ));
    Ok(())
}

fn track(shop: &Shop, ctx: &Context) -> Result<()> {
    let id: String = Input::new()
        .with_prompt("Order ID (e.g. JL-1234)")
        .interact_text()?;

    match shop.track(&id) {
        Ok(order) => ctx.output.order(order),
        Err(e) => ctx.output.warn(&e.to_string()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Output;
    use jayli_storefront::StorefrontConfig;

    fn ctx() -> Context {
        Context {
            config: StorefrontConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: std::env::temp_dir(),
        }
    }

    #[test]
    fn test_basket_limit_does_not_end_session() {
        let error = StorefrontError::Commerce(CommerceError::QuantityExceedsLimit(100, 99));
        assert!(keep_shopping(error.into(), &ctx()).is_ok());

        let error = CommerceError::ProductNotFound("42".to_string());
        assert!(keep_shopping(error.into(), &ctx()).is_ok());
    }

    #[test]
    fn test_terminal_errors_end_session() {
        let error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(keep_shopping(error.into(), &ctx()).is_err());
    }
}
