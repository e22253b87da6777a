//! Menu and review listings.

use anyhow::Result;
use jayli_commerce::catalog::{CakeCategory, Catalog};

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::standard();
    let category = args
        .category
        .as_deref()
        .map(str::parse::<CakeCategory>)
        .transpose()?;

    let items = catalog.browse(category);

    if ctx.output.is_json() {
        ctx.output.json(&items);
        return Ok(());
    }

    let title = match category {
        Some(c) => format!("{} Cakes", c),
        None => format!("{} Menu", ctx.config.shop.name),
    };
    ctx.output.header(&title);

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            vec![
                item.id.to_string(),
                item.name.clone(),
                item.category.display_name().to_string(),
                item.unit_price.display(),
                format!("{:.1}", item.rating),
            ]
        })
        .collect();
    ctx.output.table(
        &["ID", "CAKE", "CATEGORY", "PRICE/KG", "RATING"],
        &rows,
        &[4, 34, 12, 12, 6],
    );

    ctx.output.info("");
    ctx.output.info(&format!(
        "{} cakes. Delivery within {} for {}.",
        items.len(),
        ctx.config.shop.delivery_area,
        ctx.config.pricing_rules()?.delivery_fee.display()
    ));

    Ok(())
}

/// Run the reviews command.
pub async fn reviews(ctx: &Context) -> Result<()> {
    let catalog = Catalog::standard();

    if ctx.output.is_json() {
        ctx.output.json(&catalog.reviews());
        return Ok(());
    }

    ctx.output.header("What our customers say");
    for review in catalog.reviews() {
        ctx.output.info("");
        ctx.output.field(&review.customer_name, review.stars());
        ctx.output.list_item(&format!("\"{}\" ({})", review.comment, review.date));
    }

    Ok(())
}
