//! Terminal rendering for the storefront.
//!
//! Human-readable output goes to stdout and diagnostics to stderr. With
//! `--json` only [`Output::json`] and errors are printed.

use std::fmt::Display;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use jayli_commerce::basket::BasketSummary;
use jayli_commerce::builder::{BuilderStep, CustomConfiguration};
use jayli_commerce::checkout::{Order, OrderStatus};
use jayli_commerce::pricing::PriceBreakdown;
use jayli_commerce::Money;

/// Width of the label column in field and price lines.
const LABEL_WIDTH: usize = 14;

/// Width of a receipt-style line, label plus right-aligned amount.
const RECEIPT_WIDTH: usize = 40;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn line(&self, text: impl Display) {
        if !self.json {
            println!("{}", text);
        }
    }

    pub fn info(&self, msg: &str) {
        self.line(format_args!("{} {}", style("ℹ").blue(), msg));
    }

    pub fn success(&self, msg: &str) {
        self.line(format_args!("{} {}", style("✓").green(), msg));
    }

    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors print in both modes; JSON mode wraps them in an object.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `-v`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        self.line(format_args!("\n{}", style(msg).bold().underlined()));
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// A labelled value, e.g. `Filling       Lemon Curd`.
    pub fn field(&self, label: &str, value: impl Display) {
        let label = format!("{:<width$}", label, width = LABEL_WIDTH);
        self.line(format_args!("  {} {}", style(label).dim(), value));
    }

    pub fn list_item(&self, item: &str) {
        self.line(format_args!("  {} {}", style("•").dim(), item));
    }

    /// A receipt line with the amount right-aligned.
    pub fn price(&self, label: &str, amount: &Money) {
        self.line(format_args!("  {}", receipt_line(label, amount)));
    }

    /// A bold receipt line under a rule.
    pub fn total(&self, label: &str, amount: &Money) {
        self.line(format_args!("  {}", style("─".repeat(RECEIPT_WIDTH)).dim()));
        self.line(format_args!("  {}", style(receipt_line(label, amount)).bold()));
    }

    /// A table with a dimmed header row. Cells wider than their column push
    /// the rest of the row right.
    pub fn table(&self, headers: &[&str], rows: &[Vec<String>], widths: &[usize]) {
        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        self.line(format_args!("  {}", style(table_cells(&headers, widths)).dim()));
        for row in rows {
            self.line(format_args!("  {}", table_cells(row, widths)));
        }
    }

    /// Builder progress, e.g. `[2/4] Filling & Finish ●●○○`.
    pub fn builder_step(&self, step: BuilderStep) {
        self.line(format_args!(
            "\n{} {} {}",
            style(format!("[{}/{}]", step.number(), BuilderStep::ALL.len())).dim(),
            style(step.display_name()).bold(),
            style(step_dots(step)).magenta()
        ));
    }

    /// What the customer chose for a custom cake.
    pub fn configuration(&self, config: &CustomConfiguration) {
        let (low, high) = config.weight.servings();
        self.header(&config.display_name());
        self.field("Filling", &config.filling.name);
        self.field("Finish", &config.frosting.name);
        self.field(
            "Weight",
            format_args!("{} kg (serves {}-{})", config.weight, low, high),
        );
        if !config.message().is_empty() {
            self.field("Message", format_args!("\"{}\"", config.message()));
        }
        if !config.toppers.is_empty() {
            let toppers: Vec<&str> = config.toppers.iter().map(String::as_str).collect();
            self.field("Toppers", toppers.join(", "));
        }
    }

    /// Price of a custom cake, per option or as base plus extras.
    pub fn breakdown(&self, breakdown: &PriceBreakdown, itemized: bool) {
        self.price("Base", &breakdown.base);
        if itemized {
            self.price("Flavor", &breakdown.flavor);
            self.price("Filling", &breakdown.filling);
            self.price("Finish", &breakdown.frosting);
        } else {
            self.price("Extras", &breakdown.surcharges());
        }
        self.total("Total", &breakdown.total);
    }

    pub fn basket(&self, summary: &BasketSummary) {
        self.header("Your Basket");
        for line in &summary.lines {
            let label = format!("{} x{}", line.name, line.quantity);
            self.price(&label, &line.total);
        }
        self.line("");
        self.price("Subtotal", &summary.subtotal);
        self.price("Delivery", &summary.delivery_fee);
        self.total("Total", &summary.grand_total);
    }

    pub fn order(&self, order: &Order) {
        self.header(&format!("Order #{}", order.id));
        self.field("Status", status_badge(order.status));
        self.field("Customer", &order.customer_name);
        self.field("Placed", format_timestamp(order.created_at));
        for line in &order.items {
            self.list_item(&format!("{} x{}", line.name, line.quantity));
        }
        self.price("Subtotal", &order.total);
        self.price("Delivery", &order.delivery_fee);
        if let Some(due) = order.amount_due() {
            self.total("Amount due", &due);
        }
    }

    /// One chat turn, speaker first.
    pub fn chat(&self, speaker: &str, text: &str) {
        self.line(format_args!(
            "{} {}",
            style(format!("{}:", speaker)).magenta().bold(),
            text
        ));
    }

    /// Spinner shown while Baker AI is typing. Hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner()
            .tick_chars("🧁🍰🎂✨ ")
            .template("{spinner} {msg}")
        {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(150));
        pb
    }
}

fn receipt_line(label: &str, amount: &Money) -> String {
    let amount = amount.display();
    let pad = RECEIPT_WIDTH.saturating_sub(amount.chars().count() + 1);
    format!("{:<pad$} {}", label, amount, pad = pad)
}

fn table_cells(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
}

fn step_dots(step: BuilderStep) -> String {
    BuilderStep::ALL
        .iter()
        .map(|s| if s.number() <= step.number() { '●' } else { '○' })
        .collect()
}

fn status_badge(status: OrderStatus) -> String {
    let name = status.display_name();
    match status {
        OrderStatus::Delivered => style(name).green().to_string(),
        OrderStatus::Pending => style(name).yellow().to_string(),
        OrderStatus::Confirmed | OrderStatus::Baking | OrderStatus::OutForDelivery => {
            style(name).cyan().to_string()
        }
    }
}

/// Unix seconds as local date and time.
fn format_timestamp(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|| secs.to_string())
}
