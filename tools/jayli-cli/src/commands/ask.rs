//! Chat with Baker AI.

use anyhow::{bail, Result};
use dialoguer::Input;
use jayli_assistant::GREETING;
use serde_json::json;

use super::AskArgs;
use crate::context::{Context, Shop};

/// Run the ask command.
pub async fn run(args: AskArgs, ctx: &Context) -> Result<()> {
    if !ctx.assistant_available() {
        bail!(
            "Baker AI needs an API key. Set {} in your environment or .env file.",
            ctx.config.assistant.api_key_env
        );
    }

    let mut shop = ctx.open_shop()?;
    let question = args.question.join(" ");

    if !question.trim().is_empty() {
        let reply = ask_once(&mut shop, &question, ctx).await?;
        if ctx.output.is_json() {
            ctx.output.json(&json!({ "question": question.trim(), "reply": reply }));
        }
        return Ok(());
    }

    chat_loop(&mut shop, ctx).await
}

/// Interactive chat until the user enters a blank line.
pub async fn chat_loop(shop: &mut Shop, ctx: &Context) -> Result<()> {
    ctx.output.chat("Baker AI", GREETING);
    loop {
        let message: String = Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()?;
        if message.trim().is_empty() {
            return Ok(());
        }
        ask_once(shop, &message, ctx).await?;
    }
}

async fn ask_once(shop: &mut Shop, message: &str, ctx: &Context) -> Result<Option<String>> {
    let spinner = ctx.output.spinner("Baker AI is typing...");
    let reply = shop.ask(message).await;
    spinner.finish_and_clear();

    let reply = reply?;
    if let Some(text) = &reply {
        ctx.output.chat("Baker AI", text);
    }
    Ok(reply)
}
