//! Baker AI: prompt the model and never fail the conversation.

use crate::generator::TextGenerator;
use crate::message::ChatMessage;
use crate::prompt::build_prompt;
use tracing::{info, warn};

/// Opening line of every chat.
pub const GREETING: &str =
    "Habari! I'm your virtual baking assistant from Jayli. Need help choosing a cake for your special occasion?";

/// Shown when the model answers with no text.
pub const EMPTY_REPLY: &str = "I'm busy kneading dough! Please ask again in a moment.";

/// Shown when the model could not be reached.
pub const CONNECTION_ERROR_REPLY: &str =
    "Sorry, I'm having trouble connecting to the recipe book (server). Please try again.";

/// Wraps a generator with the bakery persona and fallback replies.
#[derive(Debug, Clone)]
pub struct BakerAssistant<G> {
    generator: G,
}

impl<G: TextGenerator> BakerAssistant<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Reply to `message` given the prior transcript.
    ///
    /// Makes exactly one request. Failures become a canned reply.
    pub async fn reply(&self, history: &[ChatMessage], message: &str) -> String {
        let prompt = build_prompt(history, message);

        match self.generator.generate(&prompt).await {
            Ok(text) if text.trim().is_empty() => {
                warn!("assistant returned an empty reply");
                EMPTY_REPLY.to_string()
            }
            Ok(text) => {
                info!(chars = text.len(), "assistant replied");
                text
            }
            Err(e) => {
                warn!(error = %e, "assistant request failed");
                CONNECTION_ERROR_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssistantError;
    use crate::prompt::SYSTEM_INSTRUCTION;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Canned {
        result: Result<String, AssistantError>,
        last_prompt: Mutex<Option<String>>,
    }

    impl Canned {
        fn new(result: Result<String, AssistantError>) -> Self {
            Self {
                result,
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for Canned {
        async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_reply_passes_text_through() {
        let assistant = BakerAssistant::new(Canned::new(Ok("Red Velvet for 20 guests.".into())));
        let reply = assistant.reply(&[], "Ideas for a graduation?").await;
        assert_eq!(reply, "Red Velvet for 20 guests.");

        let prompt = assistant.generator().last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.starts_with(SYSTEM_INSTRUCTION));
        assert!(prompt.contains("User: Ideas for a graduation?"));
    }

    #[tokio::test]
    async fn test_blank_reply_uses_fallback() {
        let assistant = BakerAssistant::new(Canned::new(Ok("  \n".into())));
        assert_eq!(assistant.reply(&[], "hello").await, EMPTY_REPLY);
    }

    #[tokio::test]
    async fn test_error_uses_fallback() {
        let assistant = BakerAssistant::new(Canned::new(Err(AssistantError::Http {
            status: 503,
            message: "overloaded".into(),
        })));
        assert_eq!(assistant.reply(&[], "hello").await, CONNECTION_ERROR_REPLY);
    }
}
