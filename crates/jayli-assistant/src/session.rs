//! Chat transcript with a typing indicator.

use crate::assistant::{BakerAssistant, GREETING};
use crate::error::AssistantError;
use crate::generator::TextGenerator;
use crate::message::ChatMessage;
use serde::Serialize;

/// A user turn waiting for its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    /// Transcript before the user's message.
    pub history: Vec<ChatMessage>,
    pub message: String,
}

/// The chat panel's state.
///
/// While `typing` is set a reply is outstanding and new input is refused.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    typing: bool,
}

impl ChatSession {
    /// A transcript holding only the greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::model(GREETING)],
            typing: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Record the user's message and mark a reply as outstanding.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn begin(&mut self, input: &str) -> Result<Option<PendingTurn>, AssistantError> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(None);
        }
        if self.typing {
            return Err(AssistantError::Busy);
        }

        let history = self.messages.clone();
        self.messages.push(ChatMessage::user(text));
        self.typing = true;

        Ok(Some(PendingTurn {
            history,
            message: text.to_string(),
        }))
    }

    /// Append the model's reply and clear the typing flag.
    pub fn finish(&mut self, reply: impl Into<String>) {
        self.messages.push(ChatMessage::model(reply));
        self.typing = false;
    }

    /// Send a message and wait for the reply.
    ///
    /// Returns the reply text, or `None` if the input was blank.
    pub async fn send<G: TextGenerator>(
        &mut self,
        assistant: &BakerAssistant<G>,
        input: &str,
    ) -> Result<Option<String>, AssistantError> {
        let Some(turn) = self.begin(input)? else {
            return Ok(None);
        };
        let reply = assistant.reply(&turn.history, &turn.message).await;
        self.finish(reply.clone());
        Ok(Some(reply))
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
