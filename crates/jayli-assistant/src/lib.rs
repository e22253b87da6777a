//! Baker AI, the Jayli storefront's chat assistant.
//!
//! A [`ChatSession`] keeps the transcript and typing flag. A [`BakerAssistant`]
//! builds the prompt and turns model failures into friendly replies. The model
//! itself sits behind [`TextGenerator`]; [`GeminiClient`] is the real one.

mod assistant;
mod error;
mod gemini;
mod generator;
mod message;
mod prompt;
mod session;

pub use assistant::{BakerAssistant, CONNECTION_ERROR_REPLY, EMPTY_REPLY, GREETING};
pub use error::AssistantError;
pub use gemini::{GeminiClient, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use generator::TextGenerator;
pub use message::{ChatMessage, Role};
pub use prompt::{build_prompt, SYSTEM_INSTRUCTION};
pub use session::{ChatSession, PendingTurn};
