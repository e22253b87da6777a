//! Text generation backends.

use crate::error::AssistantError;
use async_trait::async_trait;

/// Something that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError>;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        (**self).generate(prompt).await
    }
}
