//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use jayli_assistant::{AssistantError, TextGenerator};
use jayli_storefront::{Storefront, StorefrontConfig};

use crate::output::Output;

/// Storefront with whichever assistant backend is available.
pub type Shop = Storefront<Box<dyn TextGenerator>>;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// File the config was loaded from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(PathBuf::from(path)),
            None => StorefrontConfig::discover(&cwd),
        };

        let config = match &config_path {
            Some(path) => {
                output.debug(&format!("Using config {}", path.display()));
                StorefrontConfig::load(path)?
            }
            None => StorefrontConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Open a storefront session.
    ///
    /// Without an API key the assistant stays offline and every chat reply is
    /// the connection fallback.
    pub fn open_shop(&self) -> Result<Shop> {
        let generator: Box<dyn TextGenerator> = match self.config.gemini_client() {
            Ok(client) => Box::new(client),
            Err(e) => {
                self.output.debug(&format!("Assistant offline: {}", e));
                Box::new(OfflineAssistant)
            }
        };
        Storefront::from_config(&self.config, generator).context("Invalid storefront configuration")
    }

    /// Whether an API key is available for the assistant.
    pub fn assistant_available(&self) -> bool {
        self.config.gemini_client().is_ok()
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Stand-in generator used when no API key is configured.
struct OfflineAssistant;

#[async_trait]
impl TextGenerator for OfflineAssistant {
    async fn generate(&self, _prompt: &str) -> Result<String, AssistantError> {
        Err(AssistantError::Request("assistant is offline".to_string()))
    }
}
