//! Storefront configuration.
//!
//! Read from `jayli.toml` (or JSON when the path ends in `.json`). Every field
//! has a default, so an empty file is a valid config.

use std::path::{Path, PathBuf};

use jayli_assistant::{GeminiClient, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use jayli_commerce::checkout::{WhatsAppHandoff, DEFAULT_WHATSAPP_NUMBER};
use jayli_commerce::pricing::PricingRules;
use jayli_commerce::{Currency, Money};
use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["jayli.toml", ".jayli.toml", "jayli.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Shop identity and handoff.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Prices in whole currency units.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Chat assistant.
    #[serde(default)]
    pub assistant: AssistantConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorefrontError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StorefrontError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = if is_json(path) {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| StorefrontError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StorefrontError> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self).map_err(|e| e.to_string())
        } else {
            toml::to_string_pretty(self).map_err(|e| e.to_string())
        }
        .map_err(|message| StorefrontError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })?;

        std::fs::write(path, content).map_err(|source| StorefrontError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find a config file in `start` or any parent directory.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn currency(&self) -> Result<Currency, StorefrontError> {
        Currency::from_code(&self.shop.currency).ok_or_else(|| {
            StorefrontError::InvalidConfig(format!("unknown currency '{}'", self.shop.currency))
        })
    }

    /// Pricing rules in the configured currency.
    pub fn pricing_rules(&self) -> Result<PricingRules, StorefrontError> {
        let currency = self.currency()?;
        if self.pricing.base_price_per_kg <= 0 {
            return Err(StorefrontError::InvalidConfig(
                "pricing.base_price_per_kg must be positive".to_string(),
            ));
        }
        if self.pricing.delivery_fee < 0 {
            return Err(StorefrontError::InvalidConfig(
                "pricing.delivery_fee cannot be negative".to_string(),
            ));
        }
        let amount = |field: &str, value: i64| {
            Money::try_from_major(value, currency).ok_or_else(|| {
                StorefrontError::InvalidConfig(format!("pricing.{} is too large", field))
            })
        };
        Ok(PricingRules::new(
            amount("base_price_per_kg", self.pricing.base_price_per_kg)?,
            amount("delivery_fee", self.pricing.delivery_fee)?,
        ))
    }

    pub fn handoff(&self) -> Result<WhatsAppHandoff, StorefrontError> {
        let handoff = WhatsAppHandoff::new(&self.shop.whatsapp_number);
        if handoff.number().is_empty() {
            return Err(StorefrontError::InvalidConfig(
                "shop.whatsapp_number has no digits".to_string(),
            ));
        }
        Ok(handoff)
    }

    /// A Gemini client using the configured model, endpoint and key variable.
    pub fn gemini_client(&self) -> Result<GeminiClient, StorefrontError> {
        let client = GeminiClient::from_env(&self.assistant.api_key_env)?
            .with_model(&self.assistant.model)
            .with_endpoint(&self.assistant.endpoint);
        Ok(client)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

/// Shop identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopConfig {
    #[serde(default = "default_shop_name")]
    pub name: String,

    /// Number orders are sent to, international format.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    /// ISO currency code for prices.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Where deliveries are made.
    #[serde(default = "default_delivery_area")]
    pub delivery_area: String,
}

fn default_shop_name() -> String {
    "Jayli".to_string()
}

fn default_whatsapp_number() -> String {
    DEFAULT_WHATSAPP_NUMBER.to_string()
}

fn default_currency() -> String {
    Currency::KES.code().to_string()
}

fn default_delivery_area() -> String {
    "Mbita, South Nyanza".to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
            whatsapp_number: default_whatsapp_number(),
            currency: default_currency(),
            delivery_area: default_delivery_area(),
        }
    }
}

/// Pricing, in whole currency units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    #[serde(default = "default_base_price_per_kg")]
    pub base_price_per_kg: i64,

    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: i64,
}

fn default_base_price_per_kg() -> i64 {
    PricingRules::DEFAULT_BASE_PRICE_PER_KG
}

fn default_delivery_fee() -> i64 {
    PricingRules::DEFAULT_DELIVERY_FEE
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price_per_kg: default_base_price_per_kg(),
            delivery_fee: default_delivery_fee(),
        }
    }
}

/// Chat assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Environment variable the API key is read from.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// Contents written by `jayli config init`.
pub fn generate_default_config() -> String {
    format!(
        r#"# Jayli storefront configuration

[shop]
name = "Jayli"
whatsapp_number = "{number}"
currency = "KES"
delivery_area = "Mbita, South Nyanza"

[pricing]
# Whole shillings
base_price_per_kg = {base}
delivery_fee = {delivery}

[assistant]
model = "{model}"
# endpoint = "{endpoint}"
api_key_env = "{key_env}"
"#,
        number = DEFAULT_WHATSAPP_NUMBER,
        base = PricingRules::DEFAULT_BASE_PRICE_PER_KG,
        delivery = PricingRules::DEFAULT_DELIVERY_FEE,
        model = DEFAULT_MODEL,
        endpoint = DEFAULT_ENDPOINT,
        key_env = DEFAULT_API_KEY_ENV,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let parsed: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let parsed: StorefrontConfig = toml::from_str(
            r#"
[pricing]
delivery_fee = 250
"#,
        )
        .unwrap();
        assert_eq!(parsed.pricing.delivery_fee, 250);
        assert_eq!(parsed.pricing.base_price_per_kg, 2000);
        assert_eq!(parsed.shop.whatsapp_number, "254706816485");

        let rules = parsed.pricing_rules().unwrap();
        assert_eq!(rules.delivery_fee, Money::kes(250));
    }

    #[test]
    fn test_invalid_values() {
        let mut config = StorefrontConfig::default();
        config.shop.currency = "XYZ".to_string();
        assert!(matches!(config.pricing_rules(), Err(StorefrontError::InvalidConfig(_))));

        let mut config = StorefrontConfig::default();
        config.pricing.base_price_per_kg = 0;
        assert!(matches!(config.pricing_rules(), Err(StorefrontError::InvalidConfig(_))));

        let mut config = StorefrontConfig::default();
        config.shop.whatsapp_number = "call us".to_string();
        assert!(matches!(config.handoff(), Err(StorefrontError::InvalidConfig(_))));
    }

    #[test]
    fn test_huge_prices_rejected() {
        let config: StorefrontConfig =
            toml::from_str("[pricing]\nbase_price_per_kg = 9223372036854775807\n").unwrap();
        assert_eq!(config.pricing.base_price_per_kg, i64::MAX);
        assert!(matches!(config.pricing_rules(), Err(StorefrontError::InvalidConfig(_))));

        let mut config = StorefrontConfig::default();
        config.pricing.delivery_fee = i64::MAX / 10;
        assert!(matches!(config.pricing_rules(), Err(StorefrontError::InvalidConfig(_))));
    }
}
