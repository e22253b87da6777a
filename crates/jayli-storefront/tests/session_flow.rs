//! End-to-end shopping session through the storefront controller.

use async_trait::async_trait;
use jayli_assistant::{AssistantError, TextGenerator, CONNECTION_ERROR_REPLY, GREETING};
use jayli_commerce::builder::{BuilderStep, OptionFamily};
use jayli_commerce::catalog::CakeCategory;
use jayli_commerce::checkout::{CheckoutForm, OrderStatus};
use jayli_commerce::{CommerceError, Money};
use jayli_storefront::{Storefront, StorefrontConfig, StorefrontError};

struct CannedReply(&'static str);

#[async_trait]
impl TextGenerator for CannedReply {
    async fn generate(&self, _prompt: &str) -> Result<String, AssistantError> {
        Ok(self.0.to_string())
    }
}

struct Offline;

#[async_trait]
impl TextGenerator for Offline {
    async fn generate(&self, _prompt: &str) -> Result<String, AssistantError> {
        Err(AssistantError::Http {
            status: 503,
            message: "unavailable".to_string(),
        })
    }
}

fn shop() -> Storefront<CannedReply> {
    Storefront::new(CannedReply("Our Red Velvet is a favourite!"))
}

#[test]
fn test_browse_and_merge() {
    let mut shop = shop();
    assert_eq!(shop.browse(Some(CakeCategory::Kids)).len(), 2);
    assert_eq!(shop.reviews().len(), 3);

    shop.add_to_basket("w3").unwrap();
    shop.add_to_basket("w3").unwrap();
    assert_eq!(shop.basket().len(), 1);
    assert_eq!(shop.basket().lines()[0].quantity, 2);

    let summary = shop.basket_summary().unwrap();
    assert_eq!(summary.subtotal, Money::kes(30000));
    assert_eq!(summary.grand_total, Money::kes(30300));
}

#[test]
fn test_quantity_limit_keeps_session() {
    let mut shop = shop();
    shop.add_to_basket("3").unwrap();
    shop.update_quantity("3", 98).unwrap();
    assert_eq!(shop.basket().lines()[0].quantity, 99);

    assert!(matches!(
        shop.update_quantity("3", 1),
        Err(StorefrontError::Commerce(CommerceError::QuantityExceedsLimit(100, 99)))
    ));
    assert!(matches!(
        shop.add_to_basket("3"),
        Err(StorefrontError::Commerce(CommerceError::QuantityExceedsLimit(100, 99)))
    ));
    assert_eq!(shop.basket().lines()[0].quantity, 99);

    let receipt = shop
        .checkout(&CheckoutForm::new("Akinyi", "0711000111", "Mbita Point"))
        .unwrap();
    assert_eq!(receipt.order.items[0].quantity, 99);
}

#[test]
fn test_unknown_product() {
    let mut shop = shop();
    let err = shop.add_to_basket("42").unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Commerce(CommerceError::ProductNotFound(ref id)) if id == "42"
    ));
}

#[test]
fn test_build_custom_cake_and_check_out() {
    let mut shop = shop();

    shop.choose_option(OptionFamily::Flavor, "chocolate").unwrap();
    shop.builder_next().unwrap();
    shop.choose_option(OptionFamily::Filling, "choc_ganache").unwrap();
    shop.choose_option(OptionFamily::Frosting, "semi_naked").unwrap();
    shop.builder_next().unwrap();
    shop.set_weight_kg(2.0).unwrap();
    shop.set_message("Happy 30th Wambui");
    assert_eq!(shop.builder_price().unwrap(), Money::kes(5000));
    assert_eq!(shop.builder_next().unwrap(), BuilderStep::Review);

    let line = shop.add_custom_cake().unwrap();
    assert!(line.is_custom());
    assert_eq!(shop.configurator().step(), BuilderStep::Flavor);

    shop.buy_now("6").unwrap();
    shop.buy_now("6").unwrap();
    assert_eq!(shop.basket().len(), 2);

    let form = CheckoutForm::new("Wambui", "0722000111", "Mbita, Rusinga Island");
    let receipt = shop.checkout(&form).unwrap();
    assert!(shop.basket().is_empty());
    assert_eq!(receipt.order.total, Money::kes(8500));
    assert_eq!(receipt.order.status, OrderStatus::Pending);
    assert!(receipt.message.contains("• *CUSTOM CAKE* (2kg)"));
    assert!(receipt.message.contains("  - Message: \"Happy 30th Wambui\""));
    assert!(receipt
        .message
        .contains("• Colorful Funfetti Surprise (1 x 1kg) @ KES 3,500"));
    assert!(receipt.message.contains("*Total:* KES 8,500"));

    let tracked = shop.track(receipt.order.id.as_str()).unwrap();
    assert_eq!(tracked.customer_name, "Wambui");
    assert_eq!(shop.orders().len(), 1);

    assert!(matches!(
        shop.track("JL-0001"),
        Err(StorefrontError::Commerce(CommerceError::OrderNotFound(_)))
    ));
}

#[test]
fn test_builder_rejects_bad_input() {
    let mut shop = shop();
    assert!(shop.choose_option(OptionFamily::Frosting, "glitter").is_err());
    assert_eq!(shop.configurator().configuration().frosting.id.as_str(), "semi_naked");

    assert!(shop.set_weight_kg(6.0).is_err());
    assert!(shop.builder_back().is_err());
    assert!(shop.add_custom_cake().is_err());
    assert!(shop.basket().is_empty());
}

#[test]
fn test_restart_builder() {
    let mut shop = shop();
    shop.choose_option(OptionFamily::Flavor, "redvelvet").unwrap();
    shop.set_weight_kg(3.0).unwrap();
    shop.builder_next().unwrap();
    assert_eq!(shop.builder_price().unwrap(), Money::kes(6900));

    shop.restart_builder();
    assert_eq!(shop.configurator().step(), BuilderStep::Flavor);
    assert_eq!(shop.builder_price().unwrap(), Money::kes(2000));
}

#[test]
fn test_checkout_requires_items_and_details() {
    let mut shop = shop();
    let form = CheckoutForm::new("Wambui", "0722000111", "Mbita");
    assert!(matches!(
        shop.checkout(&form),
        Err(StorefrontError::Commerce(CommerceError::EmptyBasket))
    ));

    shop.add_to_basket("1").unwrap();
    let incomplete = CheckoutForm::new("Wambui", "", "");
    assert!(matches!(
        shop.checkout(&incomplete),
        Err(StorefrontError::Commerce(CommerceError::CheckoutIncomplete(_)))
    ));
    assert_eq!(shop.basket().len(), 1);
}

#[test]
fn test_config_overrides_pricing_and_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jayli.toml");
    std::fs::write(
        &path,
        r#"
[shop]
whatsapp_number = "+254 700 000 001"

[pricing]
base_price_per_kg = 2200
delivery_fee = 0
"#,
    )
    .unwrap();

    let nested = dir.path().join("orders").join("today");
    std::fs::create_dir_all(&nested).unwrap();
    let found = StorefrontConfig::discover(&nested).unwrap();
    assert_eq!(found, path);

    let config = StorefrontConfig::load(&found).unwrap();
    let mut shop = Storefront::from_config(&config, CannedReply("ok")).unwrap();
    assert_eq!(shop.builder_price().unwrap(), Money::kes(2200));

    shop.add_to_basket("8").unwrap();
    let summary = shop.basket_summary().unwrap();
    assert_eq!(summary.grand_total, Money::kes(2800));

    let receipt = shop
        .checkout(&CheckoutForm::new("Achieng", "0711", "Mbita"))
        .unwrap();
    assert!(receipt.whatsapp_url.starts_with("https://wa.me/254700000001?text="));
}

#[test]
fn test_json_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jayli.json");

    let mut config = StorefrontConfig::default();
    config.assistant.model = "gemini-2.5-pro".to_string();
    config.save(&path).unwrap();

    let loaded = StorefrontConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_unsupported_currency_rejected() {
    let mut config = StorefrontConfig::default();
    config.shop.currency = "USD".to_string();
    assert!(matches!(
        Storefront::from_config(&config, CannedReply("ok")),
        Err(StorefrontError::InvalidConfig(_))
    ));
}

#[tokio::test]
async fn test_chat_round_trip() {
    let mut shop = shop();
    assert_eq!(shop.chat().messages()[0].text, GREETING);

    let reply = shop.ask("Which cake for a graduation?").await.unwrap();
    assert_eq!(reply.as_deref(), Some("Our Red Velvet is a favourite!"));
    assert_eq!(shop.chat().messages().len(), 3);
    assert!(!shop.chat().is_typing());

    assert_eq!(shop.ask("").await.unwrap(), None);
    assert_eq!(shop.chat().messages().len(), 3);
}

#[tokio::test]
async fn test_chat_fallback_when_offline() {
    let mut shop = Storefront::new(Offline);
    let reply = shop.ask("Hello").await.unwrap();
    assert_eq!(reply.as_deref(), Some(CONNECTION_ERROR_REPLY));
    assert!(!shop.chat().is_typing());
}
