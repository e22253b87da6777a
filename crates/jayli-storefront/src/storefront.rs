//! The storefront session controller.

use jayli_assistant::{BakerAssistant, ChatSession, TextGenerator};
use jayli_commerce::basket::{Basket, BasketSummary};
use jayli_commerce::builder::{BuilderMenu, BuilderStep, Configurator, OptionFamily, Weight};
use jayli_commerce::catalog::{CakeCategory, Catalog, CatalogItem, Review};
use jayli_commerce::checkout::{CheckoutForm, Order, OrderBook, Receipt, WhatsAppHandoff};
use jayli_commerce::pricing::{PriceBreakdown, PricingRules};
use jayli_commerce::{LineItemId, Money, ProductId};
use tracing::info;

use crate::config::StorefrontConfig;
use crate::error::StorefrontError;

/// One shopper's session: catalog, basket, cake builder, orders and chat.
///
/// Everything a front end does goes through this type. State lives only as
/// long as the value does.
pub struct Storefront<G> {
    catalog: Catalog,
    menu: BuilderMenu,
    rules: PricingRules,
    handoff: WhatsAppHandoff,
    basket: Basket,
    configurator: Configurator,
    orders: OrderBook,
    assistant: BakerAssistant<G>,
    chat: ChatSession,
}

impl<G: TextGenerator> Storefront<G> {
    /// A session with the standard menu and default pricing.
    pub fn new(generator: G) -> Self {
        let menu = BuilderMenu::standard();
        Self {
            catalog: Catalog::standard(),
            configurator: Configurator::new(&menu),
            menu,
            rules: PricingRules::default(),
            handoff: WhatsAppHandoff::default(),
            basket: Basket::new(),
            orders: OrderBook::new(),
            assistant: BakerAssistant::new(generator),
            chat: ChatSession::new(),
        }
    }

    /// A session using configured pricing and WhatsApp number.
    pub fn from_config(config: &StorefrontConfig, generator: G) -> Result<Self, StorefrontError> {
        let rules = config.pricing_rules()?;
        let handoff = config.handoff()?;

        let mut storefront = Self::new(generator);
        storefront.rules = rules;
        storefront.handoff = handoff;
        info!(shop = %config.shop.name, "storefront session started");
        Ok(storefront)
    }

    // Catalog

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Cakes in a category, or all of them.
    pub fn browse(&self, category: Option<CakeCategory>) -> Vec<&CatalogItem> {
        self.catalog.browse(category)
    }

    pub fn reviews(&self) -> &[Review] {
        self.catalog.reviews()
    }

    pub fn menu(&self) -> &BuilderMenu {
        &self.menu
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    // Basket

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn add_to_basket(&mut self, product_id: &str) -> Result<LineItemId, StorefrontError> {
        let item = self.catalog.get(&ProductId::new(product_id))?;
        Ok(self.basket.add_product(item)?)
    }

    /// Put a cake in the basket unless it is already there.
    pub fn buy_now(&mut self, product_id: &str) -> Result<LineItemId, StorefrontError> {
        let item = self.catalog.get(&ProductId::new(product_id))?;
        Ok(self.basket.buy_now(item)?)
    }

    pub fn update_quantity(&mut self, line_id: &str, delta: i64) -> Result<i64, StorefrontError> {
        Ok(self.basket.update_quantity(&LineItemId::new(line_id), delta)?)
    }

    pub fn remove_from_basket(&mut self, line_id: &str) -> bool {
        self.basket.remove(&LineItemId::new(line_id))
    }

    pub fn basket_summary(&self) -> Result<BasketSummary, StorefrontError> {
        Ok(self.basket.summary(&self.rules)?)
    }

    // Cake builder

    pub fn configurator(&self) -> &Configurator {
        &self.configurator
    }

    pub fn builder_next(&mut self) -> Result<BuilderStep, StorefrontError> {
        Ok(self.configurator.next()?)
    }

    pub fn builder_back(&mut self) -> Result<BuilderStep, StorefrontError> {
        Ok(self.configurator.back()?)
    }

    /// Select an option by id. Unknown ids leave the configuration unchanged.
    pub fn choose_option(&mut self, family: OptionFamily, id: &str) -> Result<(), StorefrontError> {
        let option = self.menu.find(family, id)?.clone();
        match family {
            OptionFamily::Flavor => self.configurator.set_flavor(option),
            OptionFamily::Filling => self.configurator.set_filling(option),
            OptionFamily::Frosting => self.configurator.set_frosting(option),
        }
        Ok(())
    }

    pub fn set_weight_kg(&mut self, kg: f64) -> Result<(), StorefrontError> {
        self.configurator.set_weight(Weight::from_kg(kg)?);
        Ok(())
    }

    pub fn set_message(&mut self, message: &str) {
        self.configurator.set_message(message);
    }

    pub fn toggle_topper(&mut self, topper: &str) -> bool {
        self.configurator.toggle_topper(topper)
    }

    /// Live price of the cake being built.
    pub fn builder_price(&self) -> Result<Money, StorefrontError> {
        Ok(self.configurator.current_price(&self.rules)?)
    }

    pub fn builder_breakdown(&self) -> Result<PriceBreakdown, StorefrontError> {
        Ok(self.configurator.breakdown(&self.rules)?)
    }

    /// Add the reviewed custom cake to the basket and reset the builder.
    pub fn add_custom_cake(&mut self) -> Result<LineItemId, StorefrontError> {
        Ok(self.configurator.commit(&mut self.basket, &self.rules)?)
    }

    /// Throw away the cake being built and go back to step 1.
    pub fn restart_builder(&mut self) {
        self.configurator.reset();
    }

    // Orders

    /// Place the order and produce the WhatsApp handoff.
    pub fn checkout(&mut self, form: &CheckoutForm) -> Result<Receipt, StorefrontError> {
        Ok(self
            .orders
            .place(&mut self.basket, form, &self.rules, &self.handoff)?)
    }

    pub fn track(&self, order_id: &str) -> Result<&Order, StorefrontError> {
        Ok(self.orders.track(order_id)?)
    }

    pub fn orders(&self) -> &[Order] {
        self.orders.orders()
    }

    // Assistant

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    /// Send a chat message and wait for Baker AI's reply.
    ///
    /// Returns `None` for blank input.
    pub async fn ask(&mut self, message: &str) -> Result<Option<String>, StorefrontError> {
        Ok(self.chat.send(&self.assistant, message).await?)
    }
}
