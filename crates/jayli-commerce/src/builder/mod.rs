//! Custom cake builder: option lists, weights, the configuration and the
//! four-step wizard that commits it to the basket.

mod configuration;
mod option;
mod wizard;

pub use configuration::{CustomConfiguration, Weight, MAX_MESSAGE_CHARS};
pub use option::{BuilderMenu, BuilderOption, OptionFamily};
pub use wizard::{BuilderStep, Configurator};
