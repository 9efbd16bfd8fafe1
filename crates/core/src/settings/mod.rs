//! User settings: currency aliases, default targets and the home currency.

pub mod alias;
pub mod error;
pub mod store;
pub mod types;

pub use alias::AliasTable;
pub use error::ConfigError;
pub use store::ConfigStore;
pub use types::Settings;
