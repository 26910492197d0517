//! bhub-config
//!
//! Persistent preferences for BanquetHub: display locale, pricing assumptions
//! and simulated latencies. Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, LatencySettings, PricingSettings};
