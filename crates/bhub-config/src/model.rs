use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

/// User-configurable preferences for the booking CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub pricing: PricingSettings,
    #[serde(default)]
    pub latency: LatencySettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the persisted session. Defaults to the app data directory.
    pub session_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            pricing: PricingSettings::default(),
            latency: LatencySettings::default(),
            last_login_email: None,
            session_dir: None,
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_session_dir(&self, base: &std::path::Path) -> PathBuf {
        match &self.session_dir {
            Some(path) => path.clone(),
            None => base.join("session"),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.trim().len() != 3 {
            return Err(ConfigError::Invalid {
                key: "currency",
                reason: format!("`{}` is not a three-letter code", self.currency),
            });
        }
        self.pricing.validate()
    }
}

/// Duration, headcount and deposit assumptions used for quotes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingSettings {
    #[serde(default = "PricingSettings::default_duration_hours")]
    pub duration_hours: u32,
    #[serde(default = "PricingSettings::default_attendee_estimate")]
    pub attendee_estimate: u32,
    #[serde(default = "PricingSettings::default_deposit_rate")]
    pub deposit_rate: f64,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            duration_hours: Self::default_duration_hours(),
            attendee_estimate: Self::default_attendee_estimate(),
            deposit_rate: Self::default_deposit_rate(),
        }
    }
}

impl PricingSettings {
    pub fn default_duration_hours() -> u32 {
        4
    }

    pub fn default_attendee_estimate() -> u32 {
        100
    }

    pub fn default_deposit_rate() -> f64 {
        0.25
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_hours == 0 {
            return Err(ConfigError::Invalid {
                key: "pricing.duration_hours",
                reason: "must be at least one hour".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.deposit_rate) {
            return Err(ConfigError::Invalid {
                key: "pricing.deposit_rate",
                reason: format!("{} is outside 0..=1", self.deposit_rate),
            });
        }
        Ok(())
    }
}

/// Simulated round-trip delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencySettings {
    #[serde(default = "LatencySettings::default_login_ms")]
    pub login_ms: u64,
    #[serde(default = "LatencySettings::default_contact_ms")]
    pub contact_ms: u64,
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            login_ms: Self::default_login_ms(),
            contact_ms: Self::default_contact_ms(),
        }
    }
}

impl LatencySettings {
    pub fn default_login_ms() -> u64 {
        1000
    }

    pub fn default_contact_ms() -> u64 {
        1500
    }
}
