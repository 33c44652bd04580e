use std::env;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_DOCTOR_SHARE_PERCENT: u32 = 60;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Share of every booking amount credited to the doctor; the rest is the platform's.
    pub doctor_share_percent: u32,
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            doctor_share_percent: DEFAULT_DOCTOR_SHARE_PERCENT,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            doctor_share_percent: env::var("DOCTOR_SHARE_PERCENT")
                .ok()
                .and_then(|raw| parse_share_percent(&raw))
                .unwrap_or_else(|| {
                    warn!(
                        "DOCTOR_SHARE_PERCENT not set or invalid, using {}",
                        DEFAULT_DOCTOR_SHARE_PERCENT
                    );
                    DEFAULT_DOCTOR_SHARE_PERCENT
                }),
            currency_symbol: env::var("CURRENCY_SYMBOL")
                .ok()
                .filter(|symbol| !symbol.trim().is_empty())
                .unwrap_or_else(|| {
                    warn!("CURRENCY_SYMBOL not set, using default");
                    DEFAULT_CURRENCY_SYMBOL.to_string()
                }),
        };

        if !config.is_default_split() {
            warn!(
                "Non-standard revenue split in use: doctor {}% / platform {}%",
                config.doctor_share_percent,
                config.platform_share_percent()
            );
        }

        config
    }

    /// Doctor share capped at 100, for configs built without `from_env`.
    pub fn effective_doctor_share_percent(&self) -> u32 {
        self.doctor_share_percent.min(100)
    }

    pub fn platform_share_percent(&self) -> u32 {
        100u32.saturating_sub(self.doctor_share_percent)
    }

    pub fn is_default_split(&self) -> bool {
        self.doctor_share_percent == DEFAULT_DOCTOR_SHARE_PERCENT
    }
}

fn parse_share_percent(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|percent| *percent <= 100)
}
