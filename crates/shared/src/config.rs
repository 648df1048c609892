//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Time-entry validation policy.
    #[serde(default)]
    pub validation: ValidationPolicy,
    /// Cost-reporting configuration.
    #[serde(default)]
    pub costing: CostingConfig,
}

/// Tunables for the time-entry validation rules.
///
/// Defaults match the business rules: a 24-hour edit grace window,
/// a 90-day backdating window, an 8-hour standard day, and a hard
/// 24-hour daily cap.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationPolicy {
    /// Hours after creation during which a worker may still edit or
    /// delete their own entry.
    #[serde(default = "default_edit_window_hours")]
    pub edit_window_hours: i64,
    /// How many days in the past an entry date may lie.
    #[serde(default = "default_backdate_window_days")]
    pub backdate_window_days: i64,
    /// Standard daily hours; exceeding this produces a warning, not an error.
    /// Used when a user has no configured target of their own.
    #[serde(default = "default_daily_target_hours")]
    pub default_daily_target_hours: Decimal,
    /// Hard cap on total hours per user per day.
    #[serde(default = "default_daily_cap_hours")]
    pub daily_cap_hours: Decimal,
    /// Minute-of-day where entries without recorded clock times are
    /// assumed to start for overlap purposes (540 = 09:00).
    #[serde(default = "default_placeholder_start_minute")]
    pub placeholder_start_minute: u32,
    /// Whether a rejected entry may be resubmitted by its owner.
    #[serde(default = "default_allow_resubmit")]
    pub allow_resubmit_after_rejection: bool,
}

fn default_edit_window_hours() -> i64 {
    24
}

fn default_backdate_window_days() -> i64 {
    90
}

fn default_daily_target_hours() -> Decimal {
    Decimal::from(8)
}

fn default_daily_cap_hours() -> Decimal {
    Decimal::from(24)
}

fn default_placeholder_start_minute() -> u32 {
    540 // 09:00
}

fn default_allow_resubmit() -> bool {
    true
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            edit_window_hours: default_edit_window_hours(),
            backdate_window_days: default_backdate_window_days(),
            default_daily_target_hours: default_daily_target_hours(),
            daily_cap_hours: default_daily_cap_hours(),
            placeholder_start_minute: default_placeholder_start_minute(),
            allow_resubmit_after_rejection: default_allow_resubmit(),
        }
    }
}

/// Cost-reporting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CostingConfig {
    /// Default GG (gastos generales) overhead percentage applied on top
    /// of direct labor cost when a project has no override.
    #[serde(default = "default_gg_percent")]
    pub default_gg_percent: Decimal,
}

fn default_gg_percent() -> Decimal {
    Decimal::from(15)
}

impl Default for CostingConfig {
    fn default() -> Self {
        Self {
            default_gg_percent: default_gg_percent(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TEMPO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
