//! Site-level display settings.
//!
//! # Responsibility
//! - Hold the knobs the page utilities read (display zone, toast timing,
//!   container ids, fixed UI strings).
//! - Load and validate them from a JSON document.
//!
//! # Invariants
//! - `SiteConfig::default()` always passes `validate()`.
//! - Unknown JSON fields are rejected instead of silently ignored.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Largest UTC offset accepted for the display zone (±14h).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Time zone used when rendering dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// Zone of the host running the code.
    Local,
    /// Fixed offset from UTC.
    Fixed(FixedOffset),
}

/// Page utility configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Display zone offset in minutes; `None` uses the host zone.
    pub utc_offset_minutes: Option<i32>,
    /// Page assumed when the URL path has no last segment.
    pub default_page: String,
    /// Element id of the shared toast container.
    pub toast_container_id: String,
    /// How long a toast stays fully visible.
    pub toast_display_ms: u64,
    /// Exit animation length before the toast node is removed.
    pub toast_exit_ms: u64,
    pub loading_message: String,
    pub export_success_message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: None,
            default_page: "index.html".to_string(),
            toast_container_id: "toast-container".to_string(),
            toast_display_ms: 3_000,
            toast_exit_ms: 300,
            loading_message: "正在加载数据...".to_string(),
            export_success_message: "导出成功！".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses and validates a JSON config document.
    ///
    /// Missing fields take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(offset) = self.utc_offset_minutes {
            if offset.abs() > MAX_UTC_OFFSET_MINUTES {
                return Err(ConfigError::InvalidUtcOffset(offset));
            }
        }
        for (field, value) in [
            ("default_page", &self.default_page),
            ("toast_container_id", &self.toast_container_id),
            ("loading_message", &self.loading_message),
            ("export_success_message", &self.export_success_message),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field));
            }
        }
        if self.toast_display_ms == 0 {
            return Err(ConfigError::ZeroDuration("toast_display_ms"));
        }
        if self.toast_exit_ms == 0 {
            return Err(ConfigError::ZeroDuration("toast_exit_ms"));
        }
        Ok(())
    }

    /// Resolves the configured display zone.
    pub fn display_zone(&self) -> DisplayZone {
        match self
            .utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
        {
            Some(offset) => DisplayZone::Fixed(offset),
            None => DisplayZone::Local,
        }
    }
}

/// Config load/validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    EmptyField(&'static str),
    ZeroDuration(&'static str),
    InvalidUtcOffset(i32),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid site config: {message}"),
            Self::EmptyField(field) => write!(f, "site config field `{field}` must not be empty"),
            Self::ZeroDuration(field) => {
                write!(f, "site config field `{field}` must be greater than zero")
            }
            Self::InvalidUtcOffset(minutes) => write!(
                f,
                "utc_offset_minutes {minutes} is outside ±{MAX_UTC_OFFSET_MINUTES}"
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DisplayZone, SiteConfig};
    use chrono::FixedOffset;

    #[test]
    fn default_config_is_valid() {
        let config = SiteConfig::default();
        config.validate().expect("defaults must validate");
        assert_eq!(config.display_zone(), DisplayZone::Local);
    }

    #[test]
    fn fixed_offset_resolves_to_display_zone() {
        let config = SiteConfig {
            utc_offset_minutes: Some(480),
            ..SiteConfig::default()
        };
        assert_eq!(
            config.display_zone(),
            DisplayZone::Fixed(FixedOffset::east_opt(8 * 3600).expect("offset"))
        );
    }

    #[test]
    fn validate_rejects_blank_container_id() {
        let config = SiteConfig {
            toast_container_id: "  ".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(
            config.validate().expect_err("blank id must fail"),
            ConfigError::EmptyField("toast_container_id")
        );
    }
}
