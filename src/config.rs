//! Page configuration.
//!
//! Every timing the handlers use has a default in [`crate::consts`]. A page can
//! override any subset by embedding a JSON object in
//! `<script type="application/json" id="portfolio-config">`; missing fields keep
//! their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    FLIP_ORIENTATION_SETTLE_MS, FLIP_RESIZE_SETTLE_MS, FLIP_TRANSITION_MS, LOADING_DURATION_MS,
    LOADING_FADE_DELAY_MS, LOADING_HIDE_DELAY_MS, LOADING_TICK_MS, NAV_LINK_RECHECK_MS, NAV_SCROLL_THRESHOLD_PX,
    SKILL_BAR_TICK_MS, SKILL_REVEAL_MARGIN_PX, THEME_BACKGROUND_RESET_MS,
};

/// Error returned by [`PageConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The embedded config is not valid JSON for [`PageConfig`].
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A duration or tick period that must be positive was zero.
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
}

/// Loading screen timings, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingTimings {
    pub tick_ms: u32,
    pub duration_ms: u32,
    pub fade_delay_ms: u32,
    pub hide_delay_ms: u32,
}

impl Default for LoadingTimings {
    fn default() -> Self {
        Self {
            tick_ms: LOADING_TICK_MS,
            duration_ms: LOADING_DURATION_MS,
            fade_delay_ms: LOADING_FADE_DELAY_MS,
            hide_delay_ms: LOADING_HIDE_DELAY_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavTimings {
    pub threshold_px: f64,
    pub link_recheck_ms: u32,
}

impl Default for NavTimings {
    fn default() -> Self {
        Self { threshold_px: NAV_SCROLL_THRESHOLD_PX, link_recheck_ms: NAV_LINK_RECHECK_MS }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTimings {
    pub background_reset_ms: u32,
}

impl Default for ThemeTimings {
    fn default() -> Self {
        Self { background_reset_ms: THEME_BACKGROUND_RESET_MS }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillTimings {
    pub reveal_margin_px: f64,
    pub bar_tick_ms: u32,
}

impl Default for SkillTimings {
    fn default() -> Self {
        Self { reveal_margin_px: SKILL_REVEAL_MARGIN_PX, bar_tick_ms: SKILL_BAR_TICK_MS }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipTimings {
    pub transition_ms: u32,
    pub resize_settle_ms: u32,
    pub orientation_settle_ms: u32,
}

impl Default for FlipTimings {
    fn default() -> Self {
        Self {
            transition_ms: FLIP_TRANSITION_MS,
            resize_settle_ms: FLIP_RESIZE_SETTLE_MS,
            orientation_settle_ms: FLIP_ORIENTATION_SETTLE_MS,
        }
    }
}

/// All tunables for the page, grouped by handler.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Console log level name (`"debug"`, `"info"`, ...). Defaults to info.
    pub log_level: Option<String>,
    pub loading: LoadingTimings,
    pub nav: NavTimings,
    pub theme: ThemeTimings,
    pub skills: SkillTimings,
    pub flip: FlipTimings,
}

impl PageConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or wrongly typed
    /// fields and [`ConfigError::ZeroDuration`] when a period is zero.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject periods that would divide by zero or spin a timer at 0 ms.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDuration`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("loading.tick_ms", self.loading.tick_ms),
            ("loading.duration_ms", self.loading.duration_ms),
            ("skills.bar_tick_ms", self.skills.bar_tick_ms),
        ];
        for (field, value) in checks {
            if value == 0 {
                return Err(ConfigError::ZeroDuration { field });
            }
        }
        Ok(())
    }

    /// Console log level, falling back to `Info` for absent or unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        let Some(name) = self.log_level.as_deref() else {
            return log::Level::Info;
        };
        log::Level::from_str(name.trim()).unwrap_or(log::Level::Info)
    }
}
