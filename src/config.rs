//! Editor configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;

use crate::consts::DEFAULT_EMOJI_FONT_SIZE;

pub const ENV_FONT_SIZE: &str = "EMOJI_ART_FONT_SIZE";
pub const ENV_FIT_ON_LOAD: &str = "EMOJI_ART_FIT_ON_LOAD";

/// Error returned by [`EditorConfig::from_env`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive number, got '{value}'")]
    InvalidFontSize { var: &'static str, value: String },
    #[error("{var} must be one of true/false/1/0, got '{value}'")]
    InvalidFlag { var: &'static str, value: String },
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// On-screen font size of a dropped emoji, independent of zoom.
    pub default_emoji_font_size: f64,
    /// Fit a newly loaded background into the viewport.
    pub fit_on_load: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { default_emoji_font_size: DEFAULT_EMOJI_FONT_SIZE, fit_on_load: false }
    }
}

impl EditorConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `EMOJI_ART_FONT_SIZE`: default 40
    /// - `EMOJI_ART_FIT_ON_LOAD`: `true`/`false`/`1`/`0`, default false
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed or not
    /// valid unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let font_size = env_value(ENV_FONT_SIZE, std::env::var(ENV_FONT_SIZE))?;
        let fit_on_load = env_value(ENV_FIT_ON_LOAD, std::env::var(ENV_FIT_ON_LOAD))?;
        Self::from_lookup(|key| match key {
            ENV_FONT_SIZE => font_size.clone(),
            ENV_FIT_ON_LOAD => fit_on_load.clone(),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let default_emoji_font_size = match get(ENV_FONT_SIZE) {
            Some(raw) => parse_font_size(&raw)?,
            None => defaults.default_emoji_font_size,
        };
        let fit_on_load = match get(ENV_FIT_ON_LOAD) {
            Some(raw) => parse_flag(ENV_FIT_ON_LOAD, &raw)?,
            None => defaults.fit_on_load,
        };
        Ok(Self { default_emoji_font_size, fit_on_load })
    }
}

/// Treat an unset variable as absent; reject one that is set but not unicode.
fn env_value(var: &'static str, value: Result<String, VarError>) -> Result<Option<String>, ConfigError> {
    match value {
        Ok(raw) => Ok(Some(raw)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
    }
}

fn parse_font_size(raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(size) if size.is_finite() && size > 0.0 => Ok(size),
        _ => Err(ConfigError::InvalidFontSize { var: ENV_FONT_SIZE, value: raw.to_string() }),
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value: raw.to_string() }),
    }
}
