//! Length bounds applied by the username and password rules.
//!
//! Bounds are read from an optional YAML file, then overridden by
//! environment variables. Anything left unset keeps its default.

use std::{
    env,
    fs,
    io::ErrorKind::NotFound,
    ops::RangeInclusive,
    path::Path,
};

use log::info;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_USERNAME_MIN_LENGTH: usize = 3;
pub const DEFAULT_USERNAME_MAX_LENGTH: usize = 64;
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;
pub const DEFAULT_PASSWORD_MAX_LENGTH: usize = 64;

pub const ENV_USERNAME_MIN_LENGTH: &str = "SIGNUP_USERNAME_MIN_LENGTH";
pub const ENV_USERNAME_MAX_LENGTH: &str = "SIGNUP_USERNAME_MAX_LENGTH";
pub const ENV_PASSWORD_MIN_LENGTH: &str = "SIGNUP_PASSWORD_MIN_LENGTH";
pub const ENV_PASSWORD_MAX_LENGTH: &str = "SIGNUP_PASSWORD_MAX_LENGTH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("{option} must be at least 1")]
    ZeroMinimum { option: &'static str },

    #[error("{min_option} ({min}) is greater than {max_option} ({max})")]
    InvertedBounds {
        min_option: &'static str,
        min: usize,
        max_option: &'static str,
        max: usize,
    },
}

/// Recognized options, spelled as in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidationConfig {
    pub username_min_length: usize,
    pub username_max_length: usize,
    pub password_min_length: usize,
    pub password_max_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            username_min_length: DEFAULT_USERNAME_MIN_LENGTH,
            username_max_length: DEFAULT_USERNAME_MAX_LENGTH,
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            password_max_length: DEFAULT_PASSWORD_MAX_LENGTH,
        }
    }
}

impl ValidationConfig {
    /// Loads the config file, or the defaults when the file does not exist
    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(not_found) if not_found.kind() == NotFound => {
                info!("Config file {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(other) => Err(other.into()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies the `SIGNUP_*` environment variables on top of `self`
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let options = [
            (ENV_USERNAME_MIN_LENGTH, &mut self.username_min_length),
            (ENV_USERNAME_MAX_LENGTH, &mut self.username_max_length),
            (ENV_PASSWORD_MIN_LENGTH, &mut self.password_min_length),
            (ENV_PASSWORD_MAX_LENGTH, &mut self.password_max_length),
        ];

        for (key, slot) in options {
            if let Some(value) = lookup(key) {
                *slot = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnv { key, value })?;
            }
        }

        self.validate()?;
        Ok(self)
    }

    pub fn with_username_length(mut self, min: usize, max: usize) -> Self {
        self.username_min_length = min;
        self.username_max_length = max;
        self
    }

    pub fn with_password_length(mut self, min: usize, max: usize) -> Self {
        self.password_min_length = min;
        self.password_max_length = max;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_bounds(
            ("usernameMinLength", self.username_min_length),
            ("usernameMaxLength", self.username_max_length),
        )?;
        check_bounds(
            ("passwordMinLength", self.password_min_length),
            ("passwordMaxLength", self.password_max_length),
        )
    }

    pub fn username_length(&self) -> RangeInclusive<usize> {
        self.username_min_length..=self.username_max_length
    }

    pub fn password_length(&self) -> RangeInclusive<usize> {
        self.password_min_length..=self.password_max_length
    }
}

fn check_bounds(
    (min_option, min): (&'static str, usize),
    (max_option, max): (&'static str, usize),
) -> Result<(), ConfigError> {
    if min == 0 {
        return Err(ConfigError::ZeroMinimum { option: min_option });
    }
    if min > max {
        return Err(ConfigError::InvertedBounds {
            min_option,
            min,
            max_option,
            max,
        });
    }
    Ok(())
}
