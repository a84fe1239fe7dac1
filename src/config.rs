// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Environment-driven defaults for profile location and logging.
// Author: Lukas Bower

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable overriding the default profile path.
pub const PROFILE_ENV: &str = "ACCESSPROF_PROFILE";
/// Environment variable overriding the default log filter.
pub const LOG_ENV: &str = "ACCESSPROF_LOG";

pub const DEFAULT_PROFILE_PATH: &str = "/etc/accessprof/profile";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime configurable profile settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileConfig {
    pub profile_path: PathBuf,
    pub log_filter: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            profile_path: env::var(PROFILE_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_PROFILE_PATH)),
            log_filter: env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_owned()),
        }
    }
}

/// Errors produced by profile config operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("profile path must not be empty")]
    EmptyProfilePath,
    #[error("log filter must not be empty")]
    EmptyLogFilter,
}

impl ProfileConfig {
    /// Replace the profile path when one was given explicitly.
    #[must_use]
    pub fn with_profile_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.profile_path = path;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyProfilePath);
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }
        Ok(())
    }
}
