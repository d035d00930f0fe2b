// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker connection configuration.
//!
//! Settings resolve flag > environment (handled by clap) > user config
//! file > defaults. The file is TOML at `<config-dir>/refmark/config.toml`
//! and may hold any subset of the settings.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::cli::ConnectionArgs;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "refmark";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_PORT: u16 = 443;

/// Resolved tracker connection settings.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub insecure: bool,
}

/// Partial settings as stored in the config file.
#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
    user: Option<String>,
    password: Option<String>,
    insecure: Option<bool>,
}

impl ConnectionConfig {
    /// Resolves connection settings from CLI/environment values over the
    /// user config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSetting`] when host, user, or password is
    /// absent everywhere.
    pub fn resolve(args: &ConnectionArgs) -> Result<Self> {
        let file = load_file_config()?.unwrap_or_default();
        Self::merge(args, file)
    }

    fn merge(args: &ConnectionArgs, file: FileConfig) -> Result<Self> {
        let host = args
            .host
            .clone()
            .or(file.host)
            .ok_or(Error::MissingSetting {
                setting: "host",
                flag: "--host",
                env: "REFMARK_HOST",
            })?;
        let user = args
            .user
            .clone()
            .or(file.user)
            .ok_or(Error::MissingSetting {
                setting: "user",
                flag: "--user",
                env: "REFMARK_USER",
            })?;
        let password = args
            .password
            .clone()
            .or(file.password)
            .ok_or(Error::MissingSetting {
                setting: "password",
                flag: "--password",
                env: "REFMARK_PASSWORD",
            })?;
        Ok(ConnectionConfig {
            host,
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            user,
            password,
            insecure: args.insecure || file.insecure.unwrap_or(false),
        })
    }

    /// Base URL for REST requests. A host that already carries a scheme is
    /// used as-is; otherwise the tracker is assumed to speak https.
    pub fn base_url(&self) -> String {
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            format!("{}:{}", self.host, self.port)
        } else {
            format!("https://{}:{}", self.host, self.port)
        }
    }
}

/// Path of the user-level config file, if a config directory exists.
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn load_file_config() -> Result<Option<FileConfig>> {
    let Some(path) = config_file_path() else {
        return Ok(None);
    };
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
    let config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
    Ok(Some(config))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
