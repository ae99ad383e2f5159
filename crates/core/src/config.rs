//! Configuration for the managed container.
//!
//! This module resolves the configuration file path, expanding shell
//! variables like `~`, and loads the optional YAML overrides for the
//! container name, image, published port and data directory.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::docker::ContainerRef;
use crate::error::{Error, Result};

/// Default path for the configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.stirling-dock/config.yml";

/// Container name the application manages unless overridden
pub const DEFAULT_CONTAINER_NAME: &str = "stirling-pdf";
/// Image reference used when the container is first created
pub const DEFAULT_IMAGE: &str = "stirlingtools/stirling-pdf:latest";
/// Host port published to the container
pub const DEFAULT_PORT: u16 = 8080;
/// Host directory bind-mounted into the container for its configuration
pub const DEFAULT_DATA_DIRECTORY: &str = "./stirling-data";

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Optional overrides for the managed container.
///
/// Every field falls back to the fixed default when absent, so an empty or
/// missing configuration file reproduces the stock Stirling PDF setup.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub container_name: Option<String>,
    pub image: Option<String>,
    pub port: Option<u16>,
    pub data_directory: Option<String>,
}

impl AppConfig {
    /// Freezes the configuration into the immutable container reference the
    /// rest of the application works with.
    pub fn container_ref(&self) -> ContainerRef {
        let data_directory = self
            .data_directory
            .clone()
            .unwrap_or_else(|| DEFAULT_DATA_DIRECTORY.to_string());

        ContainerRef {
            name: self
                .container_name
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTAINER_NAME.to_string()),
            image: self.image.clone().unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            data_directory: shellexpand::tilde(&data_directory).to_string(),
        }
    }
}

/// Loads the configuration file, falling back to defaults when it is absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or contains YAML
/// that does not match the expected structure.
pub fn load_config(config_path: &str) -> Result<AppConfig> {
    if !Path::exists(Path::new(config_path)) {
        return Ok(AppConfig::default());
    }

    let contents = fs::read_to_string(config_path).map_err(|e| {
        Error::io_error("config".to_string(), config_path.to_string(), e)
    })?;

    if contents.trim().is_empty() {
        return Ok(AppConfig::default());
    }

    serde_yaml::from_str(&contents).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })
}
