// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles linkify-tracking.toml location, parsing with version validation,
//! and unknown key warnings.

mod parse;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::carrier::{CarrierDefinition, CarrierRegistry};
use crate::error::{Error, Result};
use crate::link::LinkAttributes;
use crate::linkify::{Linkifier, LinkifyOptions};
use parse::{parse_carriers_config, parse_link_config, warn_unknown_key};

/// Supported config file version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name looked up by [`locate`].
pub const CONFIG_FILE_NAME: &str = "linkify-tracking.toml";

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "link", "carriers"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    link: Option<toml::Value>,

    #[serde(default)]
    carriers: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Generated link settings.
    pub link: LinkConfig,

    /// Carrier table settings.
    pub carriers: CarriersConfig,
}

/// `[link]` section.
#[derive(Debug, Clone, Default)]
pub struct LinkConfig {
    /// Attributes added to every anchor, after `href`.
    pub attributes: LinkAttributes,
}

/// `[carriers]` section.
#[derive(Debug, Clone)]
pub struct CarriersConfig {
    /// Include the built-in carriers ahead of any custom ones.
    pub builtin: bool,

    /// Additional carriers, lower precedence than the built-ins.
    pub custom: Vec<CarrierDefinition>,
}

impl Default for CarriersConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            custom: Vec::new(),
        }
    }
}

impl Config {
    /// Build the carrier registry this config describes.
    pub fn registry(&self) -> Result<CarrierRegistry> {
        let base = if self.carriers.builtin {
            CarrierRegistry::builtin().clone()
        } else {
            CarrierRegistry::default()
        };
        base.extended(self.carriers.custom.iter().cloned())
    }

    /// Build a linkifier with this config's carriers and attributes.
    pub fn linkifier(&self) -> Result<Linkifier> {
        Ok(Linkifier::with_registry(
            self.registry()?,
            LinkifyOptions {
                link_attributes: self.link.attributes.clone(),
            },
        ))
    }
}

/// Pick the config file for a run.
///
/// An explicit path (`-C` or `LINKIFY_TRACKING_CONFIG`) must exist. Otherwise
/// the nearest linkify-tracking.toml in `cwd` or an ancestor is used; the
/// search does not leave the enclosing git repository.
pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(Error::Config {
                message: format!("config file not found: {}", path.display()),
                path: Some(path.to_path_buf()),
            });
        }
        return Ok(Some(path.to_path_buf()));
    }

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    Ok(None)
}

/// Load and validate config from a file path (unknown keys are errors).
pub fn load(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse_with_warnings(&content, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let (config, unknown_keys) = parse_lenient(content, path)?;
    match unknown_keys.first() {
        Some(key) => Err(Error::Config {
            message: format!("unrecognized field `{}`", key),
            path: Some(path.to_path_buf()),
        }),
        None => Ok(config),
    }
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let (config, unknown_keys) = parse_lenient(content, path)?;
    for key in &unknown_keys {
        warn_unknown_key(path, key);
    }
    Ok(config)
}

/// Parse config, collecting dotted paths of unknown keys.
fn parse_lenient(content: &str, path: &Path) -> Result<(Config, Vec<String>)> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    // First check version
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})\n  Upgrade linkify-tracking to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let mut unknown_keys: Vec<String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();

    let link = parse_link_config(flexible.link.as_ref(), &mut unknown_keys)
        .map_err(config_error)?;
    let carriers = parse_carriers_config(flexible.carriers.as_ref(), &mut unknown_keys)
        .map_err(config_error)?;

    tracing::debug!(
        "config {}: {} link attributes, {} custom carriers",
        path.display(),
        link.attributes.len(),
        carriers.custom.len()
    );

    Ok((
        Config {
            version,
            link,
            carriers,
        },
        unknown_keys,
    ))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
