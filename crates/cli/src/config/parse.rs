// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.
//!
//! Helpers return a plain message on invalid values; the caller attaches the
//! config path. Unknown keys are collected as dotted paths.

use std::path::Path;

use super::{CarriersConfig, LinkConfig};
use crate::carrier::CarrierDefinition;
use crate::link::LinkAttributes;

const KNOWN_LINK_KEYS: &[&str] = &["attributes"];
const KNOWN_CARRIERS_KEYS: &[&str] = &["builtin", "custom"];
const KNOWN_CARRIER_KEYS: &[&str] = &["name", "url", "patterns", "excluded_prefixes"];

/// Warn about an unrecognized config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "linkify-tracking: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Record keys of `table` not in `known`, prefixed with `section`.
fn collect_unknown(table: &toml::Table, known: &[&str], section: &str, unknown: &mut Vec<String>) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            unknown.push(format!("{}.{}", section, key));
        }
    }
}

/// Parse the `[link]` section.
pub(super) fn parse_link_config(
    value: Option<&toml::Value>,
    unknown: &mut Vec<String>,
) -> Result<LinkConfig, String> {
    let table = match value {
        None => return Ok(LinkConfig::default()),
        Some(toml::Value::Table(t)) => t,
        Some(_) => return Err("`link` must be a table".to_string()),
    };
    collect_unknown(table, KNOWN_LINK_KEYS, "link", unknown);

    let attributes = match table.get("attributes") {
        None => LinkAttributes::new(),
        Some(toml::Value::Table(t)) => t
            .iter()
            .map(|(name, value)| match value.as_str() {
                Some(s) => Ok((name.clone(), s.to_string())),
                None => Err(format!("`link.attributes.{}` must be a string", name)),
            })
            .collect::<Result<LinkAttributes, String>>()?,
        Some(_) => return Err("`link.attributes` must be a table".to_string()),
    };

    Ok(LinkConfig { attributes })
}

/// Parse the `[carriers]` section.
pub(super) fn parse_carriers_config(
    value: Option<&toml::Value>,
    unknown: &mut Vec<String>,
) -> Result<CarriersConfig, String> {
    let table = match value {
        None => return Ok(CarriersConfig::default()),
        Some(toml::Value::Table(t)) => t,
        Some(_) => return Err("`carriers` must be a table".to_string()),
    };
    collect_unknown(table, KNOWN_CARRIERS_KEYS, "carriers", unknown);

    let builtin = match table.get("builtin") {
        None => true,
        Some(toml::Value::Boolean(b)) => *b,
        Some(_) => return Err("`carriers.builtin` must be a boolean".to_string()),
    };

    let custom = match table.get("custom") {
        None => Vec::new(),
        Some(toml::Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| parse_carrier(index, entry, unknown))
            .collect::<Result<Vec<_>, String>>()?,
        Some(_) => return Err("`carriers.custom` must be an array of tables".to_string()),
    };

    Ok(CarriersConfig { builtin, custom })
}

/// Parse one `[[carriers.custom]]` entry.
fn parse_carrier(
    index: usize,
    entry: &toml::Value,
    unknown: &mut Vec<String>,
) -> Result<CarrierDefinition, String> {
    let section = format!("carriers.custom[{}]", index);
    let toml::Value::Table(table) = entry else {
        return Err(format!("`{}` must be a table", section));
    };
    collect_unknown(table, KNOWN_CARRIER_KEYS, &section, unknown);

    let known: toml::Table = table
        .iter()
        .filter(|(key, _)| KNOWN_CARRIER_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    toml::Value::Table(known)
        .try_into::<CarrierDefinition>()
        .map_err(|e| format!("`{}`: {}", section, e))
}
