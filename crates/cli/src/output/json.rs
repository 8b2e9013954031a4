// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use super::Lookup;
use crate::carrier::{Carrier, CarrierRegistry};

/// A lookup for JSON output. Unmatched inputs carry null carrier and url.
#[derive(Debug, Serialize)]
pub struct LookupOutput<'a> {
    pub tracking_number: &'a str,
    pub carrier: Option<&'a str>,
    pub url: Option<&'a str>,
}

impl<'a> From<&'a Lookup> for LookupOutput<'a> {
    fn from(lookup: &'a Lookup) -> Self {
        Self {
            tracking_number: &lookup.tracking_number,
            carrier: lookup.matched.as_ref().map(|m| m.carrier.as_str()),
            url: lookup.matched.as_ref().map(|m| m.url.as_str()),
        }
    }
}

/// A carrier for JSON output.
#[derive(Debug, Serialize)]
pub struct CarrierOutput<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub patterns: Vec<&'a str>,
    pub excluded_prefixes: &'a [String],
}

impl<'a> From<&'a Carrier> for CarrierOutput<'a> {
    fn from(carrier: &'a Carrier) -> Self {
        Self {
            name: carrier.name(),
            url: carrier.url_template().as_str(),
            patterns: carrier.patterns().iter().map(|p| p.as_str()).collect(),
            excluded_prefixes: carrier
                .patterns()
                .first()
                .map(|p| p.excluded_prefixes())
                .unwrap_or_default(),
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write lookups as a JSON array.
    pub fn write_lookups(&mut self, lookups: &[Lookup]) -> std::io::Result<()> {
        let output: Vec<LookupOutput<'_>> = lookups.iter().map(Into::into).collect();
        self.write_value(&output)
    }

    /// Write the carrier table as a JSON array.
    pub fn write_carriers(&mut self, registry: &CarrierRegistry) -> std::io::Result<()> {
        let output: Vec<CarrierOutput<'_>> = registry.iter().map(Into::into).collect();
        self.write_value(&output)
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
