// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Carrier definitions and the ordered carrier registry.
//!
//! A registry is built once and read-only afterwards. The built-in registry
//! is compiled lazily on first use and shared for the life of the process.

pub mod builtin;

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pattern::TrackingPattern;
use crate::template::UrlTemplate;

pub use builtin::{BUILTIN_CARRIERS, BuiltinCarrier};

/// Uncompiled carrier definition, as written in code or config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierDefinition {
    /// Display name, e.g. "DHL".
    pub name: String,
    /// Tracking URL template with one `%s` placeholder.
    pub url: String,
    /// Recognition patterns, tried in order.
    pub patterns: Vec<String>,
    /// Match prefixes that are never this carrier's numbers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_prefixes: Vec<String>,
}

impl CarrierDefinition {
    /// Validate and compile this definition.
    pub fn compile(&self) -> Result<Carrier> {
        if self.name.trim().is_empty() {
            return Err(Error::Carrier("carrier name must not be empty".to_string()));
        }
        if self.patterns.is_empty() {
            return Err(Error::Carrier(format!(
                "carrier `{}` has no patterns",
                self.name
            )));
        }

        let url = UrlTemplate::parse(&self.url).map_err(|source| Error::Template {
            carrier: self.name.clone(),
            source,
        })?;

        let patterns = self
            .patterns
            .iter()
            .map(|pattern| {
                TrackingPattern::compile(pattern)
                    .and_then(|p| p.with_excluded_prefixes(self.excluded_prefixes.iter().cloned()))
                    .map_err(|source| Error::Pattern {
                        carrier: self.name.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Carrier {
            name: self.name.clone(),
            url,
            patterns,
        })
    }
}

/// A compiled carrier.
#[derive(Debug, Clone)]
pub struct Carrier {
    name: String,
    url: UrlTemplate,
    patterns: Vec<TrackingPattern>,
}

impl Carrier {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url_template(&self) -> &UrlTemplate {
        &self.url
    }

    pub fn patterns(&self) -> &[TrackingPattern] {
        &self.patterns
    }

    /// Tracking URL for a number recognized as this carrier's.
    pub fn tracking_url(&self, tracking_number: &str) -> String {
        self.url.render(tracking_number)
    }
}

#[allow(clippy::expect_used)]
static BUILTIN: LazyLock<CarrierRegistry> = LazyLock::new(|| {
    CarrierRegistry::new(BUILTIN_CARRIERS.iter().map(BuiltinCarrier::definition))
        .expect("built-in carriers compile")
});

/// Ordered, immutable list of carriers. Earlier carriers take precedence.
#[derive(Debug, Clone, Default)]
pub struct CarrierRegistry {
    carriers: Vec<Carrier>,
}

impl CarrierRegistry {
    /// The built-in registry: DHL, FedEx, UPS, USPS, Royal Mail.
    pub fn builtin() -> &'static CarrierRegistry {
        &BUILTIN
    }

    /// Compile a registry from definitions, in the given order.
    ///
    /// Fails on the first invalid definition or on a duplicate carrier name.
    pub fn new<I>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = CarrierDefinition>,
    {
        CarrierRegistry::default().extended(definitions)
    }

    /// Append carriers after the existing ones (lower precedence).
    pub fn extended<I>(mut self, definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = CarrierDefinition>,
    {
        let mut names: HashSet<String> = self.carriers.iter().map(|c| c.name.clone()).collect();
        for definition in definitions {
            if !names.insert(definition.name.clone()) {
                return Err(Error::Carrier(format!(
                    "duplicate carrier `{}`",
                    definition.name
                )));
            }
            self.carriers.push(definition.compile()?);
        }
        tracing::debug!("carrier registry: {} carriers", self.carriers.len());
        Ok(self)
    }

    pub fn carriers(&self) -> &[Carrier] {
        &self.carriers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Carrier> {
        self.carriers.iter()
    }

    /// Look up a carrier by display name.
    pub fn get(&self, name: &str) -> Option<&Carrier> {
        self.carriers.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }
}

impl<'a> IntoIterator for &'a CarrierRegistry {
    type Item = &'a Carrier;
    type IntoIter = std::slice::Iter<'a, Carrier>;

    fn into_iter(self) -> Self::IntoIter {
        self.carriers.iter()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
