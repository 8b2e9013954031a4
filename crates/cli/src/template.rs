// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracking URL templates.
//!
//! A template is a URL containing exactly one `%s` placeholder. `%%` stands
//! for a literal percent sign; any other `%` sequence is rejected when the
//! template is parsed, so rendering can never fail.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left untouched when encoding a tracking number (RFC 3986 unreserved).
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A parsed URL template, split around its placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    source: String,
    prefix: String,
    suffix: String,
}

/// Error while parsing a URL template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("url template has no `%s` placeholder")]
    MissingPlaceholder,

    #[error("url template has more than one `%s` placeholder")]
    MultiplePlaceholders,

    #[error("url template has a stray `%` at byte {0} (use `%%` for a literal percent)")]
    StrayPercent(usize),
}

impl UrlTemplate {
    /// Parse and validate a template.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut prefix = String::with_capacity(template.len());
        let mut suffix = String::new();
        let mut placeholder_seen = false;

        let mut chars = template.char_indices();
        while let Some((offset, c)) = chars.next() {
            let out = if placeholder_seen {
                &mut suffix
            } else {
                &mut prefix
            };

            if c != '%' {
                out.push(c);
                continue;
            }

            match chars.next() {
                Some((_, 's')) if placeholder_seen => {
                    return Err(TemplateError::MultiplePlaceholders);
                }
                Some((_, 's')) => placeholder_seen = true,
                Some((_, '%')) => out.push('%'),
                _ => return Err(TemplateError::StrayPercent(offset)),
            }
        }

        if !placeholder_seen {
            return Err(TemplateError::MissingPlaceholder);
        }

        Ok(Self {
            source: template.to_string(),
            prefix,
            suffix,
        })
    }

    /// Build the tracking URL for a tracking number.
    ///
    /// The number is percent-encoded: every byte outside `A-Z a-z 0-9 - _ . ~`
    /// becomes `%XX`, so spaces are written as `%20`.
    pub fn render(&self, tracking_number: &str) -> String {
        let mut url =
            String::with_capacity(self.prefix.len() + self.suffix.len() + tracking_number.len());
        url.push_str(&self.prefix);
        url.extend(utf8_percent_encode(tracking_number, UNRESERVED));
        url.push_str(&self.suffix);
        url
    }

    /// The template as originally written.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
