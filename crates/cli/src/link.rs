// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Anchor markup for linked tracking numbers.
//!
//! Attributes are kept in an ordered map. Merging keeps the position of a key
//! that is already present and replaces its value; new keys are appended.
//! The computed `href` is inserted first, so it stays first even when a
//! caller overrides it.

/// Ordered HTML attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkAttributes {
    entries: Vec<(String, String)>,
}

impl LinkAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, returning the previous value if the key existed.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Merge `other` on top of `self`; on duplicate keys `other` wins.
    pub fn merge(&mut self, other: &LinkAttributes) {
        for (name, value) in &other.entries {
            self.insert(name.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `name="value"` pairs separated by single spaces.
    ///
    /// Values are written verbatim; escaping them is the caller's job.
    pub fn render(&self) -> String {
        let mut html = String::new();
        for (name, value) in &self.entries {
            html.push(' ');
            html.push_str(name);
            html.push_str("=\"");
            html.push_str(value);
            html.push('"');
        }
        html.trim().to_string()
    }
}

impl<K, V> FromIterator<(K, V)> for LinkAttributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = LinkAttributes::new();
        attributes.extend(iter);
        attributes
    }
}

impl<K, V> Extend<(K, V)> for LinkAttributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

/// Render `<a href="..." ...>text</a>`.
///
/// `href` comes first; `attributes` are merged on top of it. The link text is
/// written unescaped.
pub fn render_anchor(href: &str, text: &str, attributes: &LinkAttributes) -> String {
    let mut merged = LinkAttributes::new().with("href", href);
    merged.merge(attributes);
    format!("<a {}>{}</a>", merged.render(), text)
}

#[cfg(test)]
#[path = "link_tests.rs"]
mod tests;
