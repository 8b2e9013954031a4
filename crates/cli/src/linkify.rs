// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracking number classification and linkification.
//!
//! Two strategies over the same carrier registry:
//! - [`Linkifier::classify`] accepts a string only if a pattern matches all
//!   of it.
//! - [`Linkifier::linkify`] replaces matches anywhere in free text with
//!   anchors, one carrier pattern at a time in registry order.
//!
//! Anchor elements, whether already present in the input or produced by an
//! earlier pass, are never scanned again. An earlier carrier's link therefore
//! cannot be re-wrapped by a later carrier, and linkifying the output a
//! second time changes nothing.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::carrier::{Carrier, CarrierRegistry};
use crate::link::{LinkAttributes, render_anchor};
use crate::pattern::TrackingPattern;

/// An `<a ...>...</a>` element.
#[allow(clippy::expect_used)]
static ANCHOR_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b[^>]*>.*?</a\s*>").expect("valid regex"));

/// Result of classifying a tracking number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarrierMatch {
    /// Carrier display name.
    pub carrier: String,
    /// Tracking URL with the number percent-encoded.
    pub url: String,
}

/// Construction-time options.
#[derive(Debug, Clone, Default)]
pub struct LinkifyOptions {
    /// Extra attributes put on every generated anchor, after `href`.
    pub link_attributes: LinkAttributes,
}

/// Classifies tracking numbers and links them in text.
///
/// Every method is a pure function of the registry and its arguments, so a
/// `Linkifier` can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct Linkifier {
    registry: CarrierRegistry,
    link_attributes: LinkAttributes,
}

impl Default for Linkifier {
    fn default() -> Self {
        Self::new(LinkifyOptions::default())
    }
}

/// A run of content: plain text still open to matching, or finished markup.
enum Segment {
    Text(String),
    Markup(String),
}

impl Linkifier {
    /// Create a linkifier over the built-in carriers.
    pub fn new(options: LinkifyOptions) -> Self {
        Self::with_registry(CarrierRegistry::builtin().clone(), options)
    }

    /// Create a linkifier over a custom registry.
    pub fn with_registry(registry: CarrierRegistry, options: LinkifyOptions) -> Self {
        Self {
            registry,
            link_attributes: options.link_attributes,
        }
    }

    pub fn registry(&self) -> &CarrierRegistry {
        &self.registry
    }

    pub fn link_attributes(&self) -> &LinkAttributes {
        &self.link_attributes
    }

    /// Identify the carrier for a single tracking number.
    ///
    /// Carriers are tried in registry order and each carrier's patterns in
    /// listed order. The first pattern whose leftmost match is the entire
    /// input wins; surrounding text of any kind means no match.
    pub fn classify(&self, tracking_number: &str) -> Option<CarrierMatch> {
        for carrier in &self.registry {
            for pattern in carrier.patterns() {
                if !pattern.matches_whole(tracking_number) {
                    continue;
                }

                tracing::trace!("classified {:?} as {}", tracking_number, carrier.name());
                return Some(CarrierMatch {
                    carrier: carrier.name().to_string(),
                    url: carrier.tracking_url(tracking_number),
                });
            }
        }

        tracing::trace!("no carrier for {:?}", tracking_number);
        None
    }

    /// Tracking URL for a single tracking number.
    pub fn get_link_url(&self, tracking_number: &str) -> Option<String> {
        self.classify(tracking_number).map(|m| m.url)
    }

    /// Replace every tracking number in `content` with a link.
    pub fn linkify(&self, content: &str) -> String {
        self.linkify_with_attributes(content, &self.link_attributes)
    }

    /// Like [`linkify`](Self::linkify), with `extra` attributes merged on
    /// top of the construction-time ones for this call only.
    pub fn linkify_with(&self, content: &str, extra: &LinkAttributes) -> String {
        let mut attributes = self.link_attributes.clone();
        attributes.merge(extra);
        self.linkify_with_attributes(content, &attributes)
    }

    fn linkify_with_attributes(&self, content: &str, attributes: &LinkAttributes) -> String {
        let mut segments = split_anchors(content);
        let mut linked = 0usize;

        for carrier in &self.registry {
            for pattern in carrier.patterns() {
                let mut next = Vec::with_capacity(segments.len());
                for segment in segments {
                    match segment {
                        Segment::Text(text) => {
                            linked += link_text(text, carrier, pattern, attributes, &mut next);
                        }
                        markup => next.push(markup),
                    }
                }
                segments = next;
            }
        }

        if linked > 0 {
            tracing::debug!("linked {} tracking numbers", linked);
        }

        let mut output = String::with_capacity(content.len());
        for segment in &segments {
            match segment {
                Segment::Text(s) | Segment::Markup(s) => output.push_str(s),
            }
        }
        output
    }
}

/// Split content into text and existing anchor elements.
fn split_anchors(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in ANCHOR_ELEMENT.find_iter(content) {
        if m.start() > last {
            segments.push(Segment::Text(content[last..m.start()].to_string()));
        }
        segments.push(Segment::Markup(m.as_str().to_string()));
        last = m.end();
    }
    if last < content.len() || segments.is_empty() {
        segments.push(Segment::Text(content[last..].to_string()));
    }
    segments
}

/// Link every match of `pattern` in `text`, pushing the pieces onto `out`.
///
/// Returns the number of links made.
fn link_text(
    text: String,
    carrier: &Carrier,
    pattern: &TrackingPattern,
    attributes: &LinkAttributes,
    out: &mut Vec<Segment>,
) -> usize {
    let matches = pattern.find_all(&text);
    if matches.is_empty() {
        out.push(Segment::Text(text));
        return 0;
    }

    let mut last = 0;
    for m in &matches {
        if m.start > last {
            out.push(Segment::Text(text[last..m.start].to_string()));
        }
        let number = &text[m.start..m.end];
        tracing::trace!("linking {:?} to {}", number, carrier.name());
        out.push(Segment::Markup(render_anchor(
            &carrier.tracking_url(number),
            number,
            attributes,
        )));
        last = m.end;
    }
    if last < text.len() {
        out.push(Segment::Text(text[last..].to_string()));
    }

    matches.len()
}

#[cfg(test)]
#[path = "linkify_tests.rs"]
mod tests;
