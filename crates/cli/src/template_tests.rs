// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[test]
fn renders_number_into_placeholder() {
    let template = UrlTemplate::parse("https://track.example/?n=%s&lang=en").unwrap();
    assert_eq!(
        template.render("1Z999AA10123456784"),
        "https://track.example/?n=1Z999AA10123456784&lang=en"
    );
}

#[test]
fn placeholder_at_end() {
    let template = UrlTemplate::parse("https://tools.usps.com/go/TrackConfirmAction?tLabels=%s").unwrap();
    assert_eq!(
        template.render("9400111899560123456789"),
        "https://tools.usps.com/go/TrackConfirmAction?tLabels=9400111899560123456789"
    );
}

#[parameterized(
    space = { "1234 5678 90", "1234%205678%2090" },
    dash = { "1234-5678-90", "1234-5678-90" },
    unreserved = { "a_b.c~d", "a_b.c~d" },
    ampersand = { "AB&CD", "AB%26CD" },
    slash = { "AB/CD", "AB%2FCD" },
    plus = { "AB+CD", "AB%2BCD" },
    non_ascii = { "é", "%C3%A9" },
)]
fn encodes_tracking_number(number: &str, encoded: &str) {
    let template = UrlTemplate::parse("%s").unwrap();
    assert_eq!(template.render(number), encoded);
}

#[test]
fn escaped_percent_is_literal() {
    let template = UrlTemplate::parse("https://x.example/100%%/?id=%s").unwrap();
    assert_eq!(template.render("42"), "https://x.example/100%/?id=42");
    assert_eq!(template.as_str(), "https://x.example/100%%/?id=%s");
}

#[parameterized(
    missing = { "https://x.example/track", TemplateError::MissingPlaceholder },
    only_escaped = { "https://x.example/%%s", TemplateError::MissingPlaceholder },
    twice = { "https://x.example/%s/%s", TemplateError::MultiplePlaceholders },
    stray = { "https://x.example/%d?n=%s", TemplateError::StrayPercent(18) },
    trailing = { "https://x.example/?n=%s%", TemplateError::StrayPercent(23) },
)]
fn rejects_malformed_templates(source: &str, expected: TemplateError) {
    assert_eq!(UrlTemplate::parse(source).unwrap_err(), expected);
}

#[test]
fn display_shows_source() {
    let template = UrlTemplate::parse("https://x.example/?n=%s").unwrap();
    assert_eq!(template.to_string(), "https://x.example/?n=%s");
}
