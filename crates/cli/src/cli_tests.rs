// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use clap::CommandFactory;
use yare::parameterized;

#[test]
fn command_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn parse_bare_invocation() {
    let cli = Cli::parse_from(["linkify-tracking"]);
    assert!(cli.command.is_none());
}

#[test]
fn parse_classify_with_numbers() {
    let cli = Cli::parse_from(["linkify-tracking", "classify", "1Z999AA10123456784", "123"]);
    if let Some(Command::Classify(args)) = cli.command {
        assert_eq!(args.numbers, vec!["1Z999AA10123456784", "123"]);
        assert_eq!(args.output, OutputFormat::Text);
    } else {
        panic!("expected classify command");
    }
}

#[test]
fn classify_requires_a_number() {
    assert!(Cli::try_parse_from(["linkify-tracking", "classify"]).is_err());
}

#[test]
fn parse_classify_json() {
    let cli = Cli::parse_from(["linkify-tracking", "classify", "-o", "json", "123"]);
    if let Some(Command::Classify(args)) = cli.command {
        assert_eq!(args.output, OutputFormat::Json);
    } else {
        panic!("expected classify command");
    }
}

#[test]
fn color_flags_conflict() {
    let result = Cli::try_parse_from([
        "linkify-tracking",
        "carriers",
        "--color",
        "--no-color",
    ]);
    assert!(result.is_err());
}

#[test]
fn parse_linkify_attributes_in_order() {
    let cli = Cli::parse_from([
        "linkify-tracking",
        "linkify",
        "--attr",
        "target=_blank",
        "-a",
        "rel=noopener",
        "mail.html",
    ]);
    if let Some(Command::Linkify(args)) = cli.command {
        assert_eq!(
            args.attributes,
            vec![
                ("target".to_string(), "_blank".to_string()),
                ("rel".to_string(), "noopener".to_string()),
            ]
        );
        assert_eq!(args.files.len(), 1);
        assert!(!args.in_place);
    } else {
        panic!("expected linkify command");
    }
}

#[test]
fn in_place_requires_files() {
    assert!(Cli::try_parse_from(["linkify-tracking", "linkify", "--in-place"]).is_err());
}

#[test]
fn parse_completions_shell() {
    let cli = Cli::parse_from(["linkify-tracking", "completions", "bash"]);
    assert!(matches!(cli.command, Some(Command::Completions(_))));
}

#[parameterized(
    simple = { "target=_blank", "target", "_blank" },
    empty_value = { "download=", "download", "" },
    value_with_equals = { "data-q=a=b", "data-q", "a=b" },
    trimmed_name = { " rel =noopener", "rel", "noopener" },
)]
fn parses_attribute(raw: &str, name: &str, value: &str) {
    assert_eq!(
        parse_attribute(raw).unwrap(),
        (name.to_string(), value.to_string())
    );
}

#[parameterized(
    no_equals = { "target" },
    empty_name = { "=x" },
    space_in_name = { "data x=1" },
    quote_in_name = { "a\"b=1" },
)]
fn rejects_attribute(raw: &str) {
    assert!(parse_attribute(raw).is_err());
}

#[test]
fn strict_flag_is_global() {
    let cli = Cli::parse_from(["linkify-tracking", "classify", "--strict", "123"]);
    assert!(cli.strict);
    let cli = Cli::parse_from(["linkify-tracking", "carriers"]);
    assert!(!cli.strict);
}
