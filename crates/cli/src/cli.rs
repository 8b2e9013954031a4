// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Recognize shipment tracking numbers and link them to their carrier
#[derive(Parser)]
#[command(name = "linkify-tracking")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(
        short = 'C',
        long = "config",
        global = true,
        env = "LINKIFY_TRACKING_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// Treat unrecognized config keys as errors instead of warnings
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Identify the carrier of tracking numbers
    Classify(ClassifyArgs),
    /// Print the tracking URL for a tracking number
    Url(UrlArgs),
    /// Replace tracking numbers in text with links
    Linkify(LinkifyArgs),
    /// List carriers in precedence order
    Carriers(CarriersArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ClassifyArgs {
    /// Tracking numbers to classify
    #[arg(value_name = "NUMBER", required = true)]
    pub numbers: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct UrlArgs {
    /// Tracking number
    #[arg(value_name = "NUMBER")]
    pub number: String,
}

#[derive(clap::Args)]
pub struct LinkifyArgs {
    /// Files to linkify (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Extra attribute for every link, after `href` (repeatable)
    #[arg(
        short = 'a',
        long = "attr",
        value_name = "NAME=VALUE",
        value_parser = parse_attribute
    )]
    pub attributes: Vec<(String, String)>,

    /// Rewrite files in place instead of printing
    #[arg(long, requires = "files")]
    pub in_place: bool,
}

#[derive(clap::Args)]
pub struct CarriersArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse a `NAME=VALUE` attribute. The value may be empty or contain `=`.
pub fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{}`", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("attribute name is empty in `{}`", raw));
    }
    if name.contains(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '/')) {
        return Err(format!("invalid attribute name `{}`", name));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
