// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--color` / `--no-color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. default: color only when stdout is a TTY outside CI

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Resolve color choice from flags and the environment.
pub fn resolve_color(force: bool, disable: bool) -> ColorChoice {
    if disable {
        return ColorChoice::Never;
    }
    if force {
        return ColorChoice::Always;
    }
    resolve_color_from_env(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("COLOR").is_some(),
        std::io::stdout().is_terminal(),
        std::env::var_os("CI").is_some(),
    )
}

/// Environment half of [`resolve_color`].
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` set to any value
/// (including empty string) disables color.
fn resolve_color_from_env(no_color: bool, color: bool, is_tty: bool, ci: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    if color {
        return ColorChoice::Always;
    }
    if !is_tty || ci {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for text output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold carrier name.
    pub fn carrier() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Cyan URL.
    pub fn url() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow "no match" indicator.
    pub fn no_match() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    /// Dimmed pattern source.
    pub fn pattern() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
