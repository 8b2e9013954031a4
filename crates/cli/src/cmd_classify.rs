// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Classify command implementation.

use linkify_tracking::Linkifier;
use linkify_tracking::cli::{ClassifyArgs, OutputFormat};
use linkify_tracking::color::resolve_color;
use linkify_tracking::error::ExitCode;
use linkify_tracking::output::Lookup;
use linkify_tracking::output::json::JsonFormatter;
use linkify_tracking::output::text::TextFormatter;

/// Run the classify command.
///
/// Exits with [`ExitCode::NoMatch`] when any number matched no carrier.
pub fn run(linkifier: &Linkifier, args: &ClassifyArgs) -> anyhow::Result<ExitCode> {
    let lookups: Vec<Lookup> = args
        .numbers
        .iter()
        .map(|number| Lookup::classify(linkifier, number))
        .collect();

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(resolve_color(args.color, args.no_color));
            formatter.write_lookups(&lookups)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write_lookups(&lookups)?;
        }
    }

    if lookups.iter().all(Lookup::is_match) {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::NoMatch)
    }
}
