// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Carriers command implementation.

use linkify_tracking::Linkifier;
use linkify_tracking::cli::{CarriersArgs, OutputFormat};
use linkify_tracking::color::resolve_color;
use linkify_tracking::error::ExitCode;
use linkify_tracking::output::json::JsonFormatter;
use linkify_tracking::output::text::TextFormatter;

pub fn run(linkifier: &Linkifier, args: &CarriersArgs) -> anyhow::Result<ExitCode> {
    let registry = linkifier.registry();
    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(resolve_color(args.color, args.no_color));
            formatter.write_carriers(registry)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write_carriers(registry)?;
        }
    }
    Ok(ExitCode::Success)
}
