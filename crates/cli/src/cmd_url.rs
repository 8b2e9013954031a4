// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Url command implementation.

use linkify_tracking::Linkifier;
use linkify_tracking::cli::UrlArgs;
use linkify_tracking::error::ExitCode;

/// Print the tracking URL, or report the miss on stderr.
pub fn run(linkifier: &Linkifier, args: &UrlArgs) -> anyhow::Result<ExitCode> {
    match linkifier.get_link_url(&args.number) {
        Some(url) => {
            println!("{}", url);
            Ok(ExitCode::Success)
        }
        None => {
            eprintln!("linkify-tracking: no carrier matches `{}`", args.number);
            Ok(ExitCode::NoMatch)
        }
    }
}
