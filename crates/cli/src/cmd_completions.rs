// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completions command implementation.

use clap::CommandFactory;
use clap_complete::generate;

use linkify_tracking::cli::{Cli, CompletionsArgs};
use linkify_tracking::error::ExitCode;

/// Write the completion script for the requested shell to stdout.
pub fn run(args: &CompletionsArgs) -> anyhow::Result<ExitCode> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "linkify-tracking", &mut std::io::stdout());
    Ok(ExitCode::Success)
}
