// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! linkify-tracking CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use linkify_tracking::Linkifier;
use linkify_tracking::cli::{Cli, Command};
use linkify_tracking::config::{self, Config};
use linkify_tracking::error::ExitCode;

mod cmd_carriers;
mod cmd_classify;
mod cmd_completions;
mod cmd_linkify;
mod cmd_url;

fn init_logging() {
    let filter = EnvFilter::try_from_env("LINKIFY_TRACKING_LOG")
        .unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("linkify-tracking: {}", e);
            match e.downcast_ref::<linkify_tracking::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Classify(args)) => cmd_classify::run(&load_linkifier(&cli)?, args),
        Some(Command::Url(args)) => cmd_url::run(&load_linkifier(&cli)?, args),
        Some(Command::Linkify(args)) => cmd_linkify::run(&load_linkifier(&cli)?, args),
        Some(Command::Carriers(args)) => cmd_carriers::run(&load_linkifier(&cli)?, args),
        Some(Command::Completions(args)) => cmd_completions::run(args),
    }
}

/// Build the linkifier from the resolved config, or the built-in defaults.
fn load_linkifier(cli: &Cli) -> anyhow::Result<Linkifier> {
    let cwd = std::env::current_dir()?;
    let config = match config::locate(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            if cli.strict {
                config::load(&path)?
            } else {
                config::load_with_warnings(&path)?
            }
        }
        None => {
            tracing::debug!("no config found, using built-in carriers");
            Config::default()
        }
    };
    Ok(config.linkifier()?)
}
