// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Linkify command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;
use tempfile::NamedTempFile;

use linkify_tracking::cli::LinkifyArgs;
use linkify_tracking::error::{Error, ExitCode};
use linkify_tracking::{LinkAttributes, Linkifier};

/// Run the linkify command.
///
/// Reads stdin when no files are given. Files are processed in parallel;
/// printed output keeps argument order.
pub fn run(linkifier: &Linkifier, args: &LinkifyArgs) -> anyhow::Result<ExitCode> {
    let extra: LinkAttributes = args.attributes.iter().cloned().collect();

    if args.files.is_empty() {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(linkifier.linkify_with(&content, &extra).as_bytes())?;
        stdout.flush()?;
        return Ok(ExitCode::Success);
    }

    let outputs: Vec<(PathBuf, String)> = args
        .files
        .par_iter()
        .map(|path| -> Result<(PathBuf, String), Error> {
            let content = read_file(path)?;
            Ok((path.clone(), linkifier.linkify_with(&content, &extra)))
        })
        .collect::<Result<_, _>>()?;

    if args.in_place {
        rewrite_all(&outputs)?;
    } else {
        let mut stdout = std::io::stdout().lock();
        for (_, linked) in &outputs {
            stdout.write_all(linked.as_bytes())?;
        }
        stdout.flush()?;
    }

    Ok(ExitCode::Success)
}

fn read_file(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace each file with its new content.
///
/// Every replacement is first written to a temp file next to its target, so
/// a failure while writing leaves all targets untouched. Only the final
/// renames can fail part way; the error then names the files already
/// replaced.
fn rewrite_all(outputs: &[(PathBuf, String)]) -> anyhow::Result<()> {
    let staged = outputs
        .iter()
        .map(|(path, content)| stage(path, content).map(|file| (path, file)))
        .collect::<Result<Vec<_>, Error>>()?;

    let mut replaced: Vec<&Path> = Vec::with_capacity(staged.len());
    for (path, file) in staged {
        tracing::debug!("rewriting {}", path.display());
        let result = file.persist(path).map_err(|e| Error::Io {
            path: path.clone(),
            source: e.error,
        });
        if let Err(err) = result {
            if replaced.is_empty() {
                return Err(err.into());
            }
            let done: Vec<String> = replaced.iter().map(|p| p.display().to_string()).collect();
            return Err(err).with_context(|| format!("already rewritten: {}", done.join(", ")));
        }
        replaced.push(path.as_path());
    }
    Ok(())
}

/// Write `content` to a temp file beside `path`, with `path`'s permissions.
fn stage(path: &Path, content: &str) -> Result<NamedTempFile, Error> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let permissions = std::fs::metadata(path).map_err(io_error)?.permissions();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(content.as_bytes()).map_err(io_error)?;
    file.as_file().set_permissions(permissions).map_err(io_error)?;
    Ok(file)
}

#[cfg(test)]
#[path = "cmd_linkify_tests.rs"]
mod tests;
