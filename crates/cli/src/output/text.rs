// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Lookups, one per line:
//! ```text
//! <number>: <carrier> <url>
//! <number>: no match
//! ```
//!
//! Carriers, in precedence order:
//! ```text
//! <name>
//!   url: <template>
//!   pattern: <regex>
//!   excludes: <prefix>, <prefix>
//! ```

use std::io::Write;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::Lookup;
use crate::carrier::CarrierRegistry;
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one lookup line.
    pub fn write_lookup(&mut self, lookup: &Lookup) -> std::io::Result<()> {
        write!(self.out, "{}: ", lookup.tracking_number)?;
        match &lookup.matched {
            Some(m) => {
                self.out.set_color(&scheme::carrier())?;
                write!(self.out, "{}", m.carrier)?;
                self.out.reset()?;
                write!(self.out, " ")?;
                self.out.set_color(&scheme::url())?;
                write!(self.out, "{}", m.url)?;
                self.out.reset()?;
            }
            None => {
                self.out.set_color(&scheme::no_match())?;
                write!(self.out, "no match")?;
                self.out.reset()?;
            }
        }
        writeln!(self.out)
    }

    /// Write every lookup.
    pub fn write_lookups(&mut self, lookups: &[Lookup]) -> std::io::Result<()> {
        for lookup in lookups {
            self.write_lookup(lookup)?;
        }
        Ok(())
    }

    /// Write the carrier table.
    pub fn write_carriers(&mut self, registry: &CarrierRegistry) -> std::io::Result<()> {
        for carrier in registry {
            self.out.set_color(&scheme::carrier())?;
            write!(self.out, "{}", carrier.name())?;
            self.out.reset()?;
            writeln!(self.out)?;

            write!(self.out, "  url: ")?;
            self.out.set_color(&scheme::url())?;
            write!(self.out, "{}", carrier.url_template())?;
            self.out.reset()?;
            writeln!(self.out)?;

            for pattern in carrier.patterns() {
                write!(self.out, "  pattern: ")?;
                self.out.set_color(&scheme::pattern())?;
                write!(self.out, "{}", pattern.as_str())?;
                self.out.reset()?;
                writeln!(self.out)?;
            }

            // All patterns of a carrier share its exclusions.
            if let Some(first) = carrier.patterns().first()
                && !first.excluded_prefixes().is_empty()
            {
                writeln!(self.out, "  excludes: {}", first.excluded_prefixes().join(", "))?;
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
