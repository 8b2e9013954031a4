// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for lookups and the carrier table.

pub mod json;
pub mod text;

use crate::linkify::{CarrierMatch, Linkifier};

/// One classified input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// The input as given.
    pub tracking_number: String,
    /// The carrier match, if any.
    pub matched: Option<CarrierMatch>,
}

impl Lookup {
    /// Classify `tracking_number` with `linkifier`.
    pub fn classify(linkifier: &Linkifier, tracking_number: &str) -> Self {
        Self {
            tracking_number: tracking_number.to_string(),
            matched: linkifier.classify(tracking_number),
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }
}
