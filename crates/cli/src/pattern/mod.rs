// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracking number recognition patterns.
//!
//! Patterns are compiled with the `regex` crate, which runs in time linear in
//! the input, so untrusted or very large text cannot trigger catastrophic
//! backtracking. Matching is ASCII, case-insensitive.

pub mod matcher;

pub use matcher::{PatternError, PatternMatch, TrackingPattern};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
