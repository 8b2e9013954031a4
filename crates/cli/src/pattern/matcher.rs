// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled tracking number patterns.
//!
//! Patterns run over the UTF-8 bytes of the content with Unicode classes
//! off, so `\d`, `\w` and `\b` are ASCII and `.`, `\S` or `[^ ]` match a
//! single byte. A match that would start or end inside a multi-byte
//! character is discarded.

use regex::bytes::{Regex, RegexBuilder};

/// One recognition rule for a carrier numbering scheme.
///
/// The regex crate has no look-around, so prefixes that a scheme reserves
/// for other uses are listed separately and checked against each match.
#[derive(Debug, Clone)]
pub struct TrackingPattern {
    regex: Regex,
    excluded_prefixes: Vec<String>,
}

/// A match found in content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset where match starts.
    pub start: usize,
    /// Byte offset where match ends.
    pub end: usize,
}

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("invalid excluded prefix {0:?}: must be non-empty ASCII")]
    InvalidPrefix(String),
}

impl TrackingPattern {
    /// Compile a pattern string.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .unicode(false)
            .build()?;
        Ok(Self {
            regex,
            excluded_prefixes: Vec::new(),
        })
    }

    /// Reject matches starting with any of `prefixes` (ASCII case-insensitive).
    ///
    /// This behaves like a negative look-ahead at the start of the pattern:
    /// after a rejected match, the search resumes one byte past its start,
    /// so a match beginning inside the rejected one can still be found.
    pub fn with_excluded_prefixes<I, S>(mut self, prefixes: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for prefix in prefixes {
            let prefix = prefix.into();
            if prefix.is_empty() || !prefix.is_ascii() {
                return Err(PatternError::InvalidPrefix(prefix));
            }
            self.excluded_prefixes.push(prefix);
        }
        Ok(self)
    }

    /// The pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn excluded_prefixes(&self) -> &[String] {
        &self.excluded_prefixes
    }

    /// Find the leftmost accepted match.
    pub fn find(&self, content: &str) -> Option<PatternMatch> {
        self.matches(content).next()
    }

    /// Find all accepted, non-overlapping matches, left to right.
    pub fn find_all(&self, content: &str) -> Vec<PatternMatch> {
        self.matches(content).collect()
    }

    /// True if the leftmost match spans the whole of `content`.
    ///
    /// The pattern itself is not anchored; a match that leaves leading or
    /// trailing text over is not a whole match.
    pub fn matches_whole(&self, content: &str) -> bool {
        self.find(content)
            .is_some_and(|m| m.start == 0 && m.end == content.len())
    }

    fn matches<'a>(&'a self, content: &'a str) -> Matches<'a> {
        Matches {
            pattern: self,
            content,
            at: 0,
        }
    }

    fn accepts(&self, content: &str, start: usize, end: usize) -> bool {
        start < end
            && content.is_char_boundary(start)
            && content.is_char_boundary(end)
            && !self.is_excluded(&content.as_bytes()[start..end])
    }

    fn is_excluded(&self, matched: &[u8]) -> bool {
        self.excluded_prefixes.iter().any(|prefix| {
            matched
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
        })
    }
}

/// Accepted matches, left to right.
///
/// A rejected match restarts the search one byte past its start; an accepted
/// one continues from its end.
struct Matches<'a> {
    pattern: &'a TrackingPattern,
    content: &'a str,
    at: usize,
}

impl Iterator for Matches<'_> {
    type Item = PatternMatch;

    fn next(&mut self) -> Option<PatternMatch> {
        let haystack = self.content.as_bytes();
        while self.at <= haystack.len() {
            let m = self.pattern.regex.find_at(haystack, self.at)?;
            if self.pattern.accepts(self.content, m.start(), m.end()) {
                self.at = m.end();
                return Some(PatternMatch {
                    start: m.start(),
                    end: m.end(),
                });
            }
            self.at = m.start() + 1;
        }
        None
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
