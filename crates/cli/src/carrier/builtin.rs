// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in carrier table.
//!
//! Order is precedence: when a number fits more than one scheme, the carrier
//! listed first wins. Patterns are heuristics and are kept exactly as callers
//! have come to rely on them, including the DHL/FedEx/USPS numeric overlap.

use super::CarrierDefinition;

/// A compiled-in carrier definition.
pub struct BuiltinCarrier {
    pub name: &'static str,
    pub url: &'static str,
    pub patterns: &'static [&'static str],
    pub excluded_prefixes: &'static [&'static str],
}

impl BuiltinCarrier {
    pub fn definition(&self) -> CarrierDefinition {
        CarrierDefinition {
            name: self.name.to_string(),
            url: self.url.to_string(),
            patterns: self.patterns.iter().map(|p| p.to_string()).collect(),
            excluded_prefixes: self
                .excluded_prefixes
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

pub const DHL: BuiltinCarrier = BuiltinCarrier {
    name: "DHL",
    url: "http://www.dhl.com/content/g0/en/express/tracking.shtml?brand=DHL&AWB=%s",
    patterns: &[r"\b(\d{4}[- ]?\d{4}[- ]?\d{2}|\d{3}[- ]?\d{8}|[A-Z]{3}\d{7})\b"],
    excluded_prefixes: &[],
};

pub const FEDEX: BuiltinCarrier = BuiltinCarrier {
    name: "FedEx",
    url: "https://www.fedex.com/apps/fedextrack/?action=track&locale=en_US&cntry_code=us&tracknumbers=%s",
    patterns: &[r"\b(((96\d\d|6\d)\d{3} ?\d{4}|96\d{2}|\d{4}) ?\d{4} ?\d{4}( ?\d{3})?)\b"],
    excluded_prefixes: &[],
};

pub const UPS: BuiltinCarrier = BuiltinCarrier {
    name: "UPS",
    url: "http://wwwapps.ups.com/WebTracking/processInputRequest?TypeOfInquiryNumber=T&InquiryNumber1=%s",
    patterns: &[
        r"\b(1Z ?[0-9A-Z]{3} ?[0-9A-Z]{3} ?[0-9A-Z]{2} ?[0-9A-Z]{4} ?[0-9A-Z]{3} ?[0-9A-Z]|T\d{3} ?\d{4} ?\d{3})\b",
    ],
    excluded_prefixes: &[],
};

/// USPS: standard 20-22 digit labels, international/Express labels, then
/// the short `82` series.
pub const USPS: BuiltinCarrier = BuiltinCarrier {
    name: "USPS",
    url: "https://tools.usps.com/go/TrackConfirmAction?tLabels=%s",
    patterns: &[
        r"\b((420 ?\d{5} ?)?(91|92|93|94|01|03|04|70|23|13)\d{2} ?\d{4} ?\d{4} ?\d{4} ?\d{4}( ?\d{2,6})?)\b",
        r"\b((M|P[A-Z]?|D[C-Z]|LK|E[A-C]|V[A-Z]|R[A-Z]|CP|CJ|LC|LJ) ?\d{3} ?\d{3} ?\d{3} ?[A-Z]?[A-Z]?)\b",
        r"\b(82 ?\d{3} ?\d{3} ?\d{2})\b",
    ],
    excluded_prefixes: &[],
};

/// Royal Mail: two letters, nine digits, `GB`. Prefixes reserved for other
/// services are not Royal Mail numbers.
pub const ROYAL_MAIL: BuiltinCarrier = BuiltinCarrier {
    name: "Royal Mail",
    url: "http://www.royalmail.com/portal/rm/track?trackNumber=%s",
    patterns: &[r"\b[A-Za-z]{2}[0-9]{9}GB\b"],
    excluded_prefixes: &["EA", "EB", "EC", "ED", "EE", "CP"],
};

/// All built-in carriers, in precedence order.
pub const BUILTIN_CARRIERS: &[BuiltinCarrier] = &[DHL, FEDEX, UPS, USPS, ROYAL_MAIL];
