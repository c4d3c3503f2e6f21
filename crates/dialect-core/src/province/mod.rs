// crates/dialect-core/src/province/mod.rs

//! # Province Resolver
//!
//! Maps a free-text location (e.g. `"江苏南京"`, `"沪上风光"`, `"绵阳市"`) to
//! one of the 34 canonical province-level division names, or to
//! [`UNKNOWN_PROVINCE`] when nothing matches.
//!
//! Matching runs in tiers, first match wins:
//!
//! 1. province stems (`"江苏"` → `"江苏省"`)
//! 2. single-character abbreviations (`'沪'` → `"上海市"`)
//! 3. well-known city names (`"绵阳"` → `"四川省"`)
//!
//! Within a tier the first *table entry* that occurs in the text wins, not the
//! leftmost occurrence in the text.

mod tables;

pub use tables::{CITY_PROVINCES, PROVINCE_ABBREVIATIONS, PROVINCE_STEMS};

use serde::Serialize;

/// Sentinel label for locations that cannot be classified.
pub const UNKNOWN_PROVINCE: &str = "未知省份";

/// Which rule produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Stem,
    Abbreviation,
    City,
    Unknown,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Tier::Stem => "stem",
            Tier::Abbreviation => "abbreviation",
            Tier::City => "city",
            Tier::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// A resolved province together with the rule that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub province: &'static str,
    pub tier: Tier,
}

impl Resolution {
    const UNKNOWN: Resolution = Resolution {
        province: UNKNOWN_PROVINCE,
        tier: Tier::Unknown,
    };

    pub fn is_unknown(&self) -> bool {
        self.tier == Tier::Unknown
    }
}

/// Resolve an optional location to a canonical province label.
///
/// Absent, empty and whitespace-only locations resolve to
/// [`UNKNOWN_PROVINCE`].
pub fn resolve(location: Option<&str>) -> &'static str {
    resolve_with_tier(location).province
}

/// Shorthand for [`resolve`] on a present string.
pub fn resolve_str(location: &str) -> &'static str {
    resolve(Some(location))
}

/// Like [`resolve`], but also reports which tier matched.
pub fn resolve_with_tier(location: Option<&str>) -> Resolution {
    let text = match location.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Resolution::UNKNOWN,
    };

    if let Some(province) = match_stem(text) {
        return Resolution {
            province,
            tier: Tier::Stem,
        };
    }
    if let Some(province) = match_abbreviation(text) {
        return Resolution {
            province,
            tier: Tier::Abbreviation,
        };
    }
    if let Some(province) = match_city(text) {
        return Resolution {
            province,
            tier: Tier::City,
        };
    }

    Resolution::UNKNOWN
}

/// The 34 canonical names, in table order.
pub fn canonical_provinces() -> impl Iterator<Item = &'static str> {
    PROVINCE_STEMS.iter().map(|(_, full)| *full)
}

fn match_stem(text: &str) -> Option<&'static str> {
    PROVINCE_STEMS
        .iter()
        .find(|(stem, _)| text.contains(stem))
        .map(|(_, full)| *full)
}

fn match_abbreviation(text: &str) -> Option<&'static str> {
    PROVINCE_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| text.contains(*abbr))
        .map(|(_, full)| *full)
}

fn match_city(text: &str) -> Option<&'static str> {
    CITY_PROVINCES
        .iter()
        .find(|(city, _)| text.contains(city))
        .map(|(_, full)| *full)
}
