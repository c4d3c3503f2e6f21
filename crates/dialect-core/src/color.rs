// crates/dialect-core/src/color.rs

//! # Color Allocator
//!
//! Spreads the observed provinces evenly around the hue circle at fixed
//! saturation and value so that neighbouring markers on the map stay
//! distinguishable.

use crate::province::UNKNOWN_PROVINCE;
use serde::Serialize;

/// Saturation used for every allocated color.
pub const SATURATION: f64 = 0.6;
/// Value (brightness) used for every allocated color.
pub const VALUE: f64 = 0.8;
/// Color for labels without an allocation, including the unknown sentinel.
pub const DEFAULT_COLOR: &str = "#999999";

/// Label → `#rrggbb` mapping, in allocation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorAssignment {
    entries: Vec<(String, String)>,
}

impl ColorAssignment {
    /// Color for `label`, or [`DEFAULT_COLOR`] if it was never allocated.
    pub fn get(&self, label: &str) -> &str {
        self.lookup(label).unwrap_or(DEFAULT_COLOR)
    }

    /// Color for `label` only if it was allocated.
    pub fn lookup(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), c.as_str()))
    }
}

/// Assign one color per label, in input order.
///
/// The hue circle is cut into `n` equal steps (whole degrees, truncated) and
/// label `i` gets step `i`. The unknown sentinel and repeated labels are
/// skipped; they are not counted in `n`.
pub fn allocate<'a, I>(labels: I) -> ColorAssignment
where
    I: IntoIterator<Item = &'a str>,
{
    let mut distinct: Vec<&str> = Vec::new();
    for label in labels {
        if label != UNKNOWN_PROVINCE && !distinct.contains(&label) {
            distinct.push(label);
        }
    }

    if distinct.is_empty() {
        return ColorAssignment::default();
    }

    let step = 360.0 / distinct.len() as f64;
    let entries = distinct
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let hue = (i as f64 * step).trunc();
            let (r, g, b) = hsv_to_rgb(hue / 360.0, SATURATION, VALUE);
            (label.to_string(), to_hex(r, g, b))
        })
        .collect();

    ColorAssignment { entries }
}

/// Convert normalized HSV (each in `[0, 1]`) to 8-bit RGB.
///
/// Channels are truncated, not rounded.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let sector = (h * 6.0).trunc();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as i64 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (channel(r), channel(g), channel(b))
}

/// Lowercase `#rrggbb`.
pub fn to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn channel(x: f64) -> u8 {
    (x * 255.0).clamp(0.0, 255.0) as u8
}
