//! Garment sizes and per-size quantities.

use crate::error::QuoteError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Size label of a garment, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeLabel {
    XS,
    S,
    M,
    L,
    XL,
}

impl SizeLabel {
    /// All labels in display order.
    pub const ALL: [SizeLabel; 5] = [
        SizeLabel::XS,
        SizeLabel::S,
        SizeLabel::M,
        SizeLabel::L,
        SizeLabel::XL,
    ];

    /// Upper-case label text.
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeLabel::XS => "XS",
            SizeLabel::S => "S",
            SizeLabel::M => "M",
            SizeLabel::L => "L",
            SizeLabel::XL => "XL",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for SizeLabel {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "XS" => Ok(SizeLabel::XS),
            "S" => Ok(SizeLabel::S),
            "M" => Ok(SizeLabel::M),
            "L" => Ok(SizeLabel::L),
            "XL" => Ok(SizeLabel::XL),
            _ => Err(QuoteError::InvalidSize {
                label: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quantity ordered for each size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SizeTable", into = "SizeTable")]
pub struct SizeCounts {
    counts: [u32; 5],
}

/// Serialized form of [`SizeCounts`]: one named field per size.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
struct SizeTable {
    xs: u32,
    s: u32,
    m: u32,
    l: u32,
    xl: u32,
}

impl From<SizeTable> for SizeCounts {
    fn from(t: SizeTable) -> Self {
        Self {
            counts: [t.xs, t.s, t.m, t.l, t.xl],
        }
    }
}

impl From<SizeCounts> for SizeTable {
    fn from(c: SizeCounts) -> Self {
        let [xs, s, m, l, xl] = c.counts;
        Self { xs, s, m, l, xl }
    }
}

impl SizeCounts {
    /// Create an empty set of counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `label` set to `qty`.
    pub fn with(mut self, label: SizeLabel, qty: u32) -> Self {
        self.set(label, qty);
        self
    }

    /// Set the quantity for a size.
    pub fn set(&mut self, label: SizeLabel, qty: u32) {
        self.counts[label.index()] = qty;
    }

    /// Quantity for a size.
    pub fn get(&self, label: SizeLabel) -> u32 {
        self.counts[label.index()]
    }

    /// Total garments across all sizes.
    ///
    /// Summed as `u64` so that per-size counts at `u32::MAX` cannot wrap.
    pub fn total_units(&self) -> u64 {
        self.counts.iter().map(|&qty| u64::from(qty)).sum()
    }

    /// Number of sizes with a quantity above zero.
    pub fn distinct_sizes_used(&self) -> u32 {
        self.counts.iter().filter(|&&qty| qty > 0).count() as u32
    }

    /// True when no garment is ordered.
    pub fn is_empty(&self) -> bool {
        self.total_units() == 0
    }

    /// Iterate `(label, quantity)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SizeLabel, u32)> + '_ {
        SizeLabel::ALL.iter().map(move |&label| (label, self.get(label)))
    }

    /// Parse a `LABEL=QTY` entry such as `M=3`.
    pub fn parse_entry(entry: &str) -> Result<(SizeLabel, u32), QuoteError> {
        let (label, qty) = entry.split_once('=').ok_or_else(|| QuoteError::InvalidValue {
            field: "size".to_string(),
            expected: "LABEL=QTY".to_string(),
            value: entry.to_string(),
        })?;
        let label: SizeLabel = label.parse()?;
        let qty = qty.trim().parse::<u32>().map_err(|_| QuoteError::InvalidValue {
            field: format!("size {}", label),
            expected: "a non-negative integer".to_string(),
            value: qty.to_string(),
        })?;
        Ok((label, qty))
    }
}

impl FromIterator<(SizeLabel, u32)> for SizeCounts {
    fn from_iter<I: IntoIterator<Item = (SizeLabel, u32)>>(iter: I) -> Self {
        let mut counts = SizeCounts::new();
        for (label, qty) in iter {
            counts.set(label, qty);
        }
        counts
    }
}

impl std::fmt::Display for SizeCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(label, qty)| format!("{}({})", label, qty))
            .collect();
        f.write_str(&parts.join(", "))
    }
}
