//! Cost breakdown produced by the pricing engine.

use serde::{Deserialize, Serialize};

/// Every intermediate term of a priced order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Garments across all sizes.
    pub total_units: u64,
    /// Sizes with a quantity above zero.
    pub distinct_sizes_used: u32,
    /// Outer fabric consumed, in meters.
    pub fabric_meters: f64,
    /// Lining consumed, in meters.
    pub lining_meters: f64,
    pub fabric_cost: f64,
    pub lining_cost: f64,
    pub pattern_cost: f64,
    pub sewing_cost: f64,
    pub cutting_cost: f64,
    pub accessories_cost: f64,
    pub embroidery_cost: f64,
    pub digitizing_cost: f64,
    /// Desired margin over the whole run.
    pub margin_total: f64,
    /// Sum of the eight cost terms, margin excluded.
    pub total_cost: f64,
    /// Total cost plus margin, averaged per garment.
    pub suggested_unit_price: f64,
}

/// One of the eight cost terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostTerm {
    Fabric,
    Lining,
    Pattern,
    Sewing,
    Cutting,
    Accessories,
    Embroidery,
    Digitizing,
}

impl CostTerm {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            CostTerm::Fabric => "Fabric",
            CostTerm::Lining => "Lining",
            CostTerm::Pattern => "Pattern-making",
            CostTerm::Sewing => "Sewing",
            CostTerm::Cutting => "Cutting",
            CostTerm::Accessories => "Accessories",
            CostTerm::Embroidery => "Embroidery",
            CostTerm::Digitizing => "Logo digitizing",
        }
    }
}

/// A cost term with its amount, for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    pub term: CostTerm,
    pub amount: f64,
}

impl CostBreakdown {
    /// Cost terms in computation order.
    pub fn line_items(&self) -> [LineItem; 8] {
        let item = |term, amount| LineItem { term, amount };
        [
            item(CostTerm::Fabric, self.fabric_cost),
            item(CostTerm::Lining, self.lining_cost),
            item(CostTerm::Pattern, self.pattern_cost),
            item(CostTerm::Sewing, self.sewing_cost),
            item(CostTerm::Cutting, self.cutting_cost),
            item(CostTerm::Accessories, self.accessories_cost),
            item(CostTerm::Embroidery, self.embroidery_cost),
            item(CostTerm::Digitizing, self.digitizing_cost),
        ]
    }

    /// Amount charged for the whole run, margin included.
    pub fn total_price(&self) -> f64 {
        self.total_cost + self.margin_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_items_sum_to_total() {
        let b = CostBreakdown {
            total_units: 2,
            fabric_cost: 59.4,
            lining_cost: 9.0,
            pattern_cost: 55.0,
            sewing_cost: 36.0,
            cutting_cost: 7.5,
            accessories_cost: 6.0,
            embroidery_cost: 8.0,
            digitizing_cost: 10.0,
            total_cost: 190.9,
            margin_total: 34.0,
            ..Default::default()
        };
        let sum: f64 = b.line_items().iter().map(|i| i.amount).sum();
        assert!((sum - b.total_cost).abs() < 1e-9);
        assert_eq!(b.line_items()[7].term.label(), "Logo digitizing");
        assert!((b.total_price() - 224.9).abs() < 1e-9);
    }
}
