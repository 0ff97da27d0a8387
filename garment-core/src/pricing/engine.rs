//! Cost formula for a garment run.

use crate::config::{DigitizingGate, PricingConfig};
use crate::error::{QuoteError, Result};
use crate::model::{CostBreakdown, OrderSpecification};

/// Price an order.
///
/// Pure: reads only its arguments. An order with no garments is rejected with
/// [`QuoteError::EmptyOrder`]; callers are expected to gate on
/// `total_units() > 0` before asking for a price.
pub fn compute_breakdown(
    order: &OrderSpecification,
    pricing: &PricingConfig,
) -> Result<CostBreakdown> {
    let sizes = order.sizes();
    let total_units = sizes.total_units();
    if total_units == 0 {
        return Err(QuoteError::EmptyOrder);
    }

    let rates = &pricing.rates;
    let units = total_units as f64;

    // Material consumption scales with the whole run, not with sizes used.
    let fabric_meters = units * pricing.consumption.fabric_meters_per_unit;
    let lining_meters = units * pricing.consumption.lining_meters_per_unit;

    let fabric_cost = fabric_meters * rates.fabric_per_meter;
    let lining_cost = lining_meters * rates.lining_per_meter;

    let distinct_sizes_used = sizes.distinct_sizes_used();
    let pattern_cost = distinct_sizes_used as f64 * rates.pattern_per_size_used;

    let sewing_cost = units * rates.sewing_per_unit;
    let cutting_cost = units * rates.cutting_per_unit();
    let accessories_cost = units * rates.accessories_per_unit;

    let embroidery_cost = if order.embroidery().any() {
        units * rates.embroidery_per_unit
    } else {
        0.0
    };

    let charge_digitizing = match pricing.digitizing_gate {
        DigitizingGate::LogoArtifact => order.logo_artifact_present(),
        DigitizingGate::LogoEmbroidery => order.logo_embroidery_selected(),
    };
    let digitizing_cost = if charge_digitizing {
        rates.logo_digitizing_flat
    } else {
        0.0
    };

    let total_cost = fabric_cost
        + lining_cost
        + pattern_cost
        + sewing_cost
        + cutting_cost
        + accessories_cost
        + embroidery_cost
        + digitizing_cost;

    let margin_total = rates.desired_margin_per_unit * units;
    let suggested_unit_price = (total_cost + margin_total) / units;

    tracing::debug!(
        total_units,
        distinct_sizes_used,
        total_cost,
        suggested_unit_price,
        "Priced order"
    );

    Ok(CostBreakdown {
        total_units,
        distinct_sizes_used,
        fabric_meters,
        lining_meters,
        fabric_cost,
        lining_cost,
        pattern_cost,
        sewing_cost,
        cutting_cost,
        accessories_cost,
        embroidery_cost,
        digitizing_cost,
        margin_total,
        total_cost,
        suggested_unit_price,
    })
}

/// Pricing engine bound to one pricing configuration.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Create an engine for the given configuration.
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price an order. See [`compute_breakdown`].
    pub fn price(&self, order: &OrderSpecification) -> Result<CostBreakdown> {
        compute_breakdown(order, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::{approx_eq, approx_zero};
    use crate::model::{EmbroiderySelection, LogoArtifact, SizeCounts, SizeLabel};

    fn small_run() -> SizeCounts {
        SizeCounts::new().with(SizeLabel::S, 2).with(SizeLabel::M, 3)
    }

    // ==================== Reference scenarios ====================

    #[test]
    fn test_plain_run() {
        let order = OrderSpecification::new(small_run());
        let b = compute_breakdown(&order, &PricingConfig::default()).unwrap();

        assert_eq!(b.total_units, 5);
        assert_eq!(b.distinct_sizes_used, 2);
        assert!(approx_eq(b.fabric_meters, 13.5));
        assert!(approx_eq(b.lining_meters, 5.0));
        assert!(approx_eq(b.fabric_cost, 148.5));
        assert!(approx_eq(b.lining_cost, 22.5));
        assert!(approx_eq(b.pattern_cost, 110.0));
        assert!(approx_eq(b.sewing_cost, 90.0));
        assert!(approx_eq(b.cutting_cost, 18.75));
        assert!(approx_eq(b.accessories_cost, 15.0));
        assert!(approx_zero(b.embroidery_cost));
        assert!(approx_zero(b.digitizing_cost));
        assert!(approx_eq(b.total_cost, 404.75));
        assert!(approx_eq(b.margin_total, 85.0));
        assert!(approx_eq(b.suggested_unit_price, 97.95));
    }

    #[test]
    fn test_logo_embroidery_with_file() {
        let order = OrderSpecification::new(small_run())
            .with_embroidery(EmbroiderySelection::new(true, false))
            .with_logo(Some(LogoArtifact::from_path("crest.png")));
        let b = compute_breakdown(&order, &PricingConfig::default()).unwrap();

        assert!(approx_eq(b.embroidery_cost, 20.0));
        assert!(approx_eq(b.digitizing_cost, 10.0));
        assert!(approx_eq(b.total_cost, 434.75));
        assert!(approx_eq(b.suggested_unit_price, 103.95));
    }

    #[test]
    fn test_empty_order_rejected() {
        let order = OrderSpecification::new(SizeCounts::new());
        let err = compute_breakdown(&order, &PricingConfig::default()).unwrap_err();
        assert!(matches!(err, QuoteError::EmptyOrder));
    }

    #[test]
    fn test_run_larger_than_u32_is_priced() {
        let sizes = SizeCounts::new()
            .with(SizeLabel::XS, u32::MAX)
            .with(SizeLabel::S, 1);
        let b = compute_breakdown(&OrderSpecification::new(sizes), &PricingConfig::default()).unwrap();

        assert_eq!(b.total_units, 4_294_967_296);
        assert_eq!(b.distinct_sizes_used, 2);
        // Per-unit terms plus margin; the two pattern charges vanish at this scale.
        assert!(approx_eq(b.suggested_unit_price, 75.95));
    }

    // ==================== Term properties ====================

    #[test]
    fn test_consumption_is_linear_in_units() {
        let pricing = PricingConfig::default();
        for units in [1u32, 7, 12, 250] {
            let order = OrderSpecification::new(SizeCounts::new().with(SizeLabel::L, units));
            let b = compute_breakdown(&order, &pricing).unwrap();
            assert_eq!(b.fabric_meters, units as f64 * 2.7);
            assert_eq!(b.lining_meters, units as f64 * 1.0);
        }
    }

    #[test]
    fn test_pattern_cost_ignores_quantity_per_size() {
        let pricing = PricingConfig::default();
        let one = OrderSpecification::new(SizeCounts::new().with(SizeLabel::XS, 1));
        let many = OrderSpecification::new(SizeCounts::new().with(SizeLabel::XS, 1000));
        assert_eq!(
            compute_breakdown(&one, &pricing).unwrap().pattern_cost,
            compute_breakdown(&many, &pricing).unwrap().pattern_cost
        );
    }

    #[test]
    fn test_total_cost_monotonic_in_each_size() {
        let pricing = PricingConfig::default();
        let base = small_run();
        let base_cost = compute_breakdown(&OrderSpecification::new(base), &pricing)
            .unwrap()
            .total_cost;
        for label in SizeLabel::ALL {
            let bumped = base.with(label, base.get(label) + 1);
            let cost = compute_breakdown(&OrderSpecification::new(bumped), &pricing)
                .unwrap()
                .total_cost;
            assert!(cost >= base_cost, "adding one {} lowered the cost", label);
        }
    }

    #[test]
    fn test_idempotent() {
        let engine = PricingEngine::default();
        let order = OrderSpecification::new(small_run())
            .with_embroidery(EmbroiderySelection::new(false, true));
        let first = engine.price(&order).unwrap();
        let second = engine.price(&order).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.suggested_unit_price.to_bits(),
            second.suggested_unit_price.to_bits()
        );
    }

    #[test]
    fn test_name_only_embroidery_charges_no_digitizing() {
        let order = OrderSpecification::new(small_run())
            .with_embroidery(EmbroiderySelection::new(false, true));
        let b = compute_breakdown(&order, &PricingConfig::default()).unwrap();
        assert!(approx_eq(b.embroidery_cost, 20.0));
        assert!(approx_zero(b.digitizing_cost));
    }

    // ==================== Digitizing gate ====================

    #[test]
    fn test_gate_on_artifact_ignores_option() {
        let order = OrderSpecification::new(small_run())
            .with_embroidery(EmbroiderySelection::new(true, false));
        let b = compute_breakdown(&order, &PricingConfig::default()).unwrap();
        assert!(approx_zero(b.digitizing_cost));
        assert!(approx_eq(b.embroidery_cost, 20.0));
    }

    #[test]
    fn test_gate_on_embroidery_option() {
        let pricing = PricingConfig {
            digitizing_gate: DigitizingGate::LogoEmbroidery,
            ..Default::default()
        };
        let option_only = OrderSpecification::new(small_run())
            .with_embroidery(EmbroiderySelection::new(true, false));
        let file_only = OrderSpecification::new(small_run())
            .with_logo(Some(LogoArtifact::from_path("crest.png")));

        assert!(approx_eq(
            compute_breakdown(&option_only, &pricing).unwrap().digitizing_cost,
            10.0
        ));
        assert!(approx_zero(
            compute_breakdown(&file_only, &pricing).unwrap().digitizing_cost
        ));
    }

    #[test]
    fn test_custom_consumption() {
        let mut pricing = PricingConfig::default();
        pricing.consumption.fabric_meters_per_unit = 2.0;
        pricing.consumption.lining_meters_per_unit = 0.0;
        let order = OrderSpecification::new(SizeCounts::new().with(SizeLabel::M, 4));
        let b = compute_breakdown(&order, &pricing).unwrap();
        assert!(approx_eq(b.fabric_meters, 8.0));
        assert!(approx_eq(b.fabric_cost, 88.0));
        assert!(approx_zero(b.lining_cost));
    }
}
