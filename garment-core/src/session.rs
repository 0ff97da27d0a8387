//! Request-scoped quoting context.
//!
//! The session remembers which garment model the customer picked so that
//! repeated evaluations of the same form keep the selection. The pricing
//! engine never sees the session; it only receives the finished order.

use crate::error::{QuoteError, Result};
use crate::history::QuoteRecord;
use crate::model::{
    find_model, CostBreakdown, EmbroiderySelection, GarmentModel, LogoArtifact, OrderMetadata,
    OrderSpecification, SetType, SizeCounts, DEFAULT_COLOR,
};
use crate::pricing::PricingEngine;
use chrono::{DateTime, NaiveDate, Utc};

/// Raw form input for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub sizes: SizeCounts,
    pub embroidery: EmbroiderySelection,
    pub logo: Option<LogoArtifact>,
    pub set_type: SetType,
    pub fabric: Option<String>,
    pub color: String,
    pub delivery_date: Option<NaiveDate>,
    pub comments: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            sizes: SizeCounts::new(),
            embroidery: EmbroiderySelection::default(),
            logo: None,
            set_type: SetType::default(),
            fabric: None,
            color: DEFAULT_COLOR.to_string(),
            delivery_date: None,
            comments: String::new(),
        }
    }
}

/// A priced order.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub order: OrderSpecification,
    pub breakdown: CostBreakdown,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// History entry for this quote.
    pub fn to_record(&self) -> QuoteRecord {
        let meta = self.order.metadata();
        QuoteRecord {
            timestamp: self.created_at,
            model: meta.model_name.clone(),
            set_type: meta.set_type,
            sizes: *self.order.sizes(),
            color: meta.color.clone(),
            fabric: meta.fabric.clone(),
            delivery_date: meta.delivery_date,
            comments: meta.comments.clone(),
            total_units: self.breakdown.total_units,
            total_cost: self.breakdown.total_cost,
            suggested_unit_price: self.breakdown.suggested_unit_price,
        }
    }
}

/// Result of evaluating a form.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteOutcome {
    /// No garments entered; the engine was not invoked.
    NothingToQuote,
    /// The order was priced.
    Quoted(Quote),
}

/// Quoting context that outlives individual form evaluations.
#[derive(Debug, Clone, Default)]
pub struct QuoteSession {
    selected: Option<&'static GarmentModel>,
}

impl QuoteSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a catalog model by id or name.
    pub fn select_model(&mut self, key: &str) -> Result<&'static GarmentModel> {
        let model = find_model(key).ok_or_else(|| QuoteError::UnknownModel {
            name: key.to_string(),
        })?;
        tracing::debug!("Selected model {}", model.name);
        self.selected = Some(model);
        Ok(model)
    }

    /// Most recent selection, if any.
    pub fn selected_model(&self) -> Option<&'static GarmentModel> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Build the order for the selected model.
    pub fn build_order(&self, form: &OrderForm) -> Result<OrderSpecification> {
        let model = self.selected.ok_or(QuoteError::NoModelSelected)?;
        let metadata = OrderMetadata {
            model_name: model.name.to_string(),
            set_type: form.set_type,
            fabric: form.fabric.clone(),
            color: form.color.clone(),
            delivery_date: form.delivery_date,
            comments: form.comments.clone(),
        };
        Ok(OrderSpecification::new(form.sizes)
            .with_embroidery(form.embroidery)
            .with_logo(form.logo.clone())
            .with_metadata(metadata))
    }

    /// Evaluate the form: skip pricing when nothing is ordered, price otherwise.
    pub fn evaluate(
        &self,
        form: &OrderForm,
        engine: &PricingEngine,
        now: DateTime<Utc>,
    ) -> Result<QuoteOutcome> {
        let order = self.build_order(form)?;
        if order.total_units() == 0 {
            return Ok(QuoteOutcome::NothingToQuote);
        }
        let breakdown = engine.price(&order)?;
        Ok(QuoteOutcome::Quoted(Quote {
            order,
            breakdown,
            created_at: now,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::model::SizeLabel;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 9, 30, 0).unwrap()
    }

    fn form(sizes: SizeCounts) -> OrderForm {
        OrderForm {
            sizes,
            ..Default::default()
        }
    }

    #[test]
    fn test_selection_survives_reevaluation() {
        let mut session = QuoteSession::new();
        session.select_model("hooded-cuts").unwrap();
        let engine = PricingEngine::default();

        let first = session
            .evaluate(&form(SizeCounts::new()), &engine, now())
            .unwrap();
        assert_eq!(first, QuoteOutcome::NothingToQuote);

        let second = session
            .evaluate(&form(SizeCounts::new().with(SizeLabel::M, 2)), &engine, now())
            .unwrap();
        match second {
            QuoteOutcome::Quoted(quote) => {
                assert_eq!(
                    quote.order.metadata().model_name,
                    "Hooded Jacket with Panel Cuts"
                );
                assert_eq!(quote.breakdown.total_units, 2);
            }
            QuoteOutcome::NothingToQuote => panic!("expected a quote"),
        }
        assert_eq!(session.selected_model().unwrap().id, "hooded-cuts");
    }

    #[test]
    fn test_no_model_selected() {
        let session = QuoteSession::new();
        let err = session
            .evaluate(
                &form(SizeCounts::new().with(SizeLabel::S, 1)),
                &PricingEngine::default(),
                now(),
            )
            .unwrap_err();
        assert!(matches!(err, QuoteError::NoModelSelected));
    }

    #[test]
    fn test_unknown_model_keeps_previous_selection() {
        let mut session = QuoteSession::new();
        session.select_model("classic").unwrap();
        assert!(session.select_model("ballgown").is_err());
        assert_eq!(session.selected_model().unwrap().id, "classic");
        session.clear_selection();
        assert!(session.selected_model().is_none());
    }

    #[test]
    fn test_record_carries_metadata_and_price() {
        let mut session = QuoteSession::new();
        session.select_model("classic").unwrap();
        let input = OrderForm {
            sizes: SizeCounts::new().with(SizeLabel::S, 2).with(SizeLabel::M, 3),
            comments: "Add names on the back".to_string(),
            ..Default::default()
        };
        let outcome = session
            .evaluate(&input, &PricingEngine::default(), now())
            .unwrap();
        let QuoteOutcome::Quoted(quote) = outcome else {
            panic!("expected a quote");
        };
        let record = quote.to_record();
        assert_eq!(record.timestamp, now());
        assert_eq!(record.model, "Classic Straight Tracksuit");
        assert_eq!(record.comments, "Add names on the back");
        assert_eq!(record.total_units, 5);
        assert!(approx_eq(record.total_cost, 404.75));
        assert!(approx_eq(record.suggested_unit_price, 97.95));
    }
}
