//! garment-core - Core library for quoting custom sportswear orders.
//!
//! This library prices garment runs from a fixed cost formula, renders a
//! printable quote summary, builds a pre-filled messaging link and keeps an
//! append-only history of completed quotes.
//!
//! # Example
//!
//! ```no_run
//! use garment_core::{quote_order, AppConfig, OrderForm, QuoteOutcome, SizeCounts, SizeLabel};
//!
//! let config = AppConfig::default();
//! let form = OrderForm {
//!     sizes: SizeCounts::new().with(SizeLabel::S, 2).with(SizeLabel::M, 3),
//!     ..Default::default()
//! };
//! if let QuoteOutcome::Quoted(quote) = quote_order("classic", &form, &config, chrono::Utc::now()).unwrap() {
//!     println!("{}", garment_core::render_summary(&quote, &config.shop));
//! }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod history;
pub mod model;
pub mod pricing;
pub mod session;
pub mod validation;

// Re-exports for convenience
pub use config::{AppConfig, Consumption, CostRates, DigitizingGate, PricingConfig, ShopConfig};
pub use error::{QuoteError, Result};
pub use generator::{build_message, build_message_link, render_summary};
pub use history::{HistoryLog, QuoteRecord};
pub use model::{
    CostBreakdown, EmbroiderySelection, GarmentModel, LogoArtifact, OrderSpecification, SetType,
    SizeCounts, SizeLabel,
};
pub use pricing::{compute_breakdown, PricingEngine};
pub use session::{OrderForm, Quote, QuoteOutcome, QuoteSession};
pub use validation::{validate_config, validate_order, ValidationResult};

use chrono::{DateTime, Utc};

/// Quote a form for a catalog model.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Select the garment model
/// 2. Build the order from the form
/// 3. Validate the configuration and the order
/// 4. Price it
///
/// An order with no garments yields [`QuoteOutcome::NothingToQuote`] before
/// any other check runs. Validation warnings are logged; validation errors
/// abort with [`QuoteError::InvalidOrder`].
pub fn quote_order(
    model: &str,
    form: &OrderForm,
    config: &AppConfig,
    now: DateTime<Utc>,
) -> Result<QuoteOutcome> {
    let mut session = QuoteSession::new();
    let selected = session.select_model(model)?;
    tracing::info!("Quoting: {}", selected.name);

    let order = session.build_order(form)?;
    if order.sizes().is_empty() {
        return Ok(QuoteOutcome::NothingToQuote);
    }

    let mut validation = validate_config(config);
    validation.merge(validate_order(&order, now.date_naive()));
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    if !validation.passed {
        return Err(QuoteError::InvalidOrder {
            errors: validation.errors,
        });
    }

    let engine = PricingEngine::new(config.pricing.clone());
    session.evaluate(form, &engine, now)
}
