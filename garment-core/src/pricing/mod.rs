//! Pricing engine.

mod engine;

pub use engine::{compute_breakdown, PricingEngine};
