//! Validation of orders and configuration before quoting.

use crate::config::AppConfig;
use crate::model::OrderSpecification;
use chrono::NaiveDate;

/// Message shown when an order has no garments.
pub const NOTHING_TO_QUOTE: &str = "Please enter at least one garment to quote.";

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Fold another result into this one, keeping every message.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate an order as submitted from the form.
///
/// `today` is the reference date for the delivery date check.
pub fn validate_order(order: &OrderSpecification, today: NaiveDate) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if order.total_units() == 0 {
        result.add_error(NOTHING_TO_QUOTE);
    }

    if order.metadata().model_name.trim().is_empty() {
        result.add_warning("No garment model selected");
    }

    if let Some(logo) = order.logo() {
        if !logo.has_accepted_extension() {
            result.add_error(format!(
                "Logo {}: unsupported file type (expected png, jpg or jpeg)",
                logo.file_name
            ));
        }
        if !logo.path.exists() {
            result.add_warning(format!(
                "Logo {}: file not found at {}",
                logo.file_name,
                logo.path.display()
            ));
        }
    }

    if let Some(date) = order.metadata().delivery_date {
        if date < today {
            result.add_warning(format!("Delivery date {} is in the past", date));
        }
    }

    result
}

/// Validate configuration values.
pub fn validate_config(config: &AppConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    let rates = config
        .pricing
        .rates
        .fields()
        .map(|(name, value)| (format!("rates.{}", name), value));
    let consumption = [
        (
            "consumption.fabric_meters_per_unit".to_string(),
            config.pricing.consumption.fabric_meters_per_unit,
        ),
        (
            "consumption.lining_meters_per_unit".to_string(),
            config.pricing.consumption.lining_meters_per_unit,
        ),
    ];

    for (field, value) in rates.into_iter().chain(consumption) {
        if !value.is_finite() || value < 0.0 {
            result.add_error(format!("{}: invalid value {}", field, value));
        }
    }

    let number = &config.shop.messaging_number;
    if number.is_empty() {
        result.add_warning("shop.messaging_number is empty; messaging links will not reach anyone");
    } else if !number.chars().all(|c| c.is_ascii_digit()) {
        result.add_warning(format!(
            "shop.messaging_number '{}' contains non-digit characters",
            number
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LogoArtifact, OrderMetadata, SizeCounts, SizeLabel};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn named(model: &str) -> OrderMetadata {
        OrderMetadata {
            model_name: model.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_order_passes() {
        let order = OrderSpecification::new(SizeCounts::new().with(SizeLabel::M, 3))
            .with_metadata(named("Classic Straight Tracksuit"));
        let result = validate_order(&order, today());
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_order_fails() {
        let order = OrderSpecification::new(SizeCounts::new()).with_metadata(named("Classic"));
        let result = validate_order(&order, today());
        assert!(!result.passed);
        assert_eq!(result.errors, vec![NOTHING_TO_QUOTE.to_string()]);
    }

    #[test]
    fn test_logo_type_and_presence() {
        let order = OrderSpecification::new(SizeCounts::new().with(SizeLabel::S, 1))
            .with_metadata(named("Classic"))
            .with_logo(Some(LogoArtifact::from_path("/nonexistent/crest.gif")));
        let result = validate_order(&order, today());
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("crest.gif"));
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("not found"));
    }

    #[test]
    fn test_past_delivery_date_warns() {
        let metadata = OrderMetadata {
            delivery_date: NaiveDate::from_ymd_opt(2026, 3, 9),
            ..named("Classic")
        };
        let order =
            OrderSpecification::new(SizeCounts::new().with(SizeLabel::S, 1)).with_metadata(metadata);
        let result = validate_order(&order, today());
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_missing_model_warns() {
        let order = OrderSpecification::new(SizeCounts::new().with(SizeLabel::S, 1));
        let result = validate_order(&order, today());
        assert!(result.passed);
        assert_eq!(result.warnings, vec!["No garment model selected".to_string()]);
    }

    #[test]
    fn test_config_checks() {
        let mut config = AppConfig::default();
        assert!(validate_config(&config).passed);

        config.pricing.rates.lining_per_meter = f64::NAN;
        config.shop.messaging_number = "+51 946".to_string();
        let result = validate_config(&config);
        assert!(!result.passed);
        assert!(result.errors[0].contains("rates.lining_per_meter"));
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_config_and_order_results_combine() {
        let mut config = AppConfig::default();
        config.shop.messaging_number = String::new();
        let order = OrderSpecification::new(SizeCounts::new().with(SizeLabel::S, 1))
            .with_metadata(named("Classic"))
            .with_logo(Some(LogoArtifact::from_path("crest.tiff")));

        let mut combined = validate_config(&config);
        assert!(combined.passed);
        combined.merge(validate_order(&order, today()));

        assert!(!combined.passed);
        assert_eq!(combined.errors.len(), 1);
        assert!(combined.errors[0].contains("crest.tiff"));
        // Empty messaging number, then the missing logo file.
        assert_eq!(combined.warnings.len(), 2);
        assert!(combined.warnings[0].contains("messaging_number"));
    }
}
