//! Configuration constants and settings for quoting.

use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "garment-quote.toml";

/// Default history store path.
pub const DEFAULT_HISTORY_FILE: &str = "quotes.jsonl";

/// Outer fabric consumed per garment, in meters.
pub const DEFAULT_FABRIC_METERS_PER_UNIT: f64 = 2.7;

/// Inner lining consumed per garment, in meters.
pub const DEFAULT_LINING_METERS_PER_UNIT: f64 = 1.0;

/// Cutting labor is quoted per dozen garments.
pub const UNITS_PER_DOZEN: f64 = 12.0;

/// Unit costs applied by the pricing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostRates {
    /// Outer fabric, per meter.
    pub fabric_per_meter: f64,
    /// Inner lining, per meter.
    pub lining_per_meter: f64,
    /// Pattern-making, charged once per size bucket in use.
    pub pattern_per_size_used: f64,
    /// Assembly labor, per garment.
    pub sewing_per_unit: f64,
    /// Cutting labor, per dozen garments.
    pub cutting_per_dozen: f64,
    /// Zippers and cords, per garment.
    pub accessories_per_unit: f64,
    /// Embroidery labor, per garment.
    pub embroidery_per_unit: f64,
    /// One-time logo digitizing ("punching") fee.
    pub logo_digitizing_flat: f64,
    /// Target profit, per garment.
    pub desired_margin_per_unit: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            fabric_per_meter: 11.0,
            lining_per_meter: 4.5,
            pattern_per_size_used: 55.0,
            sewing_per_unit: 18.0,
            cutting_per_dozen: 45.0,
            accessories_per_unit: 3.0,
            embroidery_per_unit: 4.0,
            logo_digitizing_flat: 10.0,
            desired_margin_per_unit: 17.0,
        }
    }
}

impl CostRates {
    /// Cutting labor per garment, derived from the per-dozen rate.
    pub fn cutting_per_unit(&self) -> f64 {
        self.cutting_per_dozen / UNITS_PER_DOZEN
    }

    /// Named view of every rate, in table order.
    pub fn fields(&self) -> [(&'static str, f64); 9] {
        [
            ("fabric_per_meter", self.fabric_per_meter),
            ("lining_per_meter", self.lining_per_meter),
            ("pattern_per_size_used", self.pattern_per_size_used),
            ("sewing_per_unit", self.sewing_per_unit),
            ("cutting_per_dozen", self.cutting_per_dozen),
            ("accessories_per_unit", self.accessories_per_unit),
            ("embroidery_per_unit", self.embroidery_per_unit),
            ("logo_digitizing_flat", self.logo_digitizing_flat),
            ("desired_margin_per_unit", self.desired_margin_per_unit),
        ]
    }

    /// Reject negative or non-finite rates.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.fields() {
            check_amount(&format!("rates.{}", name), value)?;
        }
        Ok(())
    }
}

/// Material consumption per garment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Consumption {
    pub fabric_meters_per_unit: f64,
    pub lining_meters_per_unit: f64,
}

impl Default for Consumption {
    fn default() -> Self {
        Self {
            fabric_meters_per_unit: DEFAULT_FABRIC_METERS_PER_UNIT,
            lining_meters_per_unit: DEFAULT_LINING_METERS_PER_UNIT,
        }
    }
}

impl Consumption {
    /// Reject negative or non-finite consumption values.
    pub fn validate(&self) -> Result<()> {
        check_amount(
            "consumption.fabric_meters_per_unit",
            self.fabric_meters_per_unit,
        )?;
        check_amount(
            "consumption.lining_meters_per_unit",
            self.lining_meters_per_unit,
        )
    }
}

/// Which order predicate charges the logo digitizing fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitizingGate {
    /// Charged when a logo file accompanies the order.
    #[default]
    LogoArtifact,
    /// Charged when the logo embroidery option is selected.
    LogoEmbroidery,
}

impl DigitizingGate {
    /// Parse from a config or CLI value.
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "logo_artifact" | "artifact" => Some(DigitizingGate::LogoArtifact),
            "logo_embroidery" | "embroidery" => Some(DigitizingGate::LogoEmbroidery),
            _ => None,
        }
    }
}

impl std::fmt::Display for DigitizingGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigitizingGate::LogoArtifact => write!(f, "logo_artifact"),
            DigitizingGate::LogoEmbroidery => write!(f, "logo_embroidery"),
        }
    }
}

/// Everything the pricing engine reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub digitizing_gate: DigitizingGate,
    pub rates: CostRates,
    pub consumption: Consumption,
}

impl PricingConfig {
    /// Validate rates and consumption.
    pub fn validate(&self) -> Result<()> {
        self.rates.validate()?;
        self.consumption.validate()
    }
}

/// Shop identity used on documents and messaging links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Shop name printed on quotes.
    pub name: String,
    /// Currency prefix for amounts.
    pub currency: String,
    /// Phone number receiving customer messages (digits only, with country code).
    pub messaging_number: String,
    /// Base URL of the messaging service deep link.
    pub messaging_base_url: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: "CINNTEX".to_string(),
            currency: "S/".to_string(),
            messaging_number: "5194611230".to_string(),
            messaging_base_url: "https://wa.me".to_string(),
        }
    }
}

/// Quote history settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Path of the append-only history log.
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_HISTORY_FILE),
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub shop: ShopConfig,
    pub pricing: PricingConfig,
    pub history: HistoryConfig,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| QuoteError::ConfigParse {
                path: origin.to_path_buf(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, `garment-quote.toml`
    /// in the working directory is used when present; a malformed default file
    /// falls back to built-in values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(QuoteError::ConfigNotFound {
                        path: path.to_path_buf(),
                    });
                }
                let content = std::fs::read_to_string(path)?;
                let config = Self::from_toml_str(&content, path)?;
                tracing::info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::load_default_file(Path::new(DEFAULT_CONFIG_FILE))),
        }
    }

    fn load_default_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content, path) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring {}, using built-in defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!("{} not found, using built-in defaults", path.display());
                Self::default()
            }
        }
    }

    /// Validate all numeric settings.
    pub fn validate(&self) -> Result<()> {
        self.pricing.validate()
    }
}

fn check_amount(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(QuoteError::InvalidRate {
            field: field.to_string(),
            value,
        })
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutting_per_unit_from_dozen() {
        let rates = CostRates::default();
        assert_eq!(rates.cutting_per_unit(), 3.75);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml = r#"
            [shop]
            name = "Talleres Lima"

            [pricing]
            digitizing_gate = "logo_embroidery"

            [pricing.rates]
            fabric_per_meter = 12.5
        "#;
        let config = AppConfig::from_toml_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.shop.name, "Talleres Lima");
        assert_eq!(config.shop.currency, "S/");
        assert_eq!(config.pricing.rates.fabric_per_meter, 12.5);
        assert_eq!(config.pricing.rates.lining_per_meter, 4.5);
        assert_eq!(config.pricing.digitizing_gate, DigitizingGate::LogoEmbroidery);
        assert_eq!(config.pricing.consumption, Consumption::default());
    }

    #[test]
    fn test_negative_rate_rejected() {
        let toml = "[pricing.rates]\nsewing_per_unit = -3.0\n";
        let err = AppConfig::from_toml_str(toml, Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidRate { ref field, .. } if field == "rates.sewing_per_unit"));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = AppConfig::from_toml_str("[shop\nname=", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, QuoteError::ConfigParse { .. }));
    }

    #[test]
    fn test_missing_explicit_path() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/garment-quote.toml"))).unwrap_err();
        assert!(matches!(err, QuoteError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_digitizing_gate_parse() {
        assert_eq!(
            DigitizingGate::from_str_value("logo-embroidery"),
            Some(DigitizingGate::LogoEmbroidery)
        );
        assert_eq!(
            DigitizingGate::from_str_value("ARTIFACT"),
            Some(DigitizingGate::LogoArtifact)
        );
        assert_eq!(DigitizingGate::from_str_value("always"), None);
    }
}
