//! Built-in garment model catalog.

use serde::{Deserialize, Serialize};

/// A garment model offered by the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GarmentModel {
    /// Short identifier used on the command line.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Catalog image file.
    pub image: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// Models shown in the catalog, in display order.
pub const CATALOG: [GarmentModel; 4] = [
    GarmentModel {
        id: "classic",
        name: "Classic Straight Tracksuit",
        image: "buzo_clasico.png",
        description: "Comfortable, versatile model for daily or school use.",
    },
    GarmentModel {
        id: "hooded-cuts",
        name: "Hooded Jacket with Panel Cuts",
        image: "casaca_cortes.png",
        description: "Modern design, ideal for sports teams.",
    },
    GarmentModel {
        id: "high-collar",
        name: "High-Collar Dress Jacket",
        image: "chaqueta_elegante.png",
        description: "Suited to corporate or representative use.",
    },
    GarmentModel {
        id: "waterproof",
        name: "Waterproof Hooded Jacket",
        image: "casaca_impermeable.png",
        description: "Water resistant, ideal for outdoor activities.",
    },
];

/// Find a model by id or by case-insensitive name.
pub fn find_model(key: &str) -> Option<&'static GarmentModel> {
    let key = key.trim();
    CATALOG
        .iter()
        .find(|m| m.id.eq_ignore_ascii_case(key) || m.name.eq_ignore_ascii_case(key))
}

/// What the set includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetType {
    /// Jacket and pants.
    #[default]
    FullSet,
    /// Jacket alone.
    JacketOnly,
}

impl SetType {
    /// Parse from a CLI value.
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "full" | "full-set" | "full_set" | "set" => Some(SetType::FullSet),
            "jacket" | "jacket-only" | "jacket_only" => Some(SetType::JacketOnly),
            _ => None,
        }
    }
}

impl std::fmt::Display for SetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetType::FullSet => write!(f, "Full set (jacket + pants)"),
            SetType::JacketOnly => write!(f, "Jacket only"),
        }
    }
}
