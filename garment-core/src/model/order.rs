//! Order specification: what the customer asked to have made.

use super::catalog::SetType;
use super::size::SizeCounts;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default garment color when none is chosen.
pub const DEFAULT_COLOR: &str = "#000000";

/// Embroidery options selected for the order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbroiderySelection {
    /// Logo embroidered on each garment.
    pub logo: bool,
    /// Name embroidered on each garment.
    pub name: bool,
}

impl EmbroiderySelection {
    pub fn new(logo: bool, name: bool) -> Self {
        Self { logo, name }
    }

    /// Single "wants embroidery" flag covering both options.
    pub fn combined(wants_embroidery: bool) -> Self {
        Self::new(wants_embroidery, wants_embroidery)
    }

    /// True when any embroidery option is selected.
    pub fn any(&self) -> bool {
        self.logo || self.name
    }
}

/// Reference to a logo image supplied with the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoArtifact {
    /// File name shown on documents.
    pub file_name: String,
    /// Location of the file.
    pub path: PathBuf,
}

impl LogoArtifact {
    /// Image extensions accepted for logos.
    pub const ACCEPTED_EXTENSIONS: [&'static str; 3] = ["png", "jpg", "jpeg"];

    /// Create a logo reference from a path.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("logo")
            .to_string();
        Self {
            file_name,
            path: path.to_path_buf(),
        }
    }

    /// Lower-case file extension, if any.
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase())
    }

    /// Check the extension against the accepted image types.
    pub fn has_accepted_extension(&self) -> bool {
        self.extension()
            .map(|ext| Self::ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false)
    }
}

/// Descriptive fields carried through to documents and history.
///
/// None of these affect the price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderMetadata {
    pub model_name: String,
    pub set_type: SetType,
    pub fabric: Option<String>,
    pub color: String,
    pub delivery_date: Option<NaiveDate>,
    pub comments: String,
}

impl Default for OrderMetadata {
    fn default() -> Self {
        Self {
            model_name: String::new(),
            set_type: SetType::default(),
            fabric: None,
            color: DEFAULT_COLOR.to_string(),
            delivery_date: None,
            comments: String::new(),
        }
    }
}

/// A complete order as submitted from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSpecification {
    sizes: SizeCounts,
    embroidery: EmbroiderySelection,
    logo: Option<LogoArtifact>,
    metadata: OrderMetadata,
}

impl OrderSpecification {
    /// Create an order for the given sizes with no options.
    pub fn new(sizes: SizeCounts) -> Self {
        Self {
            sizes,
            ..Default::default()
        }
    }

    pub fn with_embroidery(mut self, embroidery: EmbroiderySelection) -> Self {
        self.embroidery = embroidery;
        self
    }

    pub fn with_logo(mut self, logo: Option<LogoArtifact>) -> Self {
        self.logo = logo;
        self
    }

    pub fn with_metadata(mut self, metadata: OrderMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn sizes(&self) -> &SizeCounts {
        &self.sizes
    }

    pub fn embroidery(&self) -> EmbroiderySelection {
        self.embroidery
    }

    pub fn logo(&self) -> Option<&LogoArtifact> {
        self.logo.as_ref()
    }

    pub fn metadata(&self) -> &OrderMetadata {
        &self.metadata
    }

    /// Total garments ordered.
    pub fn total_units(&self) -> u64 {
        self.sizes.total_units()
    }

    /// A logo file accompanies the order.
    pub fn logo_artifact_present(&self) -> bool {
        self.logo.is_some()
    }

    /// The logo embroidery option is selected.
    pub fn logo_embroidery_selected(&self) -> bool {
        self.embroidery.logo
    }
}
