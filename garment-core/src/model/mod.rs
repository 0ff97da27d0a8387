//! Data model types for order quoting.

mod breakdown;
mod catalog;
mod order;
mod size;

pub use breakdown::{CostBreakdown, CostTerm, LineItem};
pub use catalog::{find_model, GarmentModel, SetType, CATALOG};
pub use order::{EmbroiderySelection, LogoArtifact, OrderMetadata, OrderSpecification, DEFAULT_COLOR};
pub use size::{SizeCounts, SizeLabel};
