pub mod entity;
pub mod parser;
pub mod quality;

pub use entity::{FacilityProfile, QaPair};
pub use parser::parse_facility_sections;
pub use quality::{QualityIssue, assess, sanitize_generated};
