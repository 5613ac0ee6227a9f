pub mod audit;
pub mod catalog;
pub mod entity;

pub use audit::{RegionIssue, RegionProblem, audit_entries};
pub use catalog::{RegionCatalog, extract_municipality, strip_admin_suffix};
pub use entity::{Prefecture, RegionEntry, RegionKind, is_slug_text};
