pub mod entity;
pub mod query;
pub mod value_objects;

pub use entity::{GeoPoint, PhotoMedia, PhotoRef, Place, PlaceReview};
pub use query::SearchQuery;
pub use value_objects::{ID_PREFIX_LEN, PhotoName, PlaceId, Slug};
