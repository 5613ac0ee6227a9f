mod lookup;
mod preview;
mod service;

pub use lookup::{GetPlaceIdByPrefixQuery, GetPlaceIdBySlugQuery};
pub use preview::PreviewSlugQuery;
pub use service::SlugQueryService;
