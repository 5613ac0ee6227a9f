mod details;
mod photo;
mod search;
mod service;

pub use details::GetPlaceDetailsQuery;
pub use photo::GetPhotoQuery;
pub use search::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_RESULTS, SearchPlacesQuery};
pub use service::PlaceQueryService;
