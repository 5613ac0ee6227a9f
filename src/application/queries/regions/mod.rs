mod areas;
mod prefectures;
mod service;

pub use areas::{GetAreaQuery, SearchAreaQuery};
pub use prefectures::ListPrefectureAreasQuery;
pub use service::RegionQueryService;
