pub mod cache;
pub mod descriptions;
pub mod places;
pub mod regions;
pub mod slugs;

pub use cache::{ClearCacheReportDto, ClearProgressDto, FailedKeyDto};
pub use descriptions::{DescriptionDto, FacilityProfileDto, QaPairDto};
pub use places::{
    GeoPointDto, PhotoDto, PlaceDetailDto, PlaceSummaryDto, ReviewDto, SearchResultDto,
};
pub use regions::{AreaDto, AreaSearchDto, PrefectureAreasDto, PrefectureDto};
pub use slugs::{PlaceIdDto, SlugMappingDto, SlugPreviewDto};
