use super::RegionQueryService;
use crate::{
    application::{
        dto::{AreaDto, AreaSearchDto},
        error::{ApplicationError, ApplicationResult},
        queries::places::SearchPlacesQuery,
    },
    domain::region::RegionEntry,
};

pub struct GetAreaQuery {
    pub slug: String,
}

pub struct SearchAreaQuery {
    pub slug: String,
    pub limit: Option<u32>,
}

impl RegionQueryService {
    pub fn get_area(&self, query: GetAreaQuery) -> ApplicationResult<AreaDto> {
        self.find_area(&query.slug).map(Into::into)
    }

    /// Funeral homes near an area, searched by the area's Japanese name
    /// qualified with its prefecture.
    pub async fn search_area(&self, query: SearchAreaQuery) -> ApplicationResult<AreaSearchDto> {
        let entry = self.find_area(&query.slug)?;
        let text = match entry
            .prefecture_code
            .and_then(|code| self.regions.prefecture(code))
        {
            Some(pref) => format!("{} {}", pref.name, entry.name),
            None => entry.name.clone(),
        };

        let search = self
            .place_queries
            .search_places(SearchPlacesQuery {
                query: text,
                limit: query.limit,
            })
            .await?;

        Ok(AreaSearchDto {
            area: entry.into(),
            search,
        })
    }

    fn find_area(&self, slug: &str) -> ApplicationResult<&RegionEntry> {
        let slug = slug.trim().to_ascii_lowercase();
        self.regions
            .find_by_slug(&slug)
            .ok_or_else(|| ApplicationError::not_found(format!("area {slug}")))
    }
}
