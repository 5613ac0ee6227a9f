use super::PlaceQueryService;
use crate::{
    application::{
        cache_keys,
        dto::{PlaceSummaryDto, SearchResultDto},
        error::ApplicationResult,
    },
    domain::place::SearchQuery,
};

pub const DEFAULT_SEARCH_LIMIT: u32 = 20;
/// Upper bound the provider accepts per text search.
pub const MAX_SEARCH_RESULTS: u32 = 20;

pub struct SearchPlacesQuery {
    pub query: String,
    pub limit: Option<u32>,
}

impl PlaceQueryService {
    /// Text search for funeral homes, memoized under `search:{normalized}`.
    ///
    /// The cached entry always holds the full provider page; `limit` only
    /// trims the response.
    pub async fn search_places(&self, query: SearchPlacesQuery) -> ApplicationResult<SearchResultDto> {
        let search = SearchQuery::new(&query.query)?;
        let limit = query
            .limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_RESULTS) as usize;
        let key = cache_keys::search(&search);

        if let Some(mut results) = self.cache.get::<Vec<PlaceSummaryDto>>(&key).await {
            tracing::debug!(query = %search, "search cache hit");
            results.truncate(limit);
            return Ok(SearchResultDto {
                query: search.to_string(),
                results,
                cached: true,
            });
        }

        let places = self
            .places
            .text_search(&search.provider_text(), MAX_SEARCH_RESULTS)
            .await?;
        let mut results: Vec<PlaceSummaryDto> = places.into_iter().map(Into::into).collect();
        tracing::info!(query = %search, count = results.len(), "text search fetched from provider");

        self.cache.put(&key, &results, Some(self.cache_ttl)).await;
        results.truncate(limit);

        Ok(SearchResultDto {
            query: search.to_string(),
            results,
            cached: false,
        })
    }
}
