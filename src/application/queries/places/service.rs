use std::{sync::Arc, time::Duration};

use crate::application::{ports::places::PlacesClient, services::json_cache::JsonCache};

pub struct PlaceQueryService {
    pub(super) places: Arc<dyn PlacesClient>,
    pub(super) cache: JsonCache,
    pub(super) cache_ttl: Duration,
}

impl PlaceQueryService {
    pub fn new(places: Arc<dyn PlacesClient>, cache: JsonCache, cache_ttl: Duration) -> Self {
        Self {
            places,
            cache,
            cache_ttl,
        }
    }
}
