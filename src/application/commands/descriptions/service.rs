use std::sync::Arc;

use crate::application::{
    ports::{generator::TextGenerator, time::Clock},
    queries::places::PlaceQueryService,
    services::json_cache::JsonCache,
};

pub struct DescriptionCommandService {
    pub(super) place_queries: Arc<PlaceQueryService>,
    pub(super) generator: Arc<dyn TextGenerator>,
    pub(super) cache: JsonCache,
    pub(super) clock: Arc<dyn Clock>,
}

impl DescriptionCommandService {
    pub fn new(
        place_queries: Arc<PlaceQueryService>,
        generator: Arc<dyn TextGenerator>,
        cache: JsonCache,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            place_queries,
            generator,
            cache,
            clock,
        }
    }
}
