use std::sync::Arc;

use crate::{application::queries::places::PlaceQueryService, domain::region::RegionCatalog};

pub struct RegionQueryService {
    pub(super) regions: Arc<RegionCatalog>,
    pub(super) place_queries: Arc<PlaceQueryService>,
}

impl RegionQueryService {
    pub fn new(regions: Arc<RegionCatalog>, place_queries: Arc<PlaceQueryService>) -> Self {
        Self {
            regions,
            place_queries,
        }
    }
}
