// src/application/services/mod.rs
pub mod json_cache;

use std::{sync::Arc, time::Duration};

use crate::{
    application::{
        commands::{
            cache::{CacheCommandService, ClearPolicy},
            descriptions::DescriptionCommandService,
            slugs::SlugCommandService,
        },
        ports::{
            CacheStorePort, ClockPort, PlacesClientPort, RomanizerPort, TextGeneratorPort,
            TokenGeneratorPort,
        },
        queries::{places::PlaceQueryService, regions::RegionQueryService, slugs::SlugQueryService},
    },
    domain::{region::RegionCatalog, slug::SlugResolver},
};

use json_cache::JsonCache;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    /// Expiry for memoized search and place-detail responses.
    pub cache_ttl: Duration,
    pub clear_policy: ClearPolicy,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            clear_policy: ClearPolicy::default(),
        }
    }
}

pub struct ApplicationServices {
    pub place_queries: Arc<PlaceQueryService>,
    pub region_queries: Arc<RegionQueryService>,
    pub slug_queries: Arc<SlugQueryService>,
    pub slug_commands: Arc<SlugCommandService>,
    pub description_commands: Arc<DescriptionCommandService>,
    pub cache_commands: Arc<CacheCommandService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store: Arc<CacheStorePort>,
        places: Arc<PlacesClientPort>,
        generator: Arc<TextGeneratorPort>,
        romanizer: Option<Arc<RomanizerPort>>,
        regions: Arc<RegionCatalog>,
        clock: Arc<ClockPort>,
        tokens: Arc<TokenGeneratorPort>,
        settings: ServiceSettings,
    ) -> Self {
        let json_cache = JsonCache::new(Arc::clone(&store));

        let place_queries = Arc::new(PlaceQueryService::new(
            places,
            json_cache.clone(),
            settings.cache_ttl,
        ));

        let region_queries = Arc::new(RegionQueryService::new(
            Arc::clone(&regions),
            Arc::clone(&place_queries),
        ));

        let resolver = Arc::new(SlugResolver::new(regions, romanizer, tokens));

        let slug_queries = Arc::new(SlugQueryService::new(
            Arc::clone(&store),
            Arc::clone(&resolver),
        ));
        let slug_commands = Arc::new(SlugCommandService::new(
            Arc::clone(&store),
            Arc::clone(&resolver),
        ));

        let description_commands = Arc::new(DescriptionCommandService::new(
            Arc::clone(&place_queries),
            generator,
            json_cache,
            Arc::clone(&clock),
        ));

        let cache_commands = Arc::new(CacheCommandService::new(
            store,
            clock,
            settings.clear_policy,
        ));

        Self {
            place_queries,
            region_queries,
            slug_queries,
            slug_commands,
            description_commands,
            cache_commands,
        }
    }
}
