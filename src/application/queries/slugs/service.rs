use std::sync::Arc;

use crate::{application::ports::cache::CacheStore, domain::slug::SlugResolver};

pub struct SlugQueryService {
    pub(super) store: Arc<dyn CacheStore>,
    pub(super) resolver: Arc<SlugResolver>,
}

impl SlugQueryService {
    pub fn new(store: Arc<dyn CacheStore>, resolver: Arc<SlugResolver>) -> Self {
        Self { store, resolver }
    }
}
