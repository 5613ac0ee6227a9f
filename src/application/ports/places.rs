// src/application/ports/places.rs
use crate::application::ApplicationResult;
use crate::domain::place::{PhotoMedia, PhotoName, Place, PlaceId};
use async_trait::async_trait;

/// Facility data provider (Google Places).
#[async_trait]
pub trait PlacesClient: Send + Sync {
    async fn text_search(&self, text: &str, max_results: u32) -> ApplicationResult<Vec<Place>>;

    async fn place_details(&self, id: &PlaceId) -> ApplicationResult<Place>;

    async fn photo(&self, name: &PhotoName, max_width: u32) -> ApplicationResult<PhotoMedia>;
}
