use super::PlaceQueryService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::place::{PhotoMedia, PhotoName},
};

pub const DEFAULT_PHOTO_WIDTH: u32 = 800;
pub const MAX_PHOTO_WIDTH: u32 = 4800;

pub struct GetPhotoQuery {
    pub name: String,
    pub max_width: Option<u32>,
}

impl PlaceQueryService {
    /// Photo bytes are proxied as-is; they are not stored in the cache.
    pub async fn get_photo(&self, query: GetPhotoQuery) -> ApplicationResult<PhotoMedia> {
        let name = PhotoName::new(query.name)?;
        let width = query.max_width.unwrap_or(DEFAULT_PHOTO_WIDTH);
        if width == 0 || width > MAX_PHOTO_WIDTH {
            return Err(ApplicationError::validation(format!(
                "max_width must be between 1 and {MAX_PHOTO_WIDTH}"
            )));
        }
        self.places.photo(&name, width).await
    }
}
