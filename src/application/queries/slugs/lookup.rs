use super::SlugQueryService;
use crate::{
    application::{
        cache_keys,
        dto::PlaceIdDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::place::{ID_PREFIX_LEN, Slug},
};

pub struct GetPlaceIdBySlugQuery {
    pub slug: String,
}

pub struct GetPlaceIdByPrefixQuery {
    pub prefix: String,
}

impl SlugQueryService {
    pub async fn get_place_id_by_slug(
        &self,
        query: GetPlaceIdBySlugQuery,
    ) -> ApplicationResult<PlaceIdDto> {
        let slug = Slug::new(query.slug.trim().to_ascii_lowercase())?;
        self.lookup(&cache_keys::slug(&slug), slug.as_str()).await
    }

    pub async fn get_place_id_by_prefix(
        &self,
        query: GetPlaceIdByPrefixQuery,
    ) -> ApplicationResult<PlaceIdDto> {
        let prefix = query.prefix.trim().to_ascii_lowercase();
        if prefix.is_empty()
            || prefix.len() > ID_PREFIX_LEN
            || !prefix.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ApplicationError::validation(format!(
                "id prefix must be 1-{ID_PREFIX_LEN} alphanumeric characters"
            )));
        }
        self.lookup(&cache_keys::id_prefix(&prefix), &prefix).await
    }

    async fn lookup(&self, key: &str, label: &str) -> ApplicationResult<PlaceIdDto> {
        let place_id = self
            .store
            .get(key)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("no place mapped to '{label}'")))?;
        Ok(PlaceIdDto { place_id })
    }
}
