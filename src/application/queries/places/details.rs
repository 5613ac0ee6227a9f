use super::PlaceQueryService;
use crate::{
    application::{cache_keys, dto::PlaceDetailDto, error::ApplicationResult},
    domain::place::PlaceId,
};

pub struct GetPlaceDetailsQuery {
    pub place_id: String,
}

impl PlaceQueryService {
    pub async fn get_place_details(
        &self,
        query: GetPlaceDetailsQuery,
    ) -> ApplicationResult<PlaceDetailDto> {
        let id = PlaceId::new(query.place_id)?;
        let key = cache_keys::place(&id);

        if let Some(mut cached) = self.cache.get::<PlaceDetailDto>(&key).await {
            cached.cached = true;
            return Ok(cached);
        }

        let place = self.places.place_details(&id).await?;
        let detail = PlaceDetailDto::from(place);
        self.cache.put(&key, &detail, Some(self.cache_ttl)).await;
        Ok(detail)
    }
}
