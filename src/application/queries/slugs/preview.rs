use super::SlugQueryService;
use crate::{
    application::{dto::SlugPreviewDto, error::ApplicationError, error::ApplicationResult},
    domain::place::PlaceId,
};

pub struct PreviewSlugQuery {
    pub text: String,
    pub place_id: Option<String>,
}

impl SlugQueryService {
    /// Run the fallback chain without storing anything.
    pub async fn preview_slug(&self, query: PreviewSlugQuery) -> ApplicationResult<SlugPreviewDto> {
        if query.text.trim().is_empty() {
            return Err(ApplicationError::validation("text must not be empty"));
        }
        let place_id = query
            .place_id
            .filter(|id| !id.trim().is_empty())
            .map(PlaceId::new)
            .transpose()?;

        let resolved = self.resolver.resolve(&query.text, place_id.as_ref()).await?;
        Ok(SlugPreviewDto {
            slug: resolved.slug.into_inner(),
            source: resolved.source.to_string(),
        })
    }
}
