use super::{DescriptionCommandService, prompt::description_prompt};
use crate::{
    application::{
        cache_keys,
        dto::{DescriptionDto, FacilityProfileDto, PlaceDetailDto},
        error::{ApplicationError, ApplicationResult},
        queries::places::GetPlaceDetailsQuery,
    },
    domain::{
        insight::{FacilityProfile, assess, parse_facility_sections, sanitize_generated},
        place::PlaceId,
    },
};

pub const MAX_GENERATION_ATTEMPTS: u32 = 2;

pub struct GetDescriptionCommand {
    pub place_id: String,
    /// Ignore any cached description and generate a new one.
    pub force_refresh: bool,
}

struct Generated {
    text: String,
    profile: Option<FacilityProfile>,
}

impl DescriptionCommandService {
    /// Cached description of a facility, generated on a miss.
    ///
    /// Output that fails the quality checks on every attempt is still
    /// returned, marked degraded, but never cached.
    pub async fn get_description(
        &self,
        command: GetDescriptionCommand,
    ) -> ApplicationResult<DescriptionDto> {
        let id = PlaceId::new(command.place_id)?;
        let key = cache_keys::description(&id);

        if !command.force_refresh {
            if let Some(mut cached) = self.cache.get::<DescriptionDto>(&key).await {
                cached.cached = true;
                return Ok(cached);
            }
        }

        let place = self
            .place_queries
            .get_place_details(GetPlaceDetailsQuery {
                place_id: id.as_str().to_string(),
            })
            .await?;

        let (generated, degraded) = self.generate_checked(&place).await?;
        let description = DescriptionDto {
            place_id: id.as_str().to_string(),
            name: place.name,
            text: generated.text,
            profile: generated.profile.map(FacilityProfileDto::from),
            model: self.generator.model().to_string(),
            generated_at: self.clock.now(),
            cached: false,
            degraded,
        };

        if degraded {
            tracing::warn!(place_id = %id, "returning degraded description without caching");
        } else {
            self.cache.put(&key, &description, None).await;
            tracing::info!(place_id = %id, "description generated and cached");
        }
        Ok(description)
    }

    async fn generate_checked(
        &self,
        place: &PlaceDetailDto,
    ) -> ApplicationResult<(Generated, bool)> {
        let prompt = description_prompt(place);
        let mut fallback: Option<String> = None;
        let mut last_error: Option<ApplicationError> = None;

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let raw = match self.generator.generate(&prompt).await {
                Ok(raw) => raw,
                Err(err) => {
                    tracing::warn!(attempt, error = %err, "description generation failed");
                    last_error = Some(err);
                    continue;
                }
            };

            let text = sanitize_generated(&raw);
            if text.is_empty() {
                tracing::warn!(attempt, "model returned empty output");
                continue;
            }

            match assess(&text) {
                Ok(()) => return Ok((split_output(&text, &place.name), false)),
                Err(issue) => {
                    tracing::warn!(attempt, %issue, "generated description rejected");
                    fallback = Some(text);
                }
            }
        }

        match (fallback, last_error) {
            (Some(text), _) => Ok((split_output(&text, &place.name), true)),
            (None, Some(err)) => Err(err),
            (None, None) => Err(ApplicationError::generation("model returned empty output")),
        }
    }
}

/// Overview prose before the first section heading, plus the profile
/// section best matching the facility name.
fn split_output(text: &str, name: &str) -> Generated {
    let mut sections = parse_facility_sections(text);

    let overview = text
        .find("\n###")
        .map(|idx| text[..idx].trim())
        .filter(|head| !head.is_empty() && !text.trim_start().starts_with("###"))
        .unwrap_or(text)
        .to_string();

    let matching = sections
        .keys()
        .find(|title| title.contains(name) || name.contains(title.as_str()))
        .cloned();
    let profile = match matching {
        Some(title) => sections.remove(&title),
        None => sections.into_values().next(),
    };

    Generated {
        text: overview,
        profile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_output_separates_overview_and_profile() {
        let text = "さくら会館は練馬区の斎場です。\n\n### 別の施設\n- 住所: 某所\n### さくら会館\n- 電話番号: 03-0000-0000";
        let out = split_output(text, "さくら会館");
        assert_eq!(out.text, "さくら会館は練馬区の斎場です。");
        let profile = out.profile.unwrap();
        assert_eq!(profile.title, "さくら会館");
        assert_eq!(profile.phone.as_deref(), Some("03-0000-0000"));
    }

    #[test]
    fn split_output_without_sections_keeps_whole_text() {
        let out = split_output("概要のみの文章です。", "さくら会館");
        assert_eq!(out.text, "概要のみの文章です。");
        assert!(out.profile.is_none());
    }

    #[test]
    fn split_output_starting_with_section_keeps_text() {
        let text = "### さくら会館\n- 住所: 東京都";
        let out = split_output(text, "さくら会館");
        assert_eq!(out.text, text);
        assert!(out.profile.is_some());
    }
}
