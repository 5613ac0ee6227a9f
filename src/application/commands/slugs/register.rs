use super::SlugCommandService;
use crate::{
    application::{
        cache_keys,
        dto::SlugMappingDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        place::{PlaceId, Slug},
        slug::clean::MAX_SLUG_LEN,
    },
};

/// Numbered variants tried after `{slug}-{idPrefix}` is also taken.
const MAX_DISAMBIGUATION_ATTEMPTS: u32 = 20;

pub struct RegisterSlugCommand {
    pub place_id: String,
    pub name: String,
    pub address: Option<String>,
}

impl SlugCommandService {
    /// Bind a facility to a slug and to its id prefix.
    ///
    /// Mappings are write-once: re-registering a place whose slug already
    /// points at it returns the existing mapping unchanged.
    pub async fn register_facility_slug(
        &self,
        command: RegisterSlugCommand,
    ) -> ApplicationResult<SlugMappingDto> {
        let place_id = PlaceId::new(command.place_id)?;
        let name = command.name.trim();
        if name.is_empty() {
            return Err(ApplicationError::validation("name must not be empty"));
        }
        let address = command
            .address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty());

        let resolved = self
            .resolver
            .resolve_facility(name, address, &place_id)
            .await?;
        let id_prefix = place_id.short_prefix();

        let mut source = Some(resolved.source.to_string());
        let mut created = false;
        let mut bound = None;

        for candidate in candidates(&resolved.slug, &id_prefix) {
            let slug = Slug::new(candidate)?;
            let key = cache_keys::slug(&slug);
            if self.store.set_if_absent(&key, place_id.as_str()).await? {
                created = true;
                bound = Some(slug);
                break;
            }
            let owner = self.store.get(&key).await?;
            if owner.as_deref() == Some(place_id.as_str()) {
                source = None;
                bound = Some(slug);
                break;
            }
            tracing::debug!(slug = %slug, "slug taken by another place, trying next");
        }

        let slug = bound.ok_or_else(|| {
            ApplicationError::validation(format!(
                "could not find a free slug for '{}'",
                resolved.slug
            ))
        })?;

        self.bind_prefix(&id_prefix, &place_id).await?;

        if created {
            tracing::info!(slug = %slug, place_id = %place_id, "registered facility slug");
        }

        Ok(SlugMappingDto {
            slug: slug.into_inner(),
            place_id: place_id.into_inner(),
            id_prefix,
            source,
            created,
        })
    }

    async fn bind_prefix(&self, id_prefix: &str, place_id: &PlaceId) -> ApplicationResult<()> {
        if id_prefix.is_empty() {
            return Ok(());
        }
        let key = cache_keys::id_prefix(id_prefix);
        if self.store.set_if_absent(&key, place_id.as_str()).await? {
            return Ok(());
        }
        let owner = self.store.get(&key).await?;
        if owner.as_deref() != Some(place_id.as_str()) {
            tracing::warn!(
                id_prefix,
                place_id = %place_id,
                existing = owner.as_deref().unwrap_or_default(),
                "id prefix already bound to another place"
            );
        }
        Ok(())
    }
}

/// The base slug, then `{base}-{idPrefix}`, then numbered variants of that.
fn candidates(base: &Slug, id_prefix: &str) -> Vec<String> {
    let base = base.as_str();
    let mut out = vec![base.to_string()];
    if id_prefix.is_empty() || base.ends_with(id_prefix) {
        for n in 2..=MAX_DISAMBIGUATION_ATTEMPTS {
            out.push(with_suffix(base, &n.to_string()));
        }
        return out;
    }
    let qualified = with_suffix(base, id_prefix);
    out.push(qualified.clone());
    for n in 2..=MAX_DISAMBIGUATION_ATTEMPTS {
        out.push(with_suffix(&qualified, &n.to_string()));
    }
    out
}

fn with_suffix(base: &str, suffix: &str) -> String {
    let room = MAX_SLUG_LEN.saturating_sub(suffix.len() + 1);
    let head = if base.len() > room {
        base[..room].trim_end_matches('-')
    } else {
        base
    };
    format!("{head}-{suffix}")
}
