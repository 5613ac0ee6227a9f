// src/domain/slug/services.rs
use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use super::{
    clean::{MIN_SLUG_LEN, clean_romanized, truncate},
    kana::romanize_kana,
};
use crate::application::ports::{romanizer::Romanizer, util::TokenGenerator};
use crate::domain::errors::DomainResult;
use crate::domain::place::{PlaceId, Slug};
use crate::domain::region::RegionCatalog;

/// Which tier of the fallback chain produced a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlugSource {
    RegionTable,
    Romanizer,
    KanaTable,
    IdSuffix,
    Random,
}

impl fmt::Display for SlugSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SlugSource::RegionTable => "region_table",
            SlugSource::Romanizer => "romanizer",
            SlugSource::KanaTable => "kana_table",
            SlugSource::IdSuffix => "id_suffix",
            SlugSource::Random => "random",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSlug {
    pub slug: Slug,
    pub source: SlugSource,
}

/// Domain service mapping Japanese display strings to URL-safe slugs.
///
/// Tiers run in order and a tier is consulted only when the previous one is
/// unavailable or produced fewer than three characters:
/// region table, romanizer service, kana table, then the place-id suffix or
/// a random token.
pub struct SlugResolver {
    regions: Arc<RegionCatalog>,
    romanizer: Option<Arc<dyn Romanizer>>,
    tokens: Arc<dyn TokenGenerator>,
}

impl SlugResolver {
    pub fn new(
        regions: Arc<RegionCatalog>,
        romanizer: Option<Arc<dyn Romanizer>>,
        tokens: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            regions,
            romanizer,
            tokens,
        }
    }

    pub async fn resolve(
        &self,
        text: &str,
        place_id: Option<&PlaceId>,
    ) -> DomainResult<ResolvedSlug> {
        let text = text.trim();

        if let Some(slug) = self.from_region_table(text) {
            return finish(slug, SlugSource::RegionTable);
        }

        let mut candidate = String::new();

        if let Some(romanized) = self.from_romanizer(text).await {
            if romanized.len() >= MIN_SLUG_LEN {
                return finish(romanized, SlugSource::Romanizer);
            }
            candidate = romanized;
        }

        let kana = truncate(&romanize_kana(text));
        if kana.len() >= MIN_SLUG_LEN {
            return finish(kana, SlugSource::KanaTable);
        }
        if kana.len() > candidate.len() {
            candidate = kana;
        }

        self.fallback(candidate, place_id)
    }

    /// Slug for a facility: its municipality (from the address) followed by
    /// the resolved name. The municipality alone never stands in for the
    /// name, so distinct facilities in one ward stay distinct.
    pub async fn resolve_facility(
        &self,
        name: &str,
        address: Option<&str>,
        place_id: &PlaceId,
    ) -> DomainResult<ResolvedSlug> {
        let region = address
            .and_then(|addr| self.regions.lookup_address(addr))
            .filter(|entry| entry.has_valid_romaji())
            .map(|entry| entry.romaji.clone());

        let name_slug = match self.from_romanizer_or_kana(name).await {
            Some((slug, source)) => ResolvedSlug {
                slug: Slug::new(slug)?,
                source,
            },
            None => self.fallback(String::new(), Some(place_id))?,
        };

        match region {
            Some(region) if !name_slug.slug.as_str().starts_with(&region) => {
                let combined = truncate(&format!("{region}-{}", name_slug.slug));
                finish(combined, name_slug.source)
            }
            _ => Ok(name_slug),
        }
    }

    fn from_region_table(&self, text: &str) -> Option<String> {
        self.regions
            .lookup_name(text)
            .or_else(|| self.regions.lookup_address(text))
            .filter(|entry| entry.has_valid_romaji())
            .map(|entry| entry.romaji.clone())
    }

    async fn from_romanizer(&self, text: &str) -> Option<String> {
        let romanizer = self.romanizer.as_ref()?;
        match romanizer.romanize(text).await {
            Ok(raw) => Some(clean_romanized(&raw)),
            Err(err) => {
                tracing::warn!(error = %err, "romanizer unavailable, falling back to kana table");
                None
            }
        }
    }

    async fn from_romanizer_or_kana(&self, text: &str) -> Option<(String, SlugSource)> {
        if let Some(romanized) = self.from_romanizer(text).await {
            if romanized.len() >= MIN_SLUG_LEN {
                return Some((romanized, SlugSource::Romanizer));
            }
        }
        let kana = truncate(&romanize_kana(text));
        (kana.len() >= MIN_SLUG_LEN).then_some((kana, SlugSource::KanaTable))
    }

    fn fallback(&self, candidate: String, place_id: Option<&PlaceId>) -> DomainResult<ResolvedSlug> {
        let prefix = place_id.map(PlaceId::short_prefix).unwrap_or_default();
        if !prefix.is_empty() {
            let slug = if candidate.is_empty() {
                prefix
            } else {
                format!("{candidate}-{prefix}")
            };
            return finish(slug, SlugSource::IdSuffix);
        }
        if candidate.len() >= MIN_SLUG_LEN {
            return finish(candidate, SlugSource::KanaTable);
        }

        let token: String = self
            .tokens
            .random_token()
            .to_ascii_lowercase()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        let token = if token.is_empty() {
            "fallback".to_string()
        } else {
            token
        };
        finish(format!("f-{token}"), SlugSource::Random)
    }
}

fn finish(slug: String, source: SlugSource) -> DomainResult<ResolvedSlug> {
    Ok(ResolvedSlug {
        slug: Slug::new(truncate(&slug))?,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationResult, error::ApplicationError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedRomanizer(&'static str);

    #[async_trait]
    impl Romanizer for FixedRomanizer {
        async fn romanize(&self, _text: &str) -> ApplicationResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingRomanizer(AtomicUsize);

    #[async_trait]
    impl Romanizer for FailingRomanizer {
        async fn romanize(&self, _text: &str) -> ApplicationResult<String> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(ApplicationError::infrastructure("connection refused"))
        }
    }

    struct FixedToken;

    impl TokenGenerator for FixedToken {
        fn random_token(&self) -> String {
            "A1B2C3D4".into()
        }
    }

    fn resolver(romanizer: Option<Arc<dyn Romanizer>>) -> SlugResolver {
        let regions = Arc::new(RegionCatalog::builtin().unwrap());
        SlugResolver::new(regions, romanizer, Arc::new(FixedToken))
    }

    fn place() -> PlaceId {
        PlaceId::new("ChIJxyzABCD1234").unwrap()
    }

    #[tokio::test]
    async fn region_table_wins_for_address() {
        let resolved = resolver(Some(Arc::new(FixedRomanizer("ignored"))))
            .resolve("東京都練馬区谷原2丁目3-8", None)
            .await
            .unwrap();
        assert_eq!(resolved.slug.as_str(), "nerima");
        assert_eq!(resolved.source, SlugSource::RegionTable);
    }

    #[tokio::test]
    async fn romanizer_output_is_cleaned() {
        let resolved = resolver(Some(Arc::new(FixedRomanizer(" Sakura  Hall! "))))
            .resolve("さくら会館", None)
            .await
            .unwrap();
        assert_eq!(resolved.slug.as_str(), "sakura-hall");
        assert_eq!(resolved.source, SlugSource::Romanizer);
    }

    #[tokio::test]
    async fn failing_romanizer_falls_through_once() {
        let romanizer = Arc::new(FailingRomanizer(AtomicUsize::new(0)));
        let port: Arc<dyn Romanizer> = romanizer.clone();
        let resolved = resolver(Some(port))
            .resolve("さくらホール", None)
            .await
            .unwrap();
        assert_eq!(resolved.slug.as_str(), "sakurahoru");
        assert_eq!(resolved.source, SlugSource::KanaTable);
        assert_eq!(romanizer.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn short_romanizer_result_moves_to_kana() {
        let resolved = resolver(Some(Arc::new(FixedRomanizer("x"))))
            .resolve("あおぞら", None)
            .await
            .unwrap();
        assert_eq!(resolved.slug.as_str(), "aozora");
        assert_eq!(resolved.source, SlugSource::KanaTable);
    }

    #[tokio::test]
    async fn kanji_only_uses_place_id_prefix() {
        let id = place();
        let resolved = resolver(None).resolve("斎場", Some(&id)).await.unwrap();
        assert_eq!(resolved.slug.as_str(), "chijxyza");
        assert_eq!(resolved.source, SlugSource::IdSuffix);
    }

    #[tokio::test]
    async fn short_kana_gets_id_suffix() {
        let id = place();
        let resolved = resolver(None).resolve("え", Some(&id)).await.unwrap();
        assert_eq!(resolved.slug.as_str(), "e-chijxyza");
    }

    #[tokio::test]
    async fn nothing_usable_yields_random_token() {
        let resolved = resolver(None).resolve("斎場", None).await.unwrap();
        assert_eq!(resolved.slug.as_str(), "f-a1b2c3d4");
        assert_eq!(resolved.source, SlugSource::Random);
    }

    #[tokio::test]
    async fn resolution_is_deterministic() {
        let r = resolver(None);
        let id = place();
        let first = r.resolve("さくら斎場", Some(&id)).await.unwrap();
        let second = r.resolve("さくら斎場", Some(&id)).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn facility_slug_prefixes_region() {
        let id = place();
        let resolved = resolver(None)
            .resolve_facility("さくらホール", Some("東京都練馬区谷原2丁目3-8"), &id)
            .await
            .unwrap();
        assert_eq!(resolved.slug.as_str(), "nerima-sakurahoru");

        let resolved = resolver(None)
            .resolve_facility("練馬斎場", Some("東京都練馬区谷原2丁目3-8"), &id)
            .await
            .unwrap();
        assert_eq!(resolved.slug.as_str(), "nerima-chijxyza");
        assert_eq!(resolved.source, SlugSource::IdSuffix);
    }
}
