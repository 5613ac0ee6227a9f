// src/domain/region/catalog.rs
use super::entity::{Prefecture, RegionEntry, is_slug_text};
use crate::domain::errors::{DomainError, DomainResult};
use regex::Regex;
use std::{collections::HashMap, sync::LazyLock};

const BUILTIN_REGIONS: &str = include_str!("../../../data/regions.json");
const BUILTIN_PREFECTURES: &str = include_str!("../../../data/prefectures.json");

/// Trailing administrative suffixes ignored when matching names, in kanji
/// and in hiragana. Longer readings come before the one-character ones.
const ADMIN_SUFFIXES: &[&str] = &[
    "駅", "市", "区", "町", "村", "郡", "ちょう", "えき", "まち", "むら", "ぐん", "し", "く",
];

static PREFECTURE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:東京都|北海道|京都府|大阪府|\p{Han}{2,3}県)").expect("prefecture regex")
});

static COUNTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s0-9０-９\-－]+?郡").expect("county regex"));

static MUNICIPALITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s0-9０-９\-－]+?[市区町村]").expect("municipality regex")
});

/// Immutable lookup table of regions and prefectures.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    entries: Vec<RegionEntry>,
    prefectures: Vec<Prefecture>,
    by_name: HashMap<String, Vec<usize>>,
    by_romaji: HashMap<String, Vec<usize>>,
}

impl RegionCatalog {
    /// The tables shipped with the crate.
    pub fn builtin() -> DomainResult<Self> {
        Self::from_json(BUILTIN_REGIONS, BUILTIN_PREFECTURES)
    }

    pub fn from_json(regions: &str, prefectures: &str) -> DomainResult<Self> {
        let entries: Vec<RegionEntry> = serde_json::from_str(regions)
            .map_err(|err| DomainError::InvalidData(format!("regions: {err}")))?;
        let prefectures: Vec<Prefecture> = serde_json::from_str(prefectures)
            .map_err(|err| DomainError::InvalidData(format!("prefectures: {err}")))?;
        Ok(Self::new(entries, prefectures))
    }

    pub fn new(entries: Vec<RegionEntry>, mut prefectures: Vec<Prefecture>) -> Self {
        prefectures.sort_by_key(|p| p.code);

        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_romaji: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            let full = entry.name.trim().to_string();
            let stripped = strip_admin_suffix(&full).to_string();
            by_name.entry(full.clone()).or_default().push(idx);
            if stripped != full && !stripped.is_empty() {
                by_name.entry(stripped).or_default().push(idx);
            }
            if !entry.romaji.is_empty() {
                by_romaji.entry(entry.romaji.clone()).or_default().push(idx);
            }
        }

        Self {
            entries,
            prefectures,
            by_name,
            by_romaji,
        }
    }

    pub fn entries(&self) -> &[RegionEntry] {
        &self.entries
    }

    pub fn prefectures(&self) -> &[Prefecture] {
        &self.prefectures
    }

    pub fn prefecture(&self, code: u8) -> Option<&Prefecture> {
        self.prefectures.iter().find(|p| p.code == code)
    }

    /// Exact name first, then the name with its administrative suffix removed.
    pub fn lookup_name(&self, name: &str) -> Option<&RegionEntry> {
        self.lookup_name_in(name, None)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&RegionEntry> {
        self.best_of(self.by_romaji.get(slug), None)
    }

    /// Entries of a prefecture ordered by priority, then romaji.
    pub fn entries_in_prefecture(&self, code: u8) -> Vec<&RegionEntry> {
        let mut found: Vec<&RegionEntry> = self
            .entries
            .iter()
            .filter(|e| e.prefecture_code == Some(code))
            .collect();
        found.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| a.romaji.cmp(&b.romaji))
        });
        found
    }

    /// Find the municipality named in a postal address, e.g.
    /// `東京都練馬区谷原2丁目3-8` resolves to the `練馬区` entry and
    /// `北海道上川郡東川町` to `東川町`. When the address names its prefecture,
    /// only entries of that prefecture match.
    pub fn lookup_address(&self, address: &str) -> Option<&RegionEntry> {
        let address = address.trim();
        let prefecture = self.prefecture_of(address);
        let rest = strip_prefecture(address);

        self.municipality_prefix(rest, prefecture)
            .or_else(|| {
                let after_county = strip_county(rest)?;
                self.municipality_prefix(after_county, prefecture)
            })
            .or_else(|| {
                let token = extract_municipality(address)?;
                self.lookup_name_in(token, prefecture)
            })
    }

    /// Entries whose romaji is empty or outside `[a-z0-9-]`.
    pub fn invalid_entries(&self) -> Vec<&RegionEntry> {
        self.entries
            .iter()
            .filter(|e| !is_slug_text(&e.romaji))
            .collect()
    }

    fn lookup_name_in(&self, name: &str, prefecture: Option<u8>) -> Option<&RegionEntry> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.best_of(self.by_name.get(name), prefecture)
            .or_else(|| self.best_of(self.by_name.get(strip_admin_suffix(name)), prefecture))
    }

    /// Every prefix ending in an administrative suffix is a candidate; the
    /// shortest one present in the table wins.
    fn municipality_prefix(&self, rest: &str, prefecture: Option<u8>) -> Option<&RegionEntry> {
        for (idx, ch) in rest.char_indices() {
            if ch.is_ascii_digit() || ch.is_whitespace() {
                break;
            }
            if matches!(ch, '市' | '区' | '町' | '村') {
                let end = idx + ch.len_utf8();
                if let Some(entry) = self.best_of(self.by_name.get(&rest[..end]), prefecture) {
                    return Some(entry);
                }
            }
        }
        None
    }

    fn prefecture_of(&self, address: &str) -> Option<u8> {
        let name = PREFECTURE_PREFIX.find(address)?.as_str();
        self.prefectures.iter().find(|p| p.name == name).map(|p| p.code)
    }

    /// Lowest priority number wins. With a prefecture given, entries of other
    /// prefectures are skipped.
    fn best_of(
        &self,
        indices: Option<&Vec<usize>>,
        prefecture: Option<u8>,
    ) -> Option<&RegionEntry> {
        indices?
            .iter()
            .filter_map(|&idx| self.entries.get(idx))
            .filter(|e| {
                prefecture.is_none_or(|wanted| e.prefecture_code.is_none_or(|code| code == wanted))
            })
            .min_by_key(|e| (e.priority, e.kind))
    }
}

/// Remove one trailing administrative suffix, keeping at least one character.
pub fn strip_admin_suffix(name: &str) -> &str {
    for suffix in ADMIN_SUFFIXES {
        if let Some(stripped) = name.strip_suffix(suffix) {
            if !stripped.is_empty() {
                return stripped;
            }
        }
    }
    name
}

pub fn strip_prefecture(address: &str) -> &str {
    match PREFECTURE_PREFIX.find(address) {
        Some(m) => &address[m.end()..],
        None => address,
    }
}

/// The address with a leading county (`…郡`) removed, if it has one.
fn strip_county(rest: &str) -> Option<&str> {
    COUNTY.find(rest).map(|m| &rest[m.end()..])
}

/// First `…市|区|町|村` token after the prefecture.
pub fn extract_municipality(address: &str) -> Option<&str> {
    let rest = strip_prefecture(address.trim());
    MUNICIPALITY.find(rest).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::region::RegionKind;

    fn catalog() -> RegionCatalog {
        RegionCatalog::builtin().expect("builtin tables parse")
    }

    #[test]
    fn builtin_romaji_is_slug_safe() {
        let catalog = catalog();
        assert!(!catalog.entries().is_empty());
        assert!(catalog.invalid_entries().is_empty());
        for pref in catalog.prefectures() {
            assert!(is_slug_text(&pref.romaji), "{}", pref.name);
        }
    }

    #[test]
    fn forty_seven_prefectures() {
        let catalog = catalog();
        assert_eq!(catalog.prefectures().len(), 47);
        assert_eq!(catalog.prefecture(13).map(|p| p.romaji.as_str()), Some("tokyo"));
    }

    #[test]
    fn lookup_strips_suffix() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_name("練馬区").unwrap().romaji, "nerima");
        assert_eq!(catalog.lookup_name("練馬").unwrap().romaji, "nerima");
        assert_eq!(catalog.lookup_name("八王子").unwrap().romaji, "hachioji");
        assert!(catalog.lookup_name("").is_none());
    }

    #[test]
    fn hiragana_suffix_is_stripped() {
        assert_eq!(strip_admin_suffix("ねりまく"), "ねりま");
        assert_eq!(strip_admin_suffix("しぶやえき"), "しぶや");
        assert_eq!(strip_admin_suffix("く"), "く");
    }

    #[test]
    fn lower_priority_number_wins_on_shared_name() {
        let catalog = catalog();
        // 新宿区 (municipality, 1) and 新宿駅 (station, 3) both strip to 新宿.
        let entry = catalog.lookup_name("新宿").unwrap();
        assert_eq!(entry.name, "新宿区");
    }

    #[test]
    fn address_resolves_to_ward() {
        let catalog = catalog();
        let entry = catalog.lookup_address("東京都練馬区谷原2丁目3-8").unwrap();
        assert_eq!(entry.name, "練馬区");
        assert_eq!(entry.romaji, "nerima");
    }

    #[test]
    fn address_with_city_named_after_suffix() {
        let catalog = catalog();
        let entry = catalog.lookup_address("三重県四日市市諏訪町1-5").unwrap();
        assert_eq!(entry.romaji, "yokkaichi");
        let entry = catalog.lookup_address("千葉県市川市八幡1-1-1").unwrap();
        assert_eq!(entry.romaji, "ichikawa");
    }

    #[test]
    fn extract_municipality_token() {
        assert_eq!(extract_municipality("東京都練馬区谷原2丁目3-8"), Some("練馬区"));
        assert_eq!(extract_municipality("神奈川県横浜市青葉区"), Some("横浜市"));
        assert_eq!(extract_municipality("123"), None);
    }

    #[test]
    fn every_entry_is_reachable_by_its_slug() {
        let catalog = catalog();
        for entry in catalog.entries() {
            let found = catalog.find_by_slug(&entry.romaji).unwrap();
            assert_eq!(found.name, entry.name, "slug {}", entry.romaji);
            assert_eq!(found.prefecture_code, entry.prefecture_code);
        }
    }

    #[test]
    fn every_prefecture_has_municipalities() {
        let catalog = catalog();
        for pref in catalog.prefectures() {
            let entries = catalog.entries_in_prefecture(pref.code);
            assert!(
                entries.iter().any(|e| e.kind == RegionKind::Municipality),
                "{} has no municipalities",
                pref.name
            );
        }
        let municipalities = catalog
            .entries()
            .iter()
            .filter(|e| e.kind == RegionKind::Municipality)
            .count();
        assert_eq!(municipalities, 1741);
    }

    #[test]
    fn stations_have_their_own_slug() {
        let catalog = catalog();
        assert_eq!(catalog.find_by_slug("nerima").unwrap().name, "練馬区");
        assert_eq!(catalog.find_by_slug("nerima-eki").unwrap().name, "練馬駅");
        assert_eq!(catalog.find_by_slug("ikebukuro").unwrap().kind, RegionKind::Area);
        assert_eq!(catalog.find_by_slug("ikebukuro-eki").unwrap().kind, RegionKind::Station);
    }

    #[test]
    fn shared_name_resolves_within_address_prefecture() {
        let catalog = catalog();
        let tokyo = catalog.lookup_address("東京都府中市宮西町2-24").unwrap();
        assert_eq!((tokyo.romaji.as_str(), tokyo.prefecture_code), ("fuchu", Some(13)));
        let hiroshima = catalog.lookup_address("広島県府中市府川町315").unwrap();
        assert_eq!(hiroshima.prefecture_code, Some(34));
        assert_eq!(hiroshima.name, "府中市");
        // 東村 is an Okinawa village; it must not shadow 東村山市.
        let entry = catalog.lookup_address("東京都東村山市本町1-2-3").unwrap();
        assert_eq!(entry.romaji, "higashimurayama");
    }

    #[test]
    fn county_is_skipped_in_address() {
        let catalog = catalog();
        let entry = catalog.lookup_address("北海道上川郡東川町東町1-16-1").unwrap();
        assert_eq!(entry.name, "東川町");
        let entry = catalog.lookup_address("奈良県大和郡山市北郡山町248-4").unwrap();
        assert_eq!(entry.romaji, "yamatokoriyama");
        let entry = catalog.lookup_address("佐賀県杵島郡大町町大字大町5017").unwrap();
        assert_eq!(entry.prefecture_code, Some(41));
    }

    #[test]
    fn prefecture_listing_is_ordered() {
        let catalog = catalog();
        let tokyo = catalog.entries_in_prefecture(13);
        assert!(tokyo.len() > 20);
        assert!(tokyo.windows(2).all(|w| w[0].priority <= w[1].priority));
    }
}
