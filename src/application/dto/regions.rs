use super::places::SearchResultDto;
use crate::domain::region::{Prefecture, RegionEntry};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PrefectureDto {
    pub code: u8,
    pub name: String,
    pub romaji: String,
    pub region: String,
}

impl From<&Prefecture> for PrefectureDto {
    fn from(pref: &Prefecture) -> Self {
        Self {
            code: pref.code,
            name: pref.name.clone(),
            romaji: pref.romaji.clone(),
            region: pref.region.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AreaDto {
    pub name: String,
    pub slug: String,
    pub kind: String,
    pub priority: u8,
    pub prefecture_code: Option<u8>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(default)]
    pub line_ids: Vec<String>,
}

impl From<&RegionEntry> for AreaDto {
    fn from(entry: &RegionEntry) -> Self {
        Self {
            name: entry.name.clone(),
            slug: entry.romaji.clone(),
            kind: entry.kind.as_str().to_string(),
            priority: entry.priority,
            prefecture_code: entry.prefecture_code,
            lat: entry.lat,
            lon: entry.lon,
            line_ids: entry.line_ids.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PrefectureAreasDto {
    pub prefecture: PrefectureDto,
    pub areas: Vec<AreaDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AreaSearchDto {
    pub area: AreaDto,
    #[serde(flatten)]
    pub search: SearchResultDto,
}
