use super::RegionQueryService;
use crate::application::{
    dto::{PrefectureAreasDto, PrefectureDto},
    error::{ApplicationError, ApplicationResult},
};

pub struct ListPrefectureAreasQuery {
    pub code: u8,
}

impl RegionQueryService {
    pub fn list_prefectures(&self) -> Vec<PrefectureDto> {
        self.regions.prefectures().iter().map(Into::into).collect()
    }

    pub fn list_prefecture_areas(
        &self,
        query: ListPrefectureAreasQuery,
    ) -> ApplicationResult<PrefectureAreasDto> {
        let prefecture = self
            .regions
            .prefecture(query.code)
            .ok_or_else(|| ApplicationError::not_found(format!("prefecture {}", query.code)))?;

        let areas = self
            .regions
            .entries_in_prefecture(query.code)
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(PrefectureAreasDto {
            prefecture: prefecture.into(),
            areas,
        })
    }
}
