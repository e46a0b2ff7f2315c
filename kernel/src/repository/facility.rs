use crate::model::{
    facility::{FacilityWithVenue, Venue},
    id::FacilityId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait FacilityRepository: Send + Sync {
    async fn find_all_venues(&self) -> AppResult<Vec<Venue>>;
    async fn find_facility_by_id(
        &self,
        facility_id: FacilityId,
    ) -> AppResult<Option<FacilityWithVenue>>;
}
