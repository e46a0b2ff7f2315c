use kernel::model::{
    facility::{Facility, FacilityWithVenue, Venue},
    id::{FacilityId, VenueId},
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuesResponse {
    pub items: Vec<VenueResponse>,
}

impl From<Vec<Venue>> for VenuesResponse {
    fn from(value: Vec<Venue>) -> Self {
        Self {
            items: value.into_iter().map(VenueResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueResponse {
    pub id: VenueId,
    pub name: String,
    pub location: String,
    pub facilities: Vec<FacilityResponse>,
}

impl From<Venue> for VenueResponse {
    fn from(value: Venue) -> Self {
        let Venue {
            venue_id,
            name,
            location,
            facilities,
        } = value;
        Self {
            id: venue_id,
            name,
            location,
            facilities: facilities.into_iter().map(FacilityResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityResponse {
    pub id: FacilityId,
    pub name: String,
    pub category: String,
    pub capacity: i32,
}

impl From<Facility> for FacilityResponse {
    fn from(value: Facility) -> Self {
        let Facility {
            facility_id,
            name,
            category,
            capacity,
        } = value;
        Self {
            id: facility_id,
            name,
            category,
            capacity,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityDetailResponse {
    pub id: FacilityId,
    pub name: String,
    pub category: String,
    pub capacity: i32,
    pub venue_id: VenueId,
    pub venue_name: String,
    pub location: String,
}

impl From<FacilityWithVenue> for FacilityDetailResponse {
    fn from(value: FacilityWithVenue) -> Self {
        let FacilityWithVenue {
            facility_id,
            name,
            category,
            capacity,
            venue_id,
            venue_name,
            location,
        } = value;
        Self {
            id: facility_id,
            name,
            category,
            capacity,
            venue_id,
            venue_name,
            location,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotsResponse {
    pub items: Vec<TimeSlotResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotResponse {
    pub id: String,
    pub time: String,
    pub available: bool,
}
