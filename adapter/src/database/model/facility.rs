use kernel::model::{
    facility::{Facility, FacilityWithVenue},
    id::{FacilityId, VenueId},
};

#[derive(sqlx::FromRow)]
pub struct VenueRow {
    pub venue_id: VenueId,
    pub name: String,
    pub location: String,
}

#[derive(sqlx::FromRow)]
pub struct FacilityRow {
    pub facility_id: FacilityId,
    pub venue_id: VenueId,
    pub name: String,
    pub category: String,
    pub capacity: i32,
}

impl From<FacilityRow> for Facility {
    fn from(value: FacilityRow) -> Self {
        let FacilityRow {
            facility_id,
            venue_id: _,
            name,
            category,
            capacity,
        } = value;
        Facility {
            facility_id,
            name,
            category,
            capacity,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct FacilityWithVenueRow {
    pub facility_id: FacilityId,
    pub name: String,
    pub category: String,
    pub capacity: i32,
    pub venue_id: VenueId,
    pub venue_name: String,
    pub location: String,
}

impl From<FacilityWithVenueRow> for FacilityWithVenue {
    fn from(value: FacilityWithVenueRow) -> Self {
        let FacilityWithVenueRow {
            facility_id,
            name,
            category,
            capacity,
            venue_id,
            venue_name,
            location,
        } = value;
        FacilityWithVenue {
            facility_id,
            name,
            category,
            capacity,
            venue_id,
            venue_name,
            location,
        }
    }
}
