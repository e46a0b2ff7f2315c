use crate::model::id::{FacilityId, VenueId};

#[derive(Debug, Clone)]
pub struct Venue {
    pub venue_id: VenueId,
    pub name: String,
    pub location: String,
    pub facilities: Vec<Facility>,
}

#[derive(Debug, Clone)]
pub struct Facility {
    pub facility_id: FacilityId,
    pub name: String,
    pub category: String,
    pub capacity: i32,
}

#[derive(Debug, Clone)]
pub struct FacilityWithVenue {
    pub facility_id: FacilityId,
    pub name: String,
    pub category: String,
    pub capacity: i32,
    pub venue_id: VenueId,
    pub venue_name: String,
    pub location: String,
}

/// The fixed bookable grid; slots are one hour wide and the text doubles as
/// the booking's `time_slot` value.
pub const TIME_SLOTS: [&str; 8] = [
    "09:00 - 10:00",
    "10:00 - 11:00",
    "11:00 - 12:00",
    "12:00 - 13:00",
    "14:00 - 15:00",
    "15:00 - 16:00",
    "16:00 - 17:00",
    "20:00 - 21:00",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::booking::slot_end_at;

    #[test]
    fn every_offered_slot_has_a_parseable_end() {
        let date = "2025-01-10".parse().unwrap();
        for slot in TIME_SLOTS {
            assert!(slot_end_at(date, slot).is_some(), "unparseable slot {slot}");
        }
    }
}
