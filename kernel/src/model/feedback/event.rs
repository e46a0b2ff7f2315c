use crate::model::id::{BookingId, FacilityId};
use derive_new::new;

#[derive(new)]
pub struct CreateFeedback {
    pub booking_id: BookingId,
    // denormalized from the parent booking at submission time
    pub facility_id: FacilityId,
    pub user_name: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub has_issue: bool,
    pub issue_details: Option<String>,
}
