use crate::model::id::{BookingId, FacilityId, FeedbackId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone)]
pub struct Feedback {
    pub feedback_id: FeedbackId,
    pub booking_id: BookingId,
    pub facility_id: FacilityId,
    pub user_name: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub has_issue: bool,
    pub issue_details: Option<String>,
    pub created_at: DateTime<Utc>,
}
