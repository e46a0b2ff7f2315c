use kernel::model::{
    feedback::Feedback,
    id::{BookingId, FacilityId, FeedbackId},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct FeedbackRow {
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

impl From<FeedbackRow> for Feedback {
    fn from(value: FeedbackRow) -> Self {
        let FeedbackRow {
            feedback_id,
            booking_id,
            facility_id,
            user_name,
            rating,
            comment,
            has_issue,
            issue_details,
            created_at,
        } = value;
        Feedback {
            feedback_id,
            booking_id,
            facility_id,
            user_name,
            rating,
            comment,
            has_issue,
            issue_details,
            created_at,
        }
    }
}
