use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    feedback::Feedback,
    id::{BookingId, FacilityId, FeedbackId},
    ticket::TicketStatus,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    #[garde(skip)]
    pub booking_id: BookingId,
    #[garde(range(min = 1, max = 5))]
    pub rating: i32,
    #[garde(skip)]
    pub comment: Option<String>,
    #[garde(skip)]
    #[serde(default)]
    pub has_issue: bool,
    #[garde(skip)]
    pub issue_details: Option<IssueDetailsRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDetailsRequest {
    pub description: String,
    // explicit initial ticket status; defaults to `open`
    pub status: Option<TicketStatus>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackListResponse {
    pub items: Vec<FeedbackResponse>,
}

impl From<Vec<Feedback>> for FeedbackListResponse {
    fn from(value: Vec<Feedback>) -> Self {
        Self {
            items: value.into_iter().map(FeedbackResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
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

impl From<Feedback> for FeedbackResponse {
    fn from(value: Feedback) -> Self {
        let Feedback {
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
        Self {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_must_stay_within_bounds() {
        for rating in [0, 6, -1] {
            let req: CreateFeedbackRequest = serde_json::from_value(serde_json::json!({
                "bookingId": "7a2f7a60-5a6b-4c53-9e37-f6ac10d4ab3d",
                "rating": rating
            }))
            .unwrap();
            assert!(req.validate(&()).is_err(), "rating {rating} should be rejected");
        }
    }

    #[test]
    fn rating_is_required() {
        let res = serde_json::from_value::<CreateFeedbackRequest>(serde_json::json!({
            "bookingId": "7a2f7a60-5a6b-4c53-9e37-f6ac10d4ab3d"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn has_issue_defaults_to_false() {
        let req: CreateFeedbackRequest = serde_json::from_value(serde_json::json!({
            "bookingId": "7a2f7a60-5a6b-4c53-9e37-f6ac10d4ab3d",
            "rating": 4
        }))
        .unwrap();
        assert!(!req.has_issue);
        assert!(req.validate(&()).is_ok());
    }

    #[test]
    fn issue_details_accept_an_explicit_status() {
        let req: CreateFeedbackRequest = serde_json::from_value(serde_json::json!({
            "bookingId": "7a2f7a60-5a6b-4c53-9e37-f6ac10d4ab3d",
            "rating": 2,
            "hasIssue": true,
            "issueDetails": { "description": "broken lock", "status": "in-progress" }
        }))
        .unwrap();
        let details = req.issue_details.unwrap();
        assert_eq!(details.status, Some(TicketStatus::InProgress));
    }
}
