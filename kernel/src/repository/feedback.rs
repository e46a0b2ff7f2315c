use crate::model::{
    feedback::{event::CreateFeedback, Feedback},
    id::FacilityId,
    ticket::event::CreateTicket,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    // writes the feedback and, when an issue was reported, the derived
    // ticket in the same transaction; a second submission for the same
    // booking is rejected
    async fn create(
        &self,
        event: CreateFeedback,
        ticket: Option<CreateTicket>,
    ) -> AppResult<Feedback>;
    async fn find_by_facility_id(
        &self,
        facility_id: FacilityId,
        limit: i64,
    ) -> AppResult<Vec<Feedback>>;
}
