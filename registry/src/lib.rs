use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::facility::FacilityRepositoryImpl;
use adapter::repository::feedback::FeedbackRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::ticket::TicketRepositoryImpl;
use kernel::repository::booking::BookingRepository;
use kernel::repository::facility::FacilityRepository;
use kernel::repository::feedback::FeedbackRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::ticket::TicketRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    feedback_repository: Arc<dyn FeedbackRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
    facility_repository: Arc<dyn FacilityRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: &AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let feedback_repository = Arc::new(FeedbackRepositoryImpl::new(pool.clone()));
        let ticket_repository = Arc::new(TicketRepositoryImpl::new(pool.clone()));
        let facility_repository = Arc::new(FacilityRepositoryImpl::new(
            pool.clone(),
            app_config.cache.venue_ttl,
        ));
        Self {
            health_check_repository,
            booking_repository,
            feedback_repository,
            ticket_repository,
            facility_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn feedback_repository(&self) -> Arc<dyn FeedbackRepository> {
        self.feedback_repository.clone()
    }

    pub fn ticket_repository(&self) -> Arc<dyn TicketRepository> {
        self.ticket_repository.clone()
    }

    pub fn facility_repository(&self) -> Arc<dyn FacilityRepository> {
        self.facility_repository.clone()
    }
}
