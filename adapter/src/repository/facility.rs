use std::collections::HashMap;
use std::time::Duration;

use crate::cache::TtlCache;
use crate::database::{
    model::facility::{FacilityRow, FacilityWithVenueRow, VenueRow},
    ConnectionPool,
};
use async_trait::async_trait;
use kernel::model::{
    facility::{Facility, FacilityWithVenue, Venue},
    id::{FacilityId, VenueId},
};
use kernel::repository::facility::FacilityRepository;
use shared::error::{AppError, AppResult};

pub struct FacilityRepositoryImpl {
    db: ConnectionPool,
    // venue reference data changes rarely; the listing is served from a TTL
    // cache instead of hitting the store on every request
    venue_cache: TtlCache<Vec<Venue>>,
}

impl FacilityRepositoryImpl {
    pub fn new(db: ConnectionPool, venue_ttl: Duration) -> Self {
        Self {
            db,
            venue_cache: TtlCache::new(venue_ttl),
        }
    }

    async fn load_venues(&self) -> AppResult<Vec<Venue>> {
        let venue_rows: Vec<VenueRow> = sqlx::query_as(
            r#"
                SELECT venue_id, name, location
                FROM venues
                ORDER BY name ASC
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let facility_rows: Vec<FacilityRow> = sqlx::query_as(
            r#"
                SELECT facility_id, venue_id, name, category, capacity
                FROM facilities
                ORDER BY name ASC
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let mut by_venue: HashMap<VenueId, Vec<Facility>> = HashMap::new();
        for row in facility_rows {
            by_venue.entry(row.venue_id).or_default().push(row.into());
        }

        Ok(venue_rows
            .into_iter()
            .map(|row| Venue {
                facilities: by_venue.remove(&row.venue_id).unwrap_or_default(),
                venue_id: row.venue_id,
                name: row.name,
                location: row.location,
            })
            .collect())
    }
}

#[async_trait]
impl FacilityRepository for FacilityRepositoryImpl {
    async fn find_all_venues(&self) -> AppResult<Vec<Venue>> {
        if let Some(venues) = self.venue_cache.get().await {
            return Ok((*venues).clone());
        }
        let venues = self.load_venues().await?;
        self.venue_cache.put(venues.clone()).await;
        Ok(venues)
    }

    async fn find_facility_by_id(
        &self,
        facility_id: FacilityId,
    ) -> AppResult<Option<FacilityWithVenue>> {
        let row: Option<FacilityWithVenueRow> = sqlx::query_as(
            r#"
                SELECT
                f.facility_id,
                f.name,
                f.category,
                f.capacity,
                v.venue_id,
                v.name AS venue_name,
                v.location
                FROM facilities AS f
                INNER JOIN venues AS v ON f.venue_id = v.venue_id
                WHERE f.facility_id = $1
                ;
            "#,
        )
        .bind(facility_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(FacilityWithVenue::from))
    }
}
