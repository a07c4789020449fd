pub mod google_maps;
pub mod publisher;

use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;

use crate::entities::{Coordinates, TravelMode};
use crate::error::Error;

use google_maps::Route;

/// Directions provider. An empty route list means the provider answered
/// but found no path; `Err` means the call itself failed.
#[async_trait]
pub trait DirectionsAPI {
    async fn find_routes(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TravelMode,
    ) -> Result<Vec<Route>, Error>;
}

/// Downstream sink for computed travel times.
#[async_trait]
pub trait TravelTimePublisher {
    async fn publish(&self, order_id: &str, travel_time: Duration) -> Result<(), Error>;
}

pub type DynDirections = Arc<dyn DirectionsAPI + Send + Sync>;
pub type DynPublisher = Arc<dyn TravelTimePublisher + Send + Sync>;
