use async_trait::async_trait;

use crate::entities::{Coordinates, Estimate, LocationKind, Order, TravelMode};
use crate::error::Error;

#[async_trait]
pub trait OrderAPI {
    /// Stores a point for the order and, once both points are known,
    /// estimates and publishes the travel time between them.
    async fn update_location(
        &self,
        order_id: &str,
        kind: LocationKind,
        coordinates: Coordinates,
    ) -> Result<Estimate, Error>;

    /// Stores the travel mode. Nothing is estimated or published.
    async fn update_mode(&self, order_id: &str, mode: TravelMode) -> Result<(), Error>;

    async fn find_order(&self, order_id: &str) -> Result<Order, Error>;
}

pub trait API: OrderAPI {}
