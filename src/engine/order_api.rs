use super::Engine;

use async_trait::async_trait;
use chrono::Duration;

use crate::{
    api::OrderAPI,
    entities::{Coordinates, Estimate, LocationKind, Order, TravelMode},
    error::{invalid_input_error, Error},
};

// A new current position always pushes a fresh estimate downstream. A new
// target is usually order setup, so a zero-length estimate is dropped.
fn should_publish(kind: LocationKind, travel_time: Duration) -> bool {
    match kind {
        LocationKind::Current => true,
        LocationKind::Target => travel_time > Duration::zero(),
    }
}

#[async_trait]
impl OrderAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn update_location(
        &self,
        order_id: &str,
        kind: LocationKind,
        coordinates: Coordinates,
    ) -> Result<Estimate, Error> {
        self.orders.set_point(order_id, kind, coordinates).await?;

        let current = self.orders.get_point(order_id, LocationKind::Current).await?;
        let target = self.orders.get_point(order_id, LocationKind::Target).await?;

        let (current, target) = match (current, target) {
            (Some(current), Some(target)) => (current, target),
            _ => {
                tracing::info!("order {} has only one known point, no estimate yet", order_id);
                return Ok(Estimate::unavailable(order_id));
            }
        };

        let mode = self.orders.get_mode(order_id).await?.unwrap_or_default();

        let travel_time = self.estimator.estimate(current, target, mode).await?;

        let published = should_publish(kind, travel_time);

        if published {
            self.publisher.publish(order_id, travel_time).await?;
        } else {
            tracing::debug!(
                "skipping publish of {}s for order {}",
                travel_time.num_seconds(),
                order_id
            );
        }

        Ok(Estimate {
            order_id: order_id.into(),
            travel_time: Some(travel_time),
            published,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn update_mode(&self, order_id: &str, mode: TravelMode) -> Result<(), Error> {
        self.orders.set_mode(order_id, mode).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_order(&self, order_id: &str) -> Result<Order, Error> {
        let order = Order {
            order_id: order_id.into(),
            current: self.orders.get_point(order_id, LocationKind::Current).await?,
            target: self.orders.get_point(order_id, LocationKind::Target).await?,
            mode: self.orders.get_mode(order_id).await?,
        };

        if order.is_empty() {
            return Err(invalid_input_error("unknown order"));
        }

        Ok(order)
    }
}
