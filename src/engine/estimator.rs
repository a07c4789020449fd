use chrono::Duration;

use crate::{
    entities::{Coordinates, TravelMode},
    error::{no_route_found_error, Error},
    external::DynDirections,
};

/// Single attempt against the directions provider; retries are left to the
/// caller.
pub struct Estimator {
    directions: DynDirections,
}

impl Estimator {
    pub fn new(directions: DynDirections) -> Self {
        Self { directions }
    }

    /// Duration of the first leg of the first route.
    #[tracing::instrument(skip(self))]
    pub async fn estimate(
        &self,
        current: Coordinates,
        target: Coordinates,
        mode: TravelMode,
    ) -> Result<Duration, Error> {
        let routes = self.directions.find_routes(current, target, mode).await?;

        let leg = routes
            .first()
            .and_then(|route| route.legs.first())
            .ok_or_else(no_route_found_error)?;

        Ok(Duration::seconds(leg.duration.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mock::{route, MockDirections};
    use crate::error::{provider_error, NO_ROUTE_FOUND, PROVIDER};
    use crate::external::google_maps::Route;
    use std::sync::Arc;

    fn origin() -> Coordinates {
        Coordinates::new(37.1, -122.1)
    }

    fn destination() -> Coordinates {
        Coordinates::new(37.0, -122.0)
    }

    #[tokio::test]
    async fn takes_first_leg_of_first_route() {
        let directions = Arc::new(MockDirections::returning(Ok(vec![
            route(&[600, 300]),
            route(&[120]),
        ])));
        let estimator = Estimator::new(directions.clone());

        let duration = estimator
            .estimate(origin(), destination(), TravelMode::Driving)
            .await
            .unwrap();

        assert_eq!(duration, Duration::seconds(600));
        assert_eq!(
            directions.calls(),
            vec![(origin(), destination(), TravelMode::Driving)]
        );
    }

    #[tokio::test]
    async fn no_routes_is_no_route_found() {
        let estimator = Estimator::new(Arc::new(MockDirections::returning(Ok(vec![]))));

        let err = estimator
            .estimate(origin(), destination(), TravelMode::Walking)
            .await
            .unwrap_err();

        assert_eq!(err.code, NO_ROUTE_FOUND);
    }

    #[tokio::test]
    async fn route_without_legs_is_no_route_found() {
        let estimator = Estimator::new(Arc::new(MockDirections::returning(Ok(vec![Route {
            legs: vec![],
        }]))));

        let err = estimator
            .estimate(origin(), destination(), TravelMode::Walking)
            .await
            .unwrap_err();

        assert_eq!(err.code, NO_ROUTE_FOUND);
    }

    #[tokio::test]
    async fn provider_failure_is_not_retried() {
        let directions = Arc::new(MockDirections::returning(Err(provider_error("quota"))));
        let estimator = Estimator::new(directions.clone());

        let err = estimator
            .estimate(origin(), destination(), TravelMode::Transit)
            .await
            .unwrap_err();

        assert_eq!(err.code, PROVIDER);
        assert_eq!(directions.calls().len(), 1);
    }
}
