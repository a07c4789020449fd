//! Recording stand-ins for the directions provider and the publisher.

use async_trait::async_trait;
use chrono::Duration;
use std::sync::Mutex;

use crate::{
    entities::{Coordinates, TravelMode},
    error::Error,
    external::{
        google_maps::{Leg, Route, TextValue},
        DirectionsAPI, TravelTimePublisher,
    },
};

pub fn route(leg_seconds: &[i64]) -> Route {
    Route {
        legs: leg_seconds
            .iter()
            .map(|seconds| Leg {
                duration: TextValue {
                    text: format!("{} secs", seconds),
                    value: *seconds,
                },
            })
            .collect(),
    }
}

pub struct MockDirections {
    result: Result<Vec<Route>, Error>,
    calls: Mutex<Vec<(Coordinates, Coordinates, TravelMode)>>,
}

impl MockDirections {
    pub fn returning(result: Result<Vec<Route>, Error>) -> Self {
        Self {
            result,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn seconds(seconds: i64) -> Self {
        Self::returning(Ok(vec![route(&[seconds])]))
    }

    pub fn calls(&self) -> Vec<(Coordinates, Coordinates, TravelMode)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectionsAPI for MockDirections {
    async fn find_routes(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TravelMode,
    ) -> Result<Vec<Route>, Error> {
        self.calls.lock().unwrap().push((origin, destination, mode));
        self.result.clone()
    }
}

#[derive(Default)]
pub struct MockPublisher {
    failure: Option<Error>,
    published: Mutex<Vec<(String, Duration)>>,
}

impl MockPublisher {
    pub fn failing(err: Error) -> Self {
        Self {
            failure: Some(err),
            published: Mutex::new(vec![]),
        }
    }

    pub fn published(&self) -> Vec<(String, Duration)> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl TravelTimePublisher for MockPublisher {
    async fn publish(&self, order_id: &str, travel_time: Duration) -> Result<(), Error> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        self.published
            .lock()
            .unwrap()
            .push((order_id.to_string(), travel_time));

        Ok(())
    }
}
