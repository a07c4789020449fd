use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::TravelTimePublisher;
use crate::error::{publish_error, Error};

/// Body sent downstream for every published travel time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub order_id: String,
    pub travel_time_secs: i64,
    pub published_at: DateTime<Utc>,
}

impl Publication {
    pub fn new(order_id: &str, travel_time: Duration) -> Self {
        Self {
            order_id: order_id.into(),
            travel_time_secs: travel_time.num_seconds(),
            published_at: Utc::now(),
        }
    }
}

/// Writes the travel time to the log and always succeeds.
#[derive(Debug, Default)]
pub struct LogPublisher;

#[async_trait]
impl TravelTimePublisher for LogPublisher {
    #[tracing::instrument(skip(self))]
    async fn publish(&self, order_id: &str, travel_time: Duration) -> Result<(), Error> {
        tracing::info!(
            "publishing travel time for order {}: {}s",
            order_id,
            travel_time.num_seconds()
        );

        Ok(())
    }
}

/// POSTs a [`Publication`] to a downstream endpoint.
pub struct WebhookPublisher {
    client: reqwest::Client,
    url: String,
}

impl WebhookPublisher {
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl TravelTimePublisher for WebhookPublisher {
    #[tracing::instrument(skip(self))]
    async fn publish(&self, order_id: &str, travel_time: Duration) -> Result<(), Error> {
        let publication = Publication::new(order_id, travel_time);

        let res = self
            .client
            .post(&self.url)
            .json(&publication)
            .send()
            .await
            .map_err(publish_error)?;

        check_status(res.status())?;

        tracing::info!(
            "published travel time for order {}: {}s",
            order_id,
            publication.travel_time_secs
        );

        Ok(())
    }
}

// Any 2xx counts as delivered; everything else is a failed publish.
fn check_status(status: StatusCode) -> Result<(), Error> {
    if !status.is_success() {
        return Err(publish_error(format!("http status {}", status)));
    }

    Ok(())
}

#[test]
fn non_success_status_is_publish_error() {
    use crate::error::PUBLISH;

    assert!(check_status(StatusCode::OK).is_ok());
    assert!(check_status(StatusCode::ACCEPTED).is_ok());
    assert!(check_status(StatusCode::NO_CONTENT).is_ok());

    for status in [
        StatusCode::BAD_REQUEST,
        StatusCode::NOT_FOUND,
        StatusCode::INTERNAL_SERVER_ERROR,
        StatusCode::SERVICE_UNAVAILABLE,
    ] {
        assert_eq!(check_status(status).unwrap_err().code, PUBLISH, "{}", status);
    }
}

#[test]
fn log_publisher_succeeds() {
    use tokio_test::block_on;

    let result = block_on(LogPublisher.publish("A1", Duration::seconds(600)));
    assert!(result.is_ok());
}

#[test]
fn publication_body() {
    let publication = Publication::new("A1", Duration::seconds(600));
    let value = serde_json::to_value(&publication).unwrap();

    assert_eq!(value["order_id"], "A1");
    assert_eq!(value["travel_time_secs"], 600);
    assert!(value["published_at"].is_string());
}
