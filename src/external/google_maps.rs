use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::DirectionsAPI;
use crate::{
    entities::{Coordinates, TravelMode},
    error::{provider_error, Error},
};

pub const DEFAULT_API_BASE: &str = "maps.googleapis.com";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Leg {
    pub duration: TextValue,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextValue {
    #[serde(default)]
    pub text: String,
    pub value: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    status: String,
    #[serde(default)]
    routes: Vec<Route>,
    error_message: Option<String>,
}

pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl GoogleMaps {
    pub fn new(client: reqwest::Client, api_base: String, api_key: String) -> Self {
        Self {
            client,
            api_base,
            api_key,
        }
    }
}

#[async_trait]
impl DirectionsAPI for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn find_routes(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TravelMode,
    ) -> Result<Vec<Route>, Error> {
        let origin: String = origin.into();
        let destination: String = destination.into();

        let url = format!("https://{}/maps/api/directions/json", self.api_base);

        let res = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(&[("origin", origin)])
            .query(&[("destination", destination)])
            .query(&[("mode", mode.name())])
            .send()
            .await
            .map_err(provider_error)?;

        let status_code = res.status().as_u16();

        if status_code != 200 {
            return Err(provider_error(format!("http status {}", status_code)));
        }

        let data: Response = res.json().await.map_err(provider_error)?;

        routes_from_response(data)
    }
}

// ZERO_RESULTS and NOT_FOUND mean the provider answered but knows no path;
// they come back as an empty route list rather than an error.
fn routes_from_response(data: Response) -> Result<Vec<Route>, Error> {
    match data.status.as_str() {
        "OK" => Ok(data.routes),
        "ZERO_RESULTS" | "NOT_FOUND" => Ok(vec![]),
        status => Err(provider_error(format!(
            "{}: {}",
            status,
            data.error_message.unwrap_or_default()
        ))),
    }
}

#[test]
fn ok_response_yields_routes() {
    let data: Response = serde_json::from_value(serde_json::json!({
        "status": "OK",
        "routes": [
            { "legs": [{ "duration": { "text": "10 mins", "value": 600 } }] },
            { "legs": [{ "duration": { "text": "12 mins", "value": 720 } }] }
        ]
    }))
    .unwrap();

    let routes = routes_from_response(data).unwrap();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].legs[0].duration.value, 600);
}

#[test]
fn zero_results_is_empty() {
    let data: Response =
        serde_json::from_value(serde_json::json!({ "status": "ZERO_RESULTS", "routes": [] }))
            .unwrap();

    assert!(routes_from_response(data).unwrap().is_empty());

    let data: Response =
        serde_json::from_value(serde_json::json!({ "status": "NOT_FOUND" })).unwrap();

    assert!(routes_from_response(data).unwrap().is_empty());
}

#[test]
fn denied_request_is_provider_error() {
    use crate::error::PROVIDER;

    let data: Response = serde_json::from_value(serde_json::json!({
        "status": "REQUEST_DENIED",
        "error_message": "The provided API key is invalid.",
        "routes": []
    }))
    .unwrap();

    assert_eq!(routes_from_response(data).unwrap_err().code, PROVIDER);
}

#[test]
fn route_without_legs_deserializes() {
    let data: Response =
        serde_json::from_value(serde_json::json!({ "status": "OK", "routes": [{}] })).unwrap();

    let routes = routes_from_response(data).unwrap();
    assert!(routes[0].legs.is_empty());
}
