use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, Estimate, LocationKind};
use crate::error::{invalid_input_error, Error};
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct UpdateParams {
    order_id: String,
    lat: f64,
    lng: f64,
}

pub async fn update_current(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<UpdateParams>,
) -> Result<Json<Estimate>, Error> {
    update(api, LocationKind::Current, params).await
}

pub async fn update_target(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<UpdateParams>,
) -> Result<Json<Estimate>, Error> {
    update(api, LocationKind::Target, params).await
}

async fn update(
    api: DynAPI,
    kind: LocationKind,
    params: UpdateParams,
) -> Result<Json<Estimate>, Error> {
    if params.order_id.trim().is_empty() {
        return Err(invalid_input_error("order_id is required"));
    }

    let coordinates = Coordinates::new(params.lat, params.lng);
    coordinates.validate()?;

    let estimate = api
        .update_location(&params.order_id, kind, coordinates)
        .await?;

    Ok(estimate.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INVALID_INPUT;
    use crate::server::handlers::test_api;

    fn params(order_id: &str, lat: f64, lng: f64) -> Json<UpdateParams> {
        Json(UpdateParams {
            order_id: order_id.into(),
            lat,
            lng,
        })
    }

    #[tokio::test]
    async fn first_point_has_no_estimate() {
        let api = test_api(600);

        let Json(estimate) = update_current(Extension(api), params("A1", 37.1, -122.1))
            .await
            .unwrap();

        assert_eq!(estimate, Estimate::unavailable("A1"));
    }

    #[tokio::test]
    async fn second_point_returns_travel_time() {
        let api = test_api(600);

        update_target(Extension(api.clone()), params("A1", 37.0, -122.0))
            .await
            .unwrap();

        let Json(estimate) = update_current(Extension(api), params("A1", 37.1, -122.1))
            .await
            .unwrap();

        assert_eq!(estimate.travel_time, Some(chrono::Duration::seconds(600)));
        assert!(estimate.published);
    }

    #[tokio::test]
    async fn out_of_range_point_is_rejected() {
        let api = test_api(600);

        let err = update_current(Extension(api.clone()), params("A1", 91.0, 0.0))
            .await
            .unwrap_err();
        assert_eq!(err.code, INVALID_INPUT);

        // nothing was stored for the rejected update
        let err = api.find_order("A1").await.unwrap_err();
        assert_eq!(err.code, INVALID_INPUT);
    }

    #[tokio::test]
    async fn blank_order_id_is_rejected() {
        let err = update_target(Extension(test_api(600)), params("  ", 1.0, 1.0))
            .await
            .unwrap_err();

        assert_eq!(err.code, INVALID_INPUT);
    }
}
