use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::TravelMode;
use crate::error::{invalid_input_error, Error};
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct UpdateParams {
    order_id: String,
    mode: String,
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<UpdateParams>,
) -> Result<Json<()>, Error> {
    if params.order_id.trim().is_empty() {
        return Err(invalid_input_error("order_id is required"));
    }

    let mode: TravelMode = params.mode.parse()?;

    api.update_mode(&params.order_id, mode).await?;

    Ok(().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INVALID_INPUT;
    use crate::server::handlers::test_api;

    fn params(order_id: &str, mode: &str) -> Json<UpdateParams> {
        Json(UpdateParams {
            order_id: order_id.into(),
            mode: mode.into(),
        })
    }

    #[tokio::test]
    async fn mode_is_stored() {
        let api = test_api(600);

        update(Extension(api.clone()), params("A1", "driving"))
            .await
            .unwrap();

        let order = api.find_order("A1").await.unwrap();
        assert_eq!(order.mode, Some(TravelMode::Driving));
        assert_eq!(order.current, None);
    }

    #[tokio::test]
    async fn unknown_mode_is_rejected() {
        let err = update(Extension(test_api(600)), params("A1", "teleport"))
            .await
            .unwrap_err();

        assert_eq!(err.code, INVALID_INPUT);
    }
}
