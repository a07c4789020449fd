use axum::extract::{Extension, Json, Path};

use crate::entities::Order;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, Error> {
    let order = api.find_order(&order_id).await?;

    Ok(order.into())
}
