mod estimator;
#[cfg(test)]
pub(crate) mod mock;
mod order_api;
mod order_store;

pub use estimator::Estimator;
pub use order_store::OrderStore;

use crate::{api::API, db::DynStore, external::DynDirections, external::DynPublisher};

pub struct Engine {
    orders: OrderStore,
    estimator: Estimator,
    publisher: DynPublisher,
}

impl Engine {
    pub fn new(store: DynStore, directions: DynDirections, publisher: DynPublisher) -> Self {
        Self {
            orders: OrderStore::new(store),
            estimator: Estimator::new(directions),
            publisher,
        }
    }
}

impl API for Engine {}
