use crate::{
    db::DynStore,
    entities::{Coordinates, Field, LocationKind, TravelMode},
    error::{malformed_mode_error, Error},
};

/// Typed access to an order's fields. Values stay textual in the store and
/// are parsed here, right after they are read.
pub struct OrderStore {
    store: DynStore,
}

impl OrderStore {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_point(
        &self,
        order_id: &str,
        kind: LocationKind,
        coordinates: Coordinates,
    ) -> Result<(), Error> {
        self.store
            .set_field(order_id, kind.into(), coordinates.into())
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_point(
        &self,
        order_id: &str,
        kind: LocationKind,
    ) -> Result<Option<Coordinates>, Error> {
        match self.store.get_field(order_id, kind.into()).await? {
            Some(value) => Ok(Some(value.parse()?)),
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_mode(&self, order_id: &str, mode: TravelMode) -> Result<(), Error> {
        self.store
            .set_field(order_id, Field::Mode, mode.name().into())
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_mode(&self, order_id: &str) -> Result<Option<TravelMode>, Error> {
        match self.store.get_field(order_id, Field::Mode).await? {
            Some(value) => Ok(Some(
                value
                    .parse::<TravelMode>()
                    .map_err(|_| malformed_mode_error(&value))?,
            )),
            None => Ok(None),
        }
    }
}
