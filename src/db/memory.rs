use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::FieldStore;
use crate::entities::Field;
use crate::error::Error;

/// Process-local store for tests and local runs. Nothing survives a restart
/// and nothing is shared between replicas.
#[derive(Default)]
pub struct MemoryStore {
    orders: RwLock<HashMap<String, HashMap<Field, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FieldStore for MemoryStore {
    #[tracing::instrument(skip(self))]
    async fn set_field(&self, order_id: &str, field: Field, value: String) -> Result<(), Error> {
        let mut orders = self.orders.write().await;

        orders
            .entry(order_id.to_string())
            .or_default()
            .insert(field, value);

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get_field(&self, order_id: &str, field: Field) -> Result<Option<String>, Error> {
        let orders = self.orders.read().await;

        Ok(orders
            .get(order_id)
            .and_then(|fields| fields.get(&field))
            .cloned())
    }
}

#[tokio::test]
async fn set_then_get() {
    let store = MemoryStore::new();

    store
        .set_field("A1", Field::Current, "1.000000,2.000000".into())
        .await
        .unwrap();

    let value = store.get_field("A1", Field::Current).await.unwrap();
    assert_eq!(value.as_deref(), Some("1.000000,2.000000"));
}

#[tokio::test]
async fn unwritten_fields_are_absent() {
    let store = MemoryStore::new();

    assert_eq!(store.get_field("A1", Field::Target).await.unwrap(), None);

    store
        .set_field("A1", Field::Current, "1.0,2.0".into())
        .await
        .unwrap();

    assert_eq!(store.get_field("A1", Field::Target).await.unwrap(), None);
    assert_eq!(store.get_field("B2", Field::Current).await.unwrap(), None);
}

#[tokio::test]
async fn set_overwrites_previous_value() {
    let store = MemoryStore::new();

    store.set_field("A1", Field::Mode, "walking".into()).await.unwrap();
    store.set_field("A1", Field::Mode, "driving".into()).await.unwrap();

    let value = store.get_field("A1", Field::Mode).await.unwrap();
    assert_eq!(value.as_deref(), Some("driving"));
}
