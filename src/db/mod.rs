mod memory;
mod postgres;

use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::Field;
use crate::error::Error;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Raw per-order field access. A field that was never written reads back as
/// `Ok(None)`; `Err` is reserved for the store itself failing.
#[async_trait]
pub trait FieldStore {
    async fn set_field(&self, order_id: &str, field: Field, value: String) -> Result<(), Error>;
    async fn get_field(&self, order_id: &str, field: Field) -> Result<Option<String>, Error>;
}

pub type DynStore = Arc<dyn FieldStore + Send + Sync>;
