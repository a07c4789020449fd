use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgPoolOptions, Executor, Pool, Postgres, Row};

use super::FieldStore;
use crate::entities::Field;
use crate::error::{database_error, store_read_error, store_write_error, Error};

/// Order fields kept as one row per `(order_id, field)`.
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    #[tracing::instrument(name = "PgStore::new", skip(db_uri))]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await
            .map_err(database_error)?;

        // TODO: move this to migrations
        pool.execute(
            "CREATE TABLE IF NOT EXISTS order_fields (order_id VARCHAR NOT NULL, field VARCHAR NOT NULL, value VARCHAR NOT NULL, updated_at TIMESTAMPTZ NOT NULL, PRIMARY KEY (order_id, field))",
        )
        .await
        .map_err(database_error)?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl FieldStore for PgStore {
    #[tracing::instrument(skip(self))]
    async fn set_field(&self, order_id: &str, field: Field, value: String) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await.map_err(store_write_error)?;

        conn.execute(
            sqlx::query(
                "INSERT INTO order_fields (order_id, field, value, updated_at) VALUES ($1, $2, $3, $4) \
                 ON CONFLICT (order_id, field) DO UPDATE SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at",
            )
            .bind(order_id)
            .bind(field.name())
            .bind(&value)
            .bind(Utc::now()),
        )
        .await
        .map_err(store_write_error)?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get_field(&self, order_id: &str, field: Field) -> Result<Option<String>, Error> {
        let mut conn = self.pool.acquire().await.map_err(store_read_error)?;

        let maybe_result = conn
            .fetch_optional(
                sqlx::query("SELECT value FROM order_fields WHERE order_id = $1 AND field = $2")
                    .bind(order_id)
                    .bind(field.name()),
            )
            .await
            .map_err(store_read_error)?;

        match maybe_result {
            Some(row) => Ok(Some(row.try_get("value").map_err(store_read_error)?)),
            None => Ok(None),
        }
    }
}
