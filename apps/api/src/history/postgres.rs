use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::HistoryStore;
use crate::models::history::{HistoryItem, HistoryRow, NewHistoryItem};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS image_history (
    id             UUID PRIMARY KEY,
    created_at     TIMESTAMPTZ NOT NULL,
    topic          TEXT NOT NULL,
    topic_detail   TEXT,
    audience_kind  TEXT NOT NULL,
    audience_value TEXT NOT NULL,
    style          TEXT NOT NULL,
    tool           TEXT NOT NULL,
    size           TEXT NOT NULL,
    language       TEXT NOT NULL,
    decoration     TEXT NOT NULL,
    prompt         TEXT NOT NULL,
    image_url      TEXT NOT NULL
)"#;

const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS image_history_created_at_idx ON image_history (created_at DESC)";

/// History persisted in PostgreSQL.
pub struct PgHistoryStore {
    pool: PgPool,
    capacity: i64,
}

impl PgHistoryStore {
    pub fn new(pool: PgPool, capacity: usize) -> Self {
        Self {
            pool,
            capacity: i64::try_from(capacity.max(1)).unwrap_or(i64::MAX),
        }
    }

    /// Opens a connection pool and makes sure the schema exists.
    pub async fn connect(database_url: &str, capacity: usize) -> anyhow::Result<Self> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        info!("PostgreSQL connection pool established");

        let store = Self::new(pool, capacity);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Creates the history table and its index if they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_INDEX).execute(&self.pool).await?;
        info!("image_history schema ready");
        Ok(())
    }

    async fn prune(&self) -> Result<(), AppError> {
        let removed = sqlx::query(
            "DELETE FROM image_history WHERE id IN (
                SELECT id FROM image_history ORDER BY created_at DESC, id OFFSET $1
            )",
        )
        .bind(self.capacity)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if removed > 0 {
            debug!("Evicted {removed} old history items");
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn save(&self, item: NewHistoryItem) -> Result<HistoryItem, AppError> {
        let row = HistoryRow::from(&HistoryItem::from_new(item));

        let saved: HistoryRow = sqlx::query_as(
            "INSERT INTO image_history
                (id, created_at, topic, topic_detail, audience_kind, audience_value,
                 style, tool, size, language, decoration, prompt, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING *",
        )
        .bind(row.id)
        .bind(row.created_at)
        .bind(&row.topic)
        .bind(&row.topic_detail)
        .bind(&row.audience_kind)
        .bind(&row.audience_value)
        .bind(&row.style)
        .bind(&row.tool)
        .bind(&row.size)
        .bind(&row.language)
        .bind(&row.decoration)
        .bind(&row.prompt)
        .bind(&row.image_url)
        .fetch_one(&self.pool)
        .await?;

        self.prune().await?;
        Ok(saved.into())
    }

    async fn list(&self) -> Result<Vec<HistoryItem>, AppError> {
        let rows: Vec<HistoryRow> = sqlx::query_as(
            "SELECT * FROM image_history ORDER BY created_at DESC, id LIMIT $1",
        )
        .bind(self.capacity)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(HistoryItem::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<HistoryItem>, AppError> {
        let row: Option<HistoryRow> = sqlx::query_as("SELECT * FROM image_history WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(HistoryItem::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM image_history WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM image_history")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
