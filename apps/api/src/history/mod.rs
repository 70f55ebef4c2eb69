//! Image history: the most recent generated images and the choices behind them.
//!
//! Stores keep at most `capacity` items; saving beyond that evicts the oldest.
//! Listing is always newest first.

pub mod handlers;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::history::{HistoryItem, NewHistoryItem};

pub use memory::MemoryHistoryStore;
pub use postgres::PgHistoryStore;

pub const DEFAULT_CAPACITY: usize = 50;

#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn save(&self, item: NewHistoryItem) -> Result<HistoryItem, AppError>;

    async fn list(&self) -> Result<Vec<HistoryItem>, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<HistoryItem>, AppError>;

    /// Returns whether an item was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    async fn clear(&self) -> Result<(), AppError>;
}
