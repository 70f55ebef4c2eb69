use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::HistoryStore;
use crate::models::history::{HistoryItem, NewHistoryItem};

/// In-process history, used when no database is configured. Newest item first.
pub struct MemoryHistoryStore {
    items: RwLock<VecDeque<HistoryItem>>,
    capacity: usize,
}

impl MemoryHistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn save(&self, item: NewHistoryItem) -> Result<HistoryItem, AppError> {
        let item = HistoryItem::from_new(item);
        let mut items = self.items.write().await;
        items.push_front(item.clone());
        if items.len() > self.capacity {
            items.truncate(self.capacity);
            debug!("History capped at {} items", self.capacity);
        }
        Ok(item)
    }

    async fn list(&self) -> Result<Vec<HistoryItem>, AppError> {
        Ok(self.items.read().await.iter().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<HistoryItem>, AppError> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .find(|item| item.id == id)
            .cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() < before)
    }

    async fn clear(&self) -> Result<(), AppError> {
        self.items.write().await.clear();
        Ok(())
    }
}
