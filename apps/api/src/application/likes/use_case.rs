use crate::domain::likes::{
    errors::DomainError,
    item_id::ItemId,
    like_count::{CoercionMode, LikeCount},
    repository::ItemStore,
};
use std::sync::Arc;
use tracing::instrument;

/// Like count of one item as observed by one request.
#[derive(Debug, Clone, PartialEq)]
pub struct LikeSnapshot {
    pub item_id: ItemId,
    pub likes: LikeCount,
    pub name: Option<String>,
}

/// Reads and increments like counts held in the remote item store.
///
/// Holds no state of its own between calls; every operation re-fetches the item.
pub struct LikesUseCase {
    store: Arc<dyn ItemStore>,
    field: String,
    coercion: CoercionMode,
}

impl LikesUseCase {
    pub fn new(store: Arc<dyn ItemStore>, field: impl Into<String>, coercion: CoercionMode) -> Self {
        Self {
            store,
            field: field.into(),
            coercion,
        }
    }

    /// One fetch, no writes.
    #[instrument(skip(self, item_id), fields(item_id = %item_id))]
    pub async fn get_likes(&self, item_id: &ItemId) -> Result<LikeSnapshot, DomainError> {
        let item = self.store.fetch_item(item_id).await?;
        let raw = item.raw_field(&self.field);
        let likes = raw.coerce(self.coercion);
        tracing::debug!(?raw, %likes, "Coerced stored like count");

        Ok(LikeSnapshot {
            item_id: item_id.clone(),
            likes,
            name: item.name().map(str::to_string),
        })
    }

    /// One fetch followed by one write of `current + 1`.
    ///
    /// Not atomic: a concurrent increment of the same item between the fetch and
    /// the write is overwritten, and the returned count is only what this call wrote.
    #[instrument(skip(self, item_id), fields(item_id = %item_id))]
    pub async fn add_like(&self, item_id: &ItemId) -> Result<LikeSnapshot, DomainError> {
        let current = self.get_likes(item_id).await?;
        let next = current.likes.increment();
        tracing::debug!(previous = %current.likes, next = %next, "Writing incremented like count");

        self.store
            .update_count(item_id, &self.field, next)
            .await?;

        tracing::info!(likes = %next, "Like recorded");
        Ok(LikeSnapshot {
            likes: next,
            ..current
        })
    }
}
