use super::{entity::CollectionItem, errors::DomainError, item_id::ItemId, like_count::LikeCount};
use async_trait::async_trait;

/// Remote collection-item store.
///
/// There is no increment or compare-and-swap primitive: callers that read a
/// value and write it back can lose concurrent updates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn fetch_item(&self, item_id: &ItemId) -> Result<CollectionItem, DomainError>;

    /// Partial update touching only `field`.
    async fn update_count(
        &self,
        item_id: &ItemId,
        field: &str,
        value: LikeCount,
    ) -> Result<(), DomainError>;
}
