//! Webflow CMS v2 collection items as an [`ItemStore`].
//!
//! Reads use `GET /collections/{collection}/items/{item}`; writes use a `PATCH` on the same
//! path carrying only the like-count field inside `fieldData`.

use crate::config::Config;
use crate::domain::likes::{
    entity::CollectionItem, errors::DomainError, item_id::ItemId, like_count::LikeCount,
    repository::ItemStore,
};
use async_trait::async_trait;
use reqwest::{Url, header::ACCEPT};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateItemRequest<'a> {
    field_data: BTreeMap<&'a str, LikeCount>,
}

pub struct WebflowItemStore {
    client: reqwest::Client,
    base_url: Url,
    collection_id: String,
    api_token: String,
}

impl WebflowItemStore {
    pub fn new(
        base_url: &str,
        collection_id: String,
        api_token: String,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid item store base URL {}: {}", base_url, e))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Item store base URL cannot carry a path: {}", base_url);
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            collection_id,
            api_token,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            &config.webflow_api_base_url,
            config.webflow_collection_id.clone(),
            config.webflow_api_token.clone(),
            Duration::from_secs(config.upstream_timeout_seconds),
        )
    }

    /// Item URL with the collection and item ids percent-encoded as single path segments.
    pub fn item_url(&self, item_id: &ItemId) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DomainError::InfrastructureError("Item store base URL cannot carry a path".into())
            })?
            .pop_if_empty()
            .extend(["collections", self.collection_id.as_str(), "items", item_id.as_str()]);
        Ok(url)
    }
}

fn transport_error(err: reqwest::Error) -> DomainError {
    if err.is_timeout() {
        tracing::warn!(reqwest_timeout = %err);
        DomainError::UpstreamUnavailable("Request timeout".into())
    } else if err.is_connect() {
        tracing::warn!(reqwest_connect = %err);
        DomainError::UpstreamUnavailable("Connection failed".into())
    } else {
        tracing::error!(reqwest_error = %err);
        DomainError::UpstreamUnavailable("Request failed".into())
    }
}

#[async_trait]
impl ItemStore for WebflowItemStore {
    async fn fetch_item(&self, item_id: &ItemId) -> Result<CollectionItem, DomainError> {
        let url = self.item_url(item_id)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Item fetch rejected");
            return Err(DomainError::UpstreamRead {
                status: status.as_u16(),
            });
        }

        response.json::<CollectionItem>().await.map_err(|e| {
            tracing::error!(decode_error = %e, "Item response was not a collection item");
            DomainError::InfrastructureError("Failed to decode item response".into())
        })
    }

    async fn update_count(
        &self,
        item_id: &ItemId,
        field: &str,
        value: LikeCount,
    ) -> Result<(), DomainError> {
        let url = self.item_url(item_id)?;
        let payload = UpdateItemRequest {
            field_data: BTreeMap::from([(field, value)]),
        };

        let response = self
            .client
            .patch(url)
            .bearer_auth(&self.api_token)
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Item update rejected");
            return Err(DomainError::UpstreamWrite {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
