use super::use_case::LikeSnapshot;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const LIKE_ADDED_MESSAGE: &str = "Like added successfully";

/// `?itemId=` on both read and increment requests.
#[derive(Debug, Default, Deserialize)]
pub struct LikesQuery {
    #[serde(rename = "itemId")]
    pub item_id: Option<String>,
}

/// JSON body accepted by the increment request.
#[derive(Debug, Default, Deserialize)]
pub struct LikeRequest {
    #[serde(rename = "itemId", default)]
    pub item_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LikesResponse {
    pub item_id: String,
    #[ts(type = "number")]
    pub likes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub message: Option<String>,
}

impl LikesResponse {
    pub fn read(snapshot: LikeSnapshot) -> Self {
        Self {
            item_id: snapshot.item_id.to_string(),
            likes: snapshot.likes.value(),
            name: snapshot.name,
            message: None,
        }
    }

    pub fn liked(snapshot: LikeSnapshot) -> Self {
        Self {
            message: Some(LIKE_ADDED_MESSAGE.to_string()),
            name: None,
            ..Self::read(snapshot)
        }
    }
}
