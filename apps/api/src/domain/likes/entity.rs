use super::like_count::RawLikeCount;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A record of the remote collection as far as this service cares about it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub field_data: Map<String, Value>,
}

impl CollectionItem {
    /// The named field, tagged by its stored JSON kind.
    pub fn raw_field(&self, field: &str) -> RawLikeCount {
        RawLikeCount::from_field(self.field_data.get(field))
    }

    pub fn name(&self) -> Option<&str> {
        self.field_data.get("name").and_then(Value::as_str)
    }
}
