use serde::Serialize;
use std::fmt;
use validator::{Validate, ValidationError};

/// Opaque reference to an item in the remote collection.
///
/// Kept exactly as received. Only blankness is checked; the store decides whether the id exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Validate)]
#[serde(transparent)]
pub struct ItemId {
    #[validate(custom(function = "not_blank"))]
    value: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl ItemId {
    pub fn new(value: impl Into<String>) -> Result<Self, validator::ValidationErrors> {
        let item_id = Self {
            value: value.into(),
        };
        item_id.validate()?;
        Ok(item_id)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
