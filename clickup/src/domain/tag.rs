use serde::{Deserialize, Serialize};

/// A tag attached to a time entry or to its task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub tag_fg: Option<String>,
    #[serde(default)]
    pub tag_bg: Option<String>,
    #[serde(default)]
    pub creator: Option<i64>,
}

impl Tag {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag_fg: None,
            tag_bg: None,
            creator: None,
        }
    }
}
