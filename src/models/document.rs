use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a corpus document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where and when a poster is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub session_name: String,
    pub location: String,
    pub time: String,
    pub date: String,
}

/// Descriptive record for one poster in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub id: DocumentId,
    pub title: String,
    pub authors: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub poster_number: String,
    pub session_info: SessionInfo,
}

impl DocumentMetadata {
    /// Short single-line preview of the abstract, cut on a char boundary.
    pub fn abstract_preview(&self, max_chars: usize) -> String {
        let mut chars = self.abstract_text.chars();
        let preview: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", preview.trim_end())
        } else {
            preview
        }
    }
}
