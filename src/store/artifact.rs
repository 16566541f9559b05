//! On-disk representation of the precomputed corpus.
//!
//! The artifact is a JSON bundle with parallel `documents` and `embeddings`
//! arrays plus the model and dimension used to build it. Files ending in
//! `.gz` are gzip-decoded first. Every document field is optional at the
//! serde level so that a missing key is reported as
//! [`StoreLoadError::MissingField`] with the offending document index.

use flate2::read::GzDecoder;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::errors::StoreLoadError;
use crate::models::{DocumentId, DocumentMetadata, SessionInfo};

#[derive(Debug, Deserialize)]
pub struct RawArtifact {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub dimension: usize,
    pub documents: Vec<RawDocument>,
    pub embeddings: Vec<Vec<f32>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawDocument {
    pub id: Option<String>,
    pub poster_number: Option<serde_json::Value>,
    pub title: Option<String>,
    pub authors: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub session_info: Option<RawSessionInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSessionInfo {
    pub session_name: Option<String>,
    pub location: Option<String>,
    pub time: Option<String>,
    pub date: Option<String>,
}

/// Read and deserialize an artifact file, decompressing `.gz` files.
pub fn read_artifact(path: &Path) -> Result<RawArtifact, StoreLoadError> {
    let bytes = std::fs::read(path).map_err(|source| StoreLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_gzip = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);

    let json = if is_gzip {
        let mut decoded = Vec::new();
        GzDecoder::new(bytes.as_slice())
            .read_to_end(&mut decoded)
            .map_err(|source| StoreLoadError::Decompress {
                path: path.to_path_buf(),
                source,
            })?;
        decoded
    } else {
        bytes
    };

    parse_artifact(&json)
}

pub fn parse_artifact(json: &[u8]) -> Result<RawArtifact, StoreLoadError> {
    serde_json::from_slice(json).map_err(|e| StoreLoadError::Parse {
        message: e.to_string(),
    })
}

fn required<T>(value: Option<T>, index: usize, field: &'static str) -> Result<T, StoreLoadError> {
    value.ok_or(StoreLoadError::MissingField { index, field })
}

impl RawDocument {
    /// Validate presence of every metadata field and build the typed record.
    pub fn into_metadata(self, index: usize) -> Result<DocumentMetadata, StoreLoadError> {
        let poster_number = match required(self.poster_number, index, "poster_number")? {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            _ => {
                return Err(StoreLoadError::MissingField {
                    index,
                    field: "poster_number",
                })
            }
        };
        let title = required(self.title, index, "title")?;
        let authors = required(self.authors, index, "authors")?;
        let abstract_text = required(self.abstract_text, index, "abstract")?;
        let session = required(self.session_info, index, "session_info")?;

        let session_info = SessionInfo {
            session_name: required(session.session_name, index, "session_info.session_name")?,
            location: required(session.location, index, "session_info.location")?,
            time: required(session.time, index, "session_info.time")?,
            date: required(session.date, index, "session_info.date")?,
        };

        let id = match self.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => poster_number.clone(),
        };

        Ok(DocumentMetadata {
            id: DocumentId::new(id),
            title,
            authors,
            abstract_text,
            poster_number,
            session_info,
        })
    }
}
