// Integration tests for loading embedding artifacts from disk

use flate2::write::GzEncoder;
use flate2::Compression;
use poster_search::store::{StoreLoadError, VectorStore};
use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

const MODEL: &str = "text-embedding-3-small";

fn document(poster_number: &str, title: &str) -> Value {
    json!({
        "poster_number": poster_number,
        "title": title,
        "authors": "J. Doe, R. Roe",
        "abstract": "We study retrieval over conference posters.",
        "session_info": {
            "session_name": "Poster Session A",
            "location": "Exhibit Hall",
            "time": "14:00-15:30",
            "date": "2024-05-02"
        }
    })
}

fn artifact() -> Value {
    json!({
        "model": MODEL,
        "dimension": 3,
        "documents": [
            document("P-101", "Graph learning for proteins"),
            document("P-102", "Federated medical imaging"),
        ],
        "embeddings": [[0.1, 0.2, 0.3], [0.0, 0.0, 0.0]]
    })
}

fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_vec(value).unwrap()).unwrap();
    path
}

fn load(value: &Value) -> Result<VectorStore, StoreLoadError> {
    let dir = TempDir::new().unwrap();
    let path = write_json(&dir, "store.json", value);
    VectorStore::load(&path, MODEL)
}

#[test]
fn test_load_valid_artifact() {
    let store = load(&artifact()).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.dimension(), 3);
    assert_eq!(store.model(), MODEL);

    let first = store.get(0).unwrap();
    assert_eq!(first.components, &[0.1f32, 0.2, 0.3][..]);
    assert_eq!(first.metadata.id.as_str(), "P-101");
    assert_eq!(first.metadata.session_info.location, "Exhibit Hall");

    // Zero vectors are kept; they simply never score above 0
    let second = store.get(1).unwrap();
    assert_eq!(second.norm, 0.0);
}

#[test]
fn test_load_gzip_artifact() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json.gz");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&serde_json::to_vec(&artifact()).unwrap())
        .unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();

    let store = VectorStore::load(&path, MODEL).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn test_corrupt_gzip_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json.gz");
    std::fs::write(&path, b"definitely not gzip").unwrap();

    assert!(matches!(
        VectorStore::load(&path, MODEL),
        Err(StoreLoadError::Decompress { .. })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let error = VectorStore::load(dir.path().join("absent.json"), MODEL).unwrap_err();

    assert!(matches!(error, StoreLoadError::Io { .. }));
    assert!(error.to_string().contains("absent.json"));
}

#[test]
fn test_empty_corpus_is_valid() {
    let store = load(&json!({
        "model": MODEL,
        "dimension": 1536,
        "documents": [],
        "embeddings": []
    }))
    .unwrap();

    assert!(store.is_empty());
    assert_eq!(store.dimension(), 1536);
}

#[test]
fn test_count_mismatch_is_rejected() {
    let mut value = artifact();
    value["embeddings"] = json!([[0.1, 0.2, 0.3]]);

    assert!(matches!(
        load(&value),
        Err(StoreLoadError::CountMismatch {
            documents: 2,
            embeddings: 1
        })
    ));
}

#[test]
fn test_wrong_vector_length_is_rejected() {
    let mut value = artifact();
    value["embeddings"][1] = json!([0.1, 0.2]);

    assert!(matches!(
        load(&value),
        Err(StoreLoadError::DimensionMismatch {
            index: 1,
            expected: 3,
            actual: 2
        })
    ));
}

#[test]
fn test_missing_metadata_field_names_document_and_field() {
    let mut value = artifact();
    value["documents"][1]["session_info"]
        .as_object_mut()
        .unwrap()
        .remove("location");

    match load(&value) {
        Err(StoreLoadError::MissingField { index, field }) => {
            assert_eq!(index, 1);
            assert_eq!(field, "session_info.location");
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut value = artifact();
    value["documents"][1]["poster_number"] = json!("P-101");

    assert!(matches!(
        load(&value),
        Err(StoreLoadError::DuplicateId { .. })
    ));
}

#[test]
fn test_explicit_id_overrides_poster_number() {
    let mut value = artifact();
    value["documents"][0]["id"] = json!("poster-graph-learning");
    value["documents"][1]["poster_number"] = json!(102);

    let store = load(&value).unwrap();
    assert_eq!(
        store.metadata(0).unwrap().id.as_str(),
        "poster-graph-learning"
    );
    assert_eq!(store.metadata(1).unwrap().poster_number, "102");
}

#[test]
fn test_model_mismatch_is_rejected() {
    let mut value = artifact();
    value["model"] = json!("text-embedding-3-large");

    match load(&value) {
        Err(StoreLoadError::ModelMismatch { expected, found }) => {
            assert_eq!(expected, MODEL);
            assert_eq!(found, "text-embedding-3-large");
        }
        other => panic!("expected ModelMismatch, got {other:?}"),
    }
}

#[test]
fn test_zero_dimension_and_missing_model_are_rejected() {
    let mut value = artifact();
    value["dimension"] = json!(0);
    assert!(matches!(load(&value), Err(StoreLoadError::ZeroDimension)));

    let mut value = artifact();
    value.as_object_mut().unwrap().remove("model");
    assert!(matches!(load(&value), Err(StoreLoadError::EmptyModel)));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, b"{\"documents\": [").unwrap();

    assert!(matches!(
        VectorStore::load(&path, MODEL),
        Err(StoreLoadError::Parse { .. })
    ));
}
