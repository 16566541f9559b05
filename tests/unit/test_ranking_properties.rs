// Property-style tests for cosine similarity and top-k ranking over
// seeded random corpora

use poster_search::models::{DocumentId, DocumentMetadata, SessionInfo};
use poster_search::ranking::{cosine_similarity, rank, RankError};
use poster_search::store::VectorStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn metadata(i: usize) -> DocumentMetadata {
    DocumentMetadata {
        id: DocumentId::new(format!("doc{i}")),
        title: format!("Poster {i}"),
        authors: String::new(),
        abstract_text: String::new(),
        poster_number: i.to_string(),
        session_info: SessionInfo {
            session_name: String::new(),
            location: String::new(),
            time: String::new(),
            date: String::new(),
        },
    }
}

fn random_vector(rng: &mut StdRng, dimension: usize) -> Vec<f32> {
    (0..dimension).map(|_| rng.random_range(-1.0..1.0)).collect()
}

fn random_store(rng: &mut StdRng, len: usize, dimension: usize) -> VectorStore {
    let docs: Vec<_> = (0..len)
        .map(|i| (metadata(i), random_vector(rng, dimension)))
        .collect();
    VectorStore::from_documents("test-model", dimension, docs).unwrap()
}

#[test]
fn test_similarity_is_symmetric_and_bounded() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let a = random_vector(&mut rng, 16);
        let b = random_vector(&mut rng, 16);

        let ab = cosine_similarity(&a, &b);
        assert_eq!(ab, cosine_similarity(&b, &a));
        assert!((-1.0..=1.0).contains(&ab));
    }
}

#[test]
fn test_self_similarity_is_one() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let v = random_vector(&mut rng, 32);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-5);
        assert_eq!(cosine_similarity(&v, &vec![0.0; 32]), 0.0);
    }
}

#[test]
fn test_scaling_does_not_change_similarity() {
    let a = [0.3, -1.2, 4.0];
    let b = [2.0, 0.5, -0.25];
    let scaled: Vec<f32> = a.iter().map(|c| c * 1000.0).collect();

    assert!((cosine_similarity(&a, &b) - cosine_similarity(&scaled, &b)).abs() < 1e-5);
}

#[test]
fn test_large_magnitudes_keep_similarity_bounded() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
        let a: Vec<f32> = random_vector(&mut rng, 8).iter().map(|c| c * 1e30).collect();
        let b: Vec<f32> = random_vector(&mut rng, 8).iter().map(|c| c * 1e30).collect();

        let sim = cosine_similarity(&a, &b);
        assert!((-1.0..=1.0).contains(&sim), "similarity out of range: {sim}");
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn test_large_parallel_document_outranks_orthogonal_one() {
    let docs = vec![
        (metadata(0), vec![0.0, 1.0]),
        (metadata(1), vec![1e20, 0.0]),
        (metadata(2), vec![-3e38, 0.0]),
    ];
    let store = VectorStore::from_documents("test-model", 2, docs).unwrap();

    let results = rank(&[1.0, 0.0], &store, 3).unwrap();

    let order: Vec<usize> = results.iter().map(|r| r.index).collect();
    assert_eq!(order, vec![1, 0, 2]);
    assert_eq!(results[0].similarity, 1.0);
    assert_eq!(results[2].similarity, -1.0);
}

#[test]
fn test_result_length_is_min_of_k_and_corpus() {
    let mut rng = StdRng::seed_from_u64(3);
    let store = random_store(&mut rng, 25, 8);
    let query = random_vector(&mut rng, 8);

    for k in [1, 5, 24, 25, 26, 1000] {
        let results = rank(&query, &store, k).unwrap();
        assert_eq!(results.len(), k.min(25), "k = {k}");
    }
}

#[test]
fn test_results_sorted_and_match_full_ordering() {
    let mut rng = StdRng::seed_from_u64(99);
    let store = random_store(&mut rng, 200, 12);

    for _ in 0..20 {
        let query = random_vector(&mut rng, 12);
        let all = rank(&query, &store, store.len()).unwrap();
        let top = rank(&query, &store, 10).unwrap();

        assert!(all
            .windows(2)
            .all(|pair| pair[0].similarity >= pair[1].similarity));
        // Partial selection agrees with a full sort
        assert_eq!(top, all[..10].to_vec());

        let mut indices: Vec<usize> = all.iter().map(|r| r.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..200).collect::<Vec<_>>());
    }
}

#[test]
fn test_ties_break_by_ascending_index() {
    // Every vector is a power-of-two multiple of the same direction, so
    // all similarities are bit-identical
    let docs: Vec<_> = (0..12)
        .rev()
        .map(|i| {
            let scale = 2f32.powi(i as i32 % 4);
            (metadata(i), vec![scale, scale])
        })
        .collect();
    let store = VectorStore::from_documents("test-model", 2, docs).unwrap();

    let results = rank(&[3.0, 3.0], &store, 5).unwrap();

    let indices: Vec<usize> = results.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    assert!(results.iter().all(|r| r.similarity == results[0].similarity));
}

#[test]
fn test_zero_vectors_score_exactly_zero() {
    let docs = vec![
        (metadata(0), vec![0.0, 0.0, 0.0]),
        (metadata(1), vec![1.0, 2.0, 3.0]),
        (metadata(2), vec![0.0, 0.0, 0.0]),
    ];
    let store = VectorStore::from_documents("test-model", 3, docs).unwrap();

    let results = rank(&[1.0, 0.0, 0.0], &store, 3).unwrap();
    assert_eq!(results[0].index, 1);
    assert_eq!(results[1].index, 0);
    assert_eq!(results[1].similarity, 0.0);
    assert_eq!(results[2].index, 2);

    // A zero query scores everything 0 and falls back to index order
    let zero = rank(&[0.0, 0.0, 0.0], &store, 3).unwrap();
    assert!(zero.iter().all(|r| r.similarity == 0.0));
    assert_eq!(
        zero.iter().map(|r| r.index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}

#[test]
fn test_errors() {
    let mut rng = StdRng::seed_from_u64(1);
    let store = random_store(&mut rng, 3, 4);

    assert!(matches!(
        rank(&[1.0, 0.0, 0.0, 0.0], &store, 0),
        Err(RankError::InvalidInput { .. })
    ));
    assert_eq!(
        rank(&[1.0, 0.0], &store, 2),
        Err(RankError::DimensionMismatch {
            expected: 4,
            actual: 2
        })
    );

    let empty = VectorStore::from_documents("test-model", 4, Vec::new()).unwrap();
    assert!(rank(&[1.0, 0.0, 0.0, 0.0], &empty, 3).unwrap().is_empty());
    assert!(matches!(
        rank(&[1.0, 0.0, 0.0, 0.0], &empty, 0),
        Err(RankError::InvalidInput { .. })
    ));
    assert_eq!(cosine_similarity(&[1.0, 2.0, 3.0], &[1.0, 2.0]), 0.0);
}
