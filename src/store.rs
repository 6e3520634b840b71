use crate::eval::EvalError;
use anyhow::{Context, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One precomputed embedding together with the key it was encoded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingRecord {
    pub identity: String,
    pub image: u32,
    pub vector: Vec<f32>,
}

/// Ordered, indexable collection of embedding vectors. Populated once
/// before evaluation and never mutated by it.
#[derive(Debug, Clone)]
pub struct EmbeddingStore {
    vectors: Vec<Array1<f32>>,
}

impl EmbeddingStore {
    pub fn new(vectors: Vec<Array1<f32>>) -> Self {
        Self { vectors }
    }

    /// Build a store from record vectors, in record order. All vectors
    /// must share one dimensionality.
    pub fn from_records(records: &[EmbeddingRecord]) -> Result<Self> {
        if let Some(first) = records.first() {
            let dim = first.vector.len();
            for r in records {
                if r.vector.len() != dim {
                    anyhow::bail!(
                        "embedding for {} #{} has dimension {} (expected {})",
                        r.identity,
                        r.image,
                        r.vector.len(),
                        dim
                    );
                }
            }
        }
        let vectors = records
            .iter()
            .map(|r| Array1::from_vec(r.vector.clone()))
            .collect();
        Ok(Self { vectors })
    }

    pub fn get(&self, index: usize) -> Result<&Array1<f32>, EvalError> {
        self.vectors.get(index).ok_or(EvalError::IndexOutOfRange {
            index,
            len: self.vectors.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

pub fn load_records(path: &Path) -> Result<Vec<EmbeddingRecord>> {
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(postcard::from_bytes(&data)?)
}

pub fn save_records(path: &Path, records: &[EmbeddingRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let data = postcard::to_allocvec(records)?;
    std::fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn test_get_in_bounds() {
        let store = EmbeddingStore::new(vec![arr1(&[1.0, 0.0]), arr1(&[0.0, 1.0])]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap()[1], 1.0);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let store = EmbeddingStore::new(vec![arr1(&[1.0, 0.0])]);
        match store.get(3) {
            Err(EvalError::IndexOutOfRange { index: 3, len: 1 }) => {}
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_from_records_rejects_mixed_dims() {
        let records = vec![
            EmbeddingRecord {
                identity: "a".into(),
                image: 1,
                vector: vec![1.0, 0.0],
            },
            EmbeddingRecord {
                identity: "b".into(),
                image: 1,
                vector: vec![1.0, 0.0, 0.0],
            },
        ];
        assert!(EmbeddingStore::from_records(&records).is_err());
    }
}
