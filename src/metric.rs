use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Distance function over embedding vectors.
///
/// Both variants are symmetric and non-negative, and return 0.0 for
/// identical vectors. The verification threshold must be calibrated
/// against the same metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// `1 - cos(a, b)`. Intended for L2-normalized embeddings, where the
    /// dot product is the cosine similarity.
    Cosine,
    /// Plain Euclidean (L2) distance.
    Euclidean,
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Cosine
    }
}

impl Metric {
    pub fn distance(&self, a: &Array1<f32>, b: &Array1<f32>) -> f32 {
        match self {
            Metric::Cosine => cosine_distance(a, b),
            Metric::Euclidean => euclidean_distance(a, b),
        }
    }
}

/// Cosine distance between two L2-normalized embeddings.
fn cosine_distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    // Simple zipped loop that LLVM can auto-vectorize
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    1.0 - dot.max(-1.0).min(1.0)
}

fn euclidean_distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    let sq: f32 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum();
    sq.sqrt()
}
