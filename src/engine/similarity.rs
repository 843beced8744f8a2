//! Pairwise cosine similarity over the document vectors, stored as a
//! dense row-major matrix. Building is O(n²·d) time and O(n²) memory and
//! happens once at startup; that dense matrix is the scaling ceiling for
//! catalogs beyond the tens of thousands of records.

use thiserror::Error;

use super::vectorizer::TermVector;

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute all pairwise scores. The diagonal is pinned to 1.0 and any
    /// pair involving a zero vector scores 0.0.
    pub fn build(vectors: &[TermVector]) -> SimilarityMatrix {
        let n = vectors.len();
        let norms: Vec<f64> = vectors
            .iter()
            .map(|v| v.iter().map(|x| x * x).sum::<f64>().sqrt())
            .collect();

        let mut scores = vec![0.0; n * n];
        for i in 0..n {
            scores[i * n + i] = 1.0;
            for j in (i + 1)..n {
                let score = if norms[i] == 0.0 || norms[j] == 0.0 {
                    0.0
                } else {
                    let dot: f64 = vectors[i]
                        .iter()
                        .zip(&vectors[j])
                        .map(|(a, b)| a * b)
                        .sum();
                    (dot / (norms[i] * norms[j])).clamp(0.0, 1.0)
                };
                scores[i * n + j] = score;
                scores[j * n + i] = score;
            }
        }

        SimilarityMatrix { n, scores }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.scores[i * self.n + j]
    }

    /// Every other record ranked against `index`, best first. Equal scores
    /// keep ascending record order. The queried record itself is excluded.
    pub fn neighbors(&self, index: usize) -> Result<Vec<(usize, f64)>, SimilarityError> {
        if index >= self.n {
            return Err(SimilarityError::IndexOutOfRange { index, len: self.n });
        }

        let row = &self.scores[index * self.n..(index + 1) * self.n];
        let mut ranked: Vec<(usize, f64)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(j, _)| j != index)
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        Ok(ranked)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SimilarityError {
    #[error("Record index {index} out of range for similarity matrix of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
