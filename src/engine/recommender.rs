//! The assembled recommendation engine: catalog, vocabulary, document
//! vectors and the similarity matrix, built once at startup and shared
//! read-only for the life of the process.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::catalog::CatalogStore;

use super::fuzzy;
use super::similarity::{SimilarityError, SimilarityMatrix};
use super::stopwords;
use super::vectorizer::{self, TermVector, VectorizeError, Vocabulary};

/// Distinct titles returned for a recognized query title.
pub const RECOMMENDATION_COUNT: usize = 5;
/// Fuzzy suggestions returned for an unrecognized query title.
pub const SUGGESTION_LIMIT: usize = 20;

#[derive(Debug)]
pub struct Recommender {
    catalog: CatalogStore,
    vocabulary: Vocabulary,
    vectors: Vec<TermVector>,
    similarity: SimilarityMatrix,
}

/// Outcome of a title query: either similar titles for a recognized title,
/// or fuzzy suggestions when the title is unknown.
#[derive(Debug, Clone, PartialEq)]
pub enum TitleResolution {
    Recommendations(Vec<String>),
    Suggestions(Vec<String>),
}

impl Recommender {
    /// Vectorize the catalog and compute the similarity matrix. Fails when
    /// the catalog is empty.
    pub fn build(catalog: CatalogStore, max_terms: usize) -> Result<Recommender, EngineError> {
        let documents: Vec<&str> = catalog
            .records()
            .iter()
            .map(|r| r.tag_text.as_str())
            .collect();
        let (vocabulary, vectors) =
            vectorizer::vectorize(&documents, max_terms, stopwords::english())?;
        debug!(
            "Vectorized {} records over {} terms",
            vectors.len(),
            vocabulary.len()
        );
        let similarity = SimilarityMatrix::build(&vectors);

        Ok(Recommender {
            catalog,
            vocabulary,
            vectors,
            similarity,
        })
    }

    /// Resolve a raw query title. A case-insensitive exact match walks the
    /// similarity ranking; anything else falls back to fuzzy suggestions.
    pub fn resolve_title(&self, query: &str) -> Result<TitleResolution, EngineError> {
        let normalized = query.trim().to_lowercase();

        match self.catalog.find_by_title(&normalized) {
            Some(index) => Ok(TitleResolution::Recommendations(
                self.recommend_for(index)?,
            )),
            None => {
                let suggestions = fuzzy::suggest(&normalized, self.catalog.titles(), SUGGESTION_LIMIT)
                    .into_iter()
                    .map(|(title, _)| title)
                    .collect();
                Ok(TitleResolution::Suggestions(suggestions))
            }
        }
    }

    /// The most similar distinct titles to the record at `index`. The
    /// record's own title never appears, even when other records share it.
    fn recommend_for(&self, index: usize) -> Result<Vec<String>, EngineError> {
        let neighbors = self.similarity.neighbors(index)?;

        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(self.catalog.records()[index].title.as_str());

        let mut recommended = Vec::new();
        for (candidate, _) in neighbors {
            let title = self.catalog.records()[candidate].title.as_str();
            if seen.insert(title) {
                recommended.push(title.to_string());
                if recommended.len() == RECOMMENDATION_COUNT {
                    break;
                }
            }
        }

        Ok(recommended)
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn term_vectors(&self) -> &[TermVector] {
        &self.vectors
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Vectorizer error: {0}")]
    Vectorize(#[from] VectorizeError),
    #[error("Similarity error: {0}")]
    Similarity(#[from] SimilarityError),
}
