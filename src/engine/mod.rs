pub mod fuzzy;
pub mod recommender;
pub mod similarity;
pub mod stopwords;
pub mod vectorizer;

pub use recommender::{
    EngineError, Recommender, TitleResolution, RECOMMENDATION_COUNT, SUGGESTION_LIMIT,
};
pub use similarity::{SimilarityError, SimilarityMatrix};
pub use vectorizer::{TermVector, VectorizeError, Vocabulary};
