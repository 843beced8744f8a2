use serde::{Deserialize, Serialize};

/// One catalog entry. `id` is unique after dedup; `title` is not, duplicate
/// titles are legal and only collapsed in query output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    /// Concatenated overview, genres and keywords; the document text the
    /// similarity engine vectorizes.
    pub tag_text: String,
    pub rating: Option<f64>,
    pub budget: Option<f64>,
    pub countries: String,
    pub language: String,
}
