use std::collections::HashSet;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use super::record::MovieRecord;

/// Column positions resolved from the CSV header row.
struct Columns {
    movie_id: usize,
    title: usize,
    overview: usize,
    genres: usize,
    keywords: usize,
    rating: usize,
    budget: usize,
    production_countries: usize,
    original_language: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Columns, CatalogError> {
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(CatalogError::MissingColumn(name))
        };
        Ok(Columns {
            movie_id: position("movieId")?,
            title: position("title")?,
            overview: position("overview")?,
            genres: position("genres")?,
            keywords: position("keywords")?,
            rating: position("rating")?,
            budget: position("budget")?,
            production_countries: position("production_countries")?,
            original_language: position("original_language")?,
        })
    }
}

/// Read the catalog CSV at `path`. Rows repeating an earlier `movieId` are
/// dropped, first occurrence wins.
pub fn load_records(path: &Path) -> Result<Vec<MovieRecord>, CatalogError> {
    let reader = csv::Reader::from_path(path)
        .map_err(|e| CatalogError::Open(path.display().to_string(), e))?;
    read_records(reader)
}

pub fn read_records<R: io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<Vec<MovieRecord>, CatalogError> {
    let columns = Columns::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut duplicates = 0u64;

    for row in reader.records() {
        let row = row?;
        let field = |idx: usize| row.get(idx).unwrap_or("");

        let id = field(columns.movie_id).to_string();
        if !seen_ids.insert(id.clone()) {
            duplicates += 1;
            continue;
        }

        let tag_text = format!(
            "{} {} {}",
            field(columns.overview),
            field(columns.genres),
            field(columns.keywords)
        );

        records.push(MovieRecord {
            id,
            title: field(columns.title).to_string(),
            tag_text,
            rating: field(columns.rating).parse().ok(),
            budget: field(columns.budget).parse().ok(),
            countries: field(columns.production_countries).to_string(),
            language: field(columns.original_language).to_string(),
        });
    }

    debug!(
        "Parsed {} catalog records ({} duplicate ids dropped)",
        records.len(),
        duplicates
    );

    Ok(records)
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to open catalog file {0}: {1}")]
    Open(String, csv::Error),
    #[error("Catalog file is missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("Failed to read catalog row: {0}")]
    Row(#[from] csv::Error),
}
