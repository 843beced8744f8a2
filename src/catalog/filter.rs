//! Range and categorical filters over the catalog. Each filter returns
//! titles in catalog order with duplicate titles collapsed to the first
//! occurrence. Records without a parseable numeric value never match a
//! range filter.

use std::collections::HashSet;

use super::store::CatalogStore;

/// Titles whose rating lies within `rating ± tolerance`, inclusive.
pub fn by_rating(catalog: &CatalogStore, rating: f64, tolerance: f64) -> Vec<String> {
    let lo = rating - tolerance;
    let hi = rating + tolerance;
    dedup_titles(
        catalog
            .records()
            .iter()
            .filter(|r| r.rating.is_some_and(|v| v >= lo && v <= hi))
            .map(|r| r.title.as_str()),
    )
}

/// Titles whose budget lies within `budget ± tolerance`, inclusive.
pub fn by_budget(catalog: &CatalogStore, budget: f64, tolerance: f64) -> Vec<String> {
    let lo = budget - tolerance;
    let hi = budget + tolerance;
    dedup_titles(
        catalog
            .records()
            .iter()
            .filter(|r| r.budget.is_some_and(|v| v >= lo && v <= hi))
            .map(|r| r.title.as_str()),
    )
}

/// Titles whose production countries contain `country` as a
/// case-insensitive substring.
pub fn by_country(catalog: &CatalogStore, country: &str) -> Vec<String> {
    let needle = country.to_lowercase();
    dedup_titles(
        catalog
            .records()
            .iter()
            .filter(|r| r.countries.to_lowercase().contains(&needle))
            .map(|r| r.title.as_str()),
    )
}

/// Titles whose original language equals `language` case-insensitively.
pub fn by_language(catalog: &CatalogStore, language: &str) -> Vec<String> {
    let wanted = language.to_lowercase();
    dedup_titles(
        catalog
            .records()
            .iter()
            .filter(|r| r.language.to_lowercase() == wanted)
            .map(|r| r.title.as_str()),
    )
}

fn dedup_titles<'a>(titles: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for title in titles {
        if seen.insert(title) {
            out.push(title.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::MovieRecord;

    fn record(
        id: &str,
        title: &str,
        rating: Option<f64>,
        budget: Option<f64>,
        countries: &str,
        language: &str,
    ) -> MovieRecord {
        MovieRecord {
            id: id.to_string(),
            title: title.to_string(),
            tag_text: String::new(),
            rating,
            budget,
            countries: countries.to_string(),
            language: language.to_string(),
        }
    }

    fn catalog() -> CatalogStore {
        CatalogStore::from_records(vec![
            record("1", "Alpha", Some(7.8), Some(9_000_000.0), "United States of America", "en"),
            record("2", "Beta", Some(7.3), Some(1_500_000.0), "France United States of America", "fr"),
            record("3", "Gamma", None, None, "", ""),
            record("4", "Alpha", Some(7.5), Some(9_500_000.0), "United Kingdom", "en"),
            record("5", "Delta", Some(4.0), Some(200_000.0), "France", "fr"),
        ])
    }

    #[test]
    fn test_rating_window_is_inclusive() {
        let titles = by_rating(&catalog(), 7.5, 0.5);
        assert_eq!(titles, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_rating_zero_tolerance_needs_exact_match() {
        assert_eq!(by_rating(&catalog(), 7.3, 0.0), vec!["Beta"]);
        assert!(by_rating(&catalog(), 7.4, 0.0).is_empty());
    }

    #[test]
    fn test_missing_rating_never_matches() {
        let titles = by_rating(&catalog(), 5.0, 100.0);
        assert!(!titles.contains(&"Gamma".to_string()));
    }

    #[test]
    fn test_duplicate_titles_collapse_to_first() {
        // Both Alpha records fall in [7.5, 8.5]; the title appears once.
        let titles = by_rating(&catalog(), 8.0, 0.5);
        assert_eq!(titles, vec!["Alpha"]);
    }

    #[test]
    fn test_budget_window() {
        let titles = by_budget(&catalog(), 9_000_000.0, 1_000_000.0);
        assert_eq!(titles, vec!["Alpha"]);
        let titles = by_budget(&catalog(), 1_000_000.0, 1_000_000.0);
        assert_eq!(titles, vec!["Beta", "Delta"]);
    }

    #[test]
    fn test_country_is_substring_match() {
        let titles = by_country(&catalog(), "united states");
        assert_eq!(titles, vec!["Alpha", "Beta"]);
        let titles = by_country(&catalog(), "FRANCE");
        assert_eq!(titles, vec!["Beta", "Delta"]);
        let titles = by_country(&catalog(), "united");
        assert_eq!(titles, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_language_is_exact_match() {
        assert_eq!(by_language(&catalog(), "EN"), vec!["Alpha"]);
        assert_eq!(by_language(&catalog(), "fr"), vec!["Beta", "Delta"]);
        assert!(by_language(&catalog(), "e").is_empty());
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(by_rating(&catalog(), 9.9, 0.01).is_empty());
        assert!(by_country(&catalog(), "atlantis").is_empty());
        assert!(by_language(&catalog(), "xx").is_empty());
    }
}
