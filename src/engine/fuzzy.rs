//! Fuzzy title matching for queries that hit no exact title. Scores every
//! title 0-100 with a normalized Levenshtein ratio, taken both over the raw
//! strings and over their token-sorted forms so word order does not count
//! against a match.

use strsim::normalized_levenshtein;

fn token_sort(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn score(query: &str, query_sorted: &str, title_lower: &str) -> u32 {
    let direct = normalized_levenshtein(query, title_lower);
    let sorted = normalized_levenshtein(query_sorted, &token_sort(title_lower));
    (direct.max(sorted) * 100.0).round() as u32
}

/// Score `titles` against `query` and return the best `limit` of them with
/// their scores, best first. Equal scores keep input order.
pub fn suggest<'a>(
    query: &str,
    titles: impl IntoIterator<Item = &'a str>,
    limit: usize,
) -> Vec<(String, u32)> {
    let query = query.trim().to_lowercase();
    let query_sorted = token_sort(&query);

    let mut scored: Vec<(String, u32)> = titles
        .into_iter()
        .map(|title| {
            let lowered = title.to_lowercase();
            (title.to_string(), score(&query, &query_sorted, &lowered))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored
}
