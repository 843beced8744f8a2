//! Bag-of-words vectorizer. Lowercases each document, splits it into word
//! tokens of two or more characters, drops stopwords, and counts term
//! occurrences against a frequency-capped vocabulary.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Raw term counts for one document, indexed by vocabulary dimension.
pub type TermVector = Vec<f64>;

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| Regex::new(r"\w\w+").unwrap())
}

/// Split `text` into lowercased word tokens. Single-character tokens and
/// punctuation are discarded; `\w` covers letters, digits and underscore.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// The retained term set. Dimension order is selection order: most frequent
/// corpus-wide term first, ties broken by first appearance in the corpus.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }
}

/// Build the vocabulary over `documents` and count every document against
/// it. At most `max_terms` terms are retained, ranked by total corpus
/// frequency. Deterministic for a fixed input: rebuilding yields the same
/// vocabulary order and bit-identical vectors.
pub fn vectorize(
    documents: &[&str],
    max_terms: usize,
    stopwords: &HashSet<&'static str>,
) -> Result<(Vocabulary, Vec<TermVector>), VectorizeError> {
    if documents.is_empty() {
        return Err(VectorizeError::EmptyCorpus);
    }

    let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

    // Corpus-wide frequency per term, plus the order each term was first
    // seen in, which settles equal-frequency ranking.
    let mut frequencies: HashMap<&str, (u64, usize)> = HashMap::new();
    let mut first_seen = 0usize;
    for tokens in &tokenized {
        for token in tokens {
            if stopwords.contains(token.as_str()) {
                continue;
            }
            let entry = frequencies.entry(token.as_str()).or_insert_with(|| {
                let order = first_seen;
                first_seen += 1;
                (0, order)
            });
            entry.0 += 1;
        }
    }

    let mut ranked: Vec<(&str, u64, usize)> = frequencies
        .into_iter()
        .map(|(term, (count, order))| (term, count, order))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(max_terms);

    let terms: Vec<String> = ranked.iter().map(|(term, _, _)| term.to_string()).collect();
    let index: HashMap<String, usize> = terms
        .iter()
        .enumerate()
        .map(|(i, term)| (term.clone(), i))
        .collect();
    let vocabulary = Vocabulary { terms, index };

    let vectors = tokenized
        .iter()
        .map(|tokens| {
            let mut vector = vec![0.0; vocabulary.len()];
            for token in tokens {
                if let Some(i) = vocabulary.index.get(token.as_str()) {
                    vector[*i] += 1.0;
                }
            }
            vector
        })
        .collect();

    Ok((vocabulary, vectors))
}

#[derive(Error, Debug, PartialEq)]
pub enum VectorizeError {
    #[error("Cannot build a vocabulary from an empty catalog")]
    EmptyCorpus,
}
