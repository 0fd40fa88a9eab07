//! TF-IDF statistics over a fixed corpus of tokenized documents.
//!
//! Implements the classic weighting:
//!   tf(t, d)  = count(t, d) / |d|
//!   idf(t)    = ln(N / (1 + df(t)))
//!   tfidf     = tf(t, d) × idf(t)
//!
//! The `+1` in the IDF denominator means a term present in every document
//! gets a negative weight. That is kept as-is, not clamped.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Term → relative frequency within one document.
pub type TermFrequencyMap = HashMap<String, f64>;
/// Term → number of documents containing it.
pub type DocumentFrequencyMap = HashMap<String, usize>;
/// Term → inverse document frequency over the whole corpus.
pub type InverseDocumentFrequencyMap = HashMap<String, f64>;
/// Term → TF-IDF score within one document.
pub type TfidfMap = HashMap<String, f64>;

/// Relative frequency of every distinct token in `tokens`.
///
/// Returns an empty map for an empty document.
pub fn term_frequency<S: AsRef<str>>(tokens: &[S]) -> TermFrequencyMap {
    if tokens.is_empty() {
        return TermFrequencyMap::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_ref()).or_insert(0) += 1;
    }

    let total = tokens.len() as f64;
    counts
        .into_iter()
        .map(|(term, count)| (term.to_string(), count as f64 / total))
        .collect()
}

/// Number of documents in `corpus` containing each term at least once.
pub fn document_frequency<D: AsRef<[String]>>(corpus: &[D]) -> DocumentFrequencyMap {
    let mut df = DocumentFrequencyMap::new();

    for document in corpus {
        let seen: HashSet<&str> = document.as_ref().iter().map(String::as_str).collect();
        for term in seen {
            *df.entry(term.to_string()).or_insert(0) += 1;
        }
    }

    df
}

/// `ln(total_docs / (1 + df))` for every term in `doc_freq`.
pub fn inverse_document_frequency(
    doc_freq: &DocumentFrequencyMap,
    total_docs: usize,
) -> InverseDocumentFrequencyMap {
    let n = total_docs as f64;
    doc_freq
        .iter()
        .map(|(term, &df)| (term.clone(), (n / (1.0 + df as f64)).ln()))
        .collect()
}

/// Multiply each term frequency by its IDF. Terms missing from `idf` score 0.0.
pub fn combine(tf: &TermFrequencyMap, idf: &InverseDocumentFrequencyMap) -> TfidfMap {
    tf.iter()
        .map(|(term, &freq)| {
            let weight = idf.get(term).copied().unwrap_or(0.0);
            (term.clone(), freq * weight)
        })
        .collect()
}

/// Order for ranked terms: score descending, then term ascending.
fn by_score_then_term(a: &(String, f64), b: &(String, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Sort a document's scores into a ranked list.
///
/// `top_k` of `None` keeps every term.
pub fn rank(scores: TfidfMap, top_k: Option<usize>) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = scores.into_iter().collect();
    ranked.sort_by(by_score_then_term);
    if let Some(k) = top_k {
        ranked.truncate(k);
    }
    ranked
}
