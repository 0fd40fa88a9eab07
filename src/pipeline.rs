use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Result, TfidfError};
use crate::source::SourceReader;
use crate::tfidf::{self, InverseDocumentFrequencyMap};
use crate::tokenizer;

/// A tokenized source. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub label: String,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTerm {
    pub term: String,
    pub score: f64,
}

/// Ranked terms for one document, highest score first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    pub label: String,
    pub terms: Vec<RankedTerm>,
}

/// A source left out of the corpus because it could not be read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedSource {
    pub label: String,
    pub reason: String,
}

/// Result of a full run. `documents` follows the order of the input sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorpusReport {
    pub documents: Vec<DocumentReport>,
    pub skipped: Vec<SkippedSource>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Keep only the best `top_k` terms per document.
    pub top_k: Option<usize>,
    /// Worker threads; 0 lets rayon pick.
    pub threads: usize,
}

/// Read and tokenize every source.
///
/// Unreadable sources are returned as skipped and left out of the corpus.
/// Any other error from the reader aborts the load.
pub fn load_corpus<R>(reader: &R, sources: &[String]) -> Result<(Vec<Document>, Vec<SkippedSource>)>
where
    R: SourceReader + Sync,
{
    let loaded: Vec<Result<Document>> = sources
        .par_iter()
        .map(|label| {
            let lines = reader.read_lines(label)?;
            Ok(Document {
                label: label.clone(),
                tokens: tokenizer::tokenize(&lines),
            })
        })
        .collect();

    let mut documents = Vec::with_capacity(loaded.len());
    let mut skipped = Vec::new();

    for result in loaded {
        match result {
            Ok(document) => {
                tracing::debug!(
                    source = %document.label,
                    tokens = document.tokens.len(),
                    "loaded source"
                );
                documents.push(document);
            }
            Err(TfidfError::SourceUnavailable { label, source }) => {
                tracing::warn!(source = %label, error = %source, "skipping unreadable source");
                skipped.push(SkippedSource {
                    label,
                    reason: source.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok((documents, skipped))
}

/// Corpus-wide IDF map. Must see every document before any scoring starts.
pub fn corpus_idf(documents: &[Document]) -> InverseDocumentFrequencyMap {
    let token_lists: Vec<&[String]> = documents.iter().map(|d| d.tokens.as_slice()).collect();
    let doc_freq = tfidf::document_frequency(&token_lists);
    tfidf::inverse_document_frequency(&doc_freq, documents.len())
}

/// Rank the terms of a single document against a shared IDF map.
pub fn score_document(
    document: &Document,
    idf: &InverseDocumentFrequencyMap,
    top_k: Option<usize>,
) -> DocumentReport {
    let tf = tfidf::term_frequency(&document.tokens);
    let scores = tfidf::combine(&tf, idf);

    DocumentReport {
        label: document.label.clone(),
        terms: tfidf::rank(scores, top_k)
            .into_iter()
            .map(|(term, score)| RankedTerm { term, score })
            .collect(),
    }
}

/// Score every document of an already loaded corpus, preserving order.
pub fn score_corpus(documents: &[Document], top_k: Option<usize>) -> Vec<DocumentReport> {
    let idf = corpus_idf(documents);
    tracing::info!(
        documents = documents.len(),
        vocabulary = idf.len(),
        "built inverse document frequency"
    );

    documents
        .par_iter()
        .map(|document| score_document(document, &idf, top_k))
        .collect()
}

/// Load every source, then score each successfully loaded document.
///
/// Pipeline: Read → Tokenize → Document frequency → IDF → TF × IDF → Rank.
pub fn run<R>(reader: &R, sources: &[String], options: PipelineOptions) -> Result<CorpusReport>
where
    R: SourceReader + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads)
        .build()
        .map_err(|e| TfidfError::Computation(format!("failed to start worker pool: {}", e)))?;

    pool.install(|| {
        let (documents, skipped) = load_corpus(reader, sources)?;
        if !skipped.is_empty() {
            tracing::warn!(
                skipped = skipped.len(),
                loaded = documents.len(),
                "some sources were excluded from the corpus"
            );
        }

        let documents = score_corpus(&documents, options.top_k);
        Ok(CorpusReport { documents, skipped })
    })
}
