//! Term-weighted vector space over movie synopses.
//!
//! Each movie's overview becomes one dense TF-IDF row:
//! - tf: raw term count in the overview
//! - idf: `ln((1 + n) / (1 + df)) + 1`, so terms present everywhere still count a little
//! - rows are L2-normalized
//!
//! Row `i` belongs to corpus position `i`. The space is fit once and is
//! read-only afterwards; similarity queries are a single matrix-vector product.

use data_loader::{Corpus, MovieIndex};
use ndarray::{Array1, Array2, ArrayView1};
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};
use tracing::info;

use crate::tokenizer::tokenize;

/// Dense TF-IDF representation of every synopsis in a corpus
#[derive(Debug, Clone)]
pub struct VectorSpace {
    /// Term → column
    vocabulary: HashMap<String, usize>,
    idf: Array1<f32>,
    /// One row per movie
    matrix: Array2<f32>,
    /// Magnitude of each row (1.0, or 0.0 for an empty synopsis)
    norms: Array1<f32>,
}

impl VectorSpace {
    /// Fit the space over every overview in `corpus`, in corpus order
    pub fn fit(corpus: &Corpus) -> Self {
        let documents: Vec<&str> = corpus.movies().iter().map(|m| m.overview.as_str()).collect();
        let space = Self::fit_documents(&documents);

        info!(
            "Fitted vector space: {} documents x {} terms",
            space.len(),
            space.vocabulary_size()
        );
        space
    }

    /// Fit the space over raw documents; row `i` describes `documents[i]`
    pub fn fit_documents(documents: &[&str]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.par_iter().map(|doc| tokenize(doc)).collect();

        // Sorted vocabulary gives a deterministic column order
        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(column, term)| (term.to_string(), column))
            .collect();

        let n_docs = documents.len();
        let n_terms = vocabulary.len();

        // Raw term counts and document frequencies
        let mut matrix = Array2::<f32>::zeros((n_docs, n_terms));
        let mut df = vec![0u32; n_terms];
        for (row, tokens) in tokenized.iter().enumerate() {
            for token in tokens {
                let column = vocabulary[token.as_str()];
                if matrix[[row, column]] == 0.0 {
                    df[column] += 1;
                }
                matrix[[row, column]] += 1.0;
            }
        }

        let idf: Array1<f32> = df
            .iter()
            .map(|&count| ((1.0 + n_docs as f32) / (1.0 + count as f32)).ln() + 1.0)
            .collect();

        let mut norms = Array1::<f32>::zeros(n_docs);
        for (row, mut values) in matrix.outer_iter_mut().enumerate() {
            values *= &idf;
            let norm = values.dot(&values).sqrt();
            if norm > 0.0 {
                values /= norm;
                norms[row] = 1.0;
            }
        }

        Self {
            vocabulary,
            idf,
            matrix,
            norms,
        }
    }

    /// Number of rows (documents)
    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct terms
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Inverse document frequency of `term`, if it occurs anywhere
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary.get(term).map(|&column| self.idf[column])
    }

    /// Weighted term vector of the movie at `index`
    pub fn row(&self, index: MovieIndex) -> Option<ArrayView1<'_, f32>> {
        (index < self.len()).then(|| self.matrix.row(index))
    }

    /// True when the movie at `index` has no weighted terms at all
    pub fn is_zero(&self, index: MovieIndex) -> bool {
        self.norms.get(index).is_none_or(|&norm| norm == 0.0)
    }

    /// Cosine similarity of every row against row `seed`.
    ///
    /// Entry `i` of the result is the similarity of movie `i` to the seed.
    /// Rows with zero magnitude score exactly `0.0`, as does everything when
    /// the seed itself is a zero vector. Returns `None` for an out-of-range seed.
    pub fn cosine_similarities(&self, seed: MovieIndex) -> Option<Array1<f32>> {
        let seed_row = self.row(seed)?;
        let seed_norm = self.norms[seed];
        if seed_norm == 0.0 || self.vocabulary.is_empty() {
            return Some(Array1::zeros(self.len()));
        }

        let dots = self.matrix.dot(&seed_row);
        let scores = dots
            .iter()
            .zip(self.norms.iter())
            .map(|(&dot, &norm)| {
                if norm == 0.0 {
                    0.0
                } else {
                    (dot / (norm * seed_norm)).clamp(0.0, 1.0)
                }
            })
            .collect();
        Some(scores)
    }
}

/// Cosine similarity of two vectors, defined as `0.0` when either is all zeros
pub fn cosine_similarity(a: ArrayView1<f32>, b: ArrayView1<f32>) -> f32 {
    let dot_product = a.dot(&b);
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}
