//! # termdoc-matrix
//!
//! Sparse document-term count matrices.
//!
//! ## Purpose
//!
//! Given a corpus of tokenized documents and a [`Vocabulary`], this crate counts how
//! often each vocabulary token occurs in each document. Row `i` of the result is
//! document `i`, column `j` is the token with vocabulary id `j`.
//!
//! ## Design Philosophy
//!
//! Counting happens in a dictionary-of-keys store ([`CountMatrix`]) so that every
//! token occurrence is a single O(1) increment. Compressed layouts (CSR/CSC via `sprs`)
//! and dense views (via `ndarray`) are only built when asked for.
//!
//! ## Main Components
//!
//! - **`CountMatrix`**: the dictionary-of-keys count matrix
//! - **`fill_count_matrix`**: counts a corpus against an existing vocabulary
//! - **`word_count`**: builds the vocabulary and the matrix in one go
//! - **`CountMatrixConfig`**: picks the compressed layout handed to downstream code
//!
//! ## Example
//!
//! ```rust
//! use termdoc_matrix::word_count;
//!
//! let corpus = vec![vec!["a", "b", "a"], vec!["b", "c"]];
//! let (vocab, matrix) = word_count(&corpus).unwrap();
//!
//! assert_eq!(vocab.convert_token_to_id(&"c"), Some(2));
//! assert_eq!(matrix.shape(), (2, 3));
//! assert_eq!(matrix.get(0, 0), 2);
//! ```
//!
pub mod config;
pub mod count_matrix;
pub mod error;
pub mod fill;

// re-export things
pub use config::*;
pub use count_matrix::*;
pub use error::*;
pub use fill::*;

pub use termdoc_vocab::Vocabulary;
