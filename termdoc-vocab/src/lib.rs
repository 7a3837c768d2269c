//! # termdoc-vocab
//!
//! Token vocabularies for document-term count matrices.
//!
//! ## Purpose
//!
//! A [`Vocabulary`] assigns every distinct token a dense integer id. Ids are handed
//! out in first-occurrence order: the first new token gets `0`, the next new one `1`,
//! and so on. Tokens seen again keep the id they already have. The vocabulary is the
//! column index of a count matrix built by `termdoc-matrix`.
//!
//! Tokens are generic. Anything that is `Eq + Hash + Clone` works, strings being the
//! usual case.
//!
//! ## Example
//!
//! ```rust
//! use termdoc_vocab::{word_index, Vocabulary};
//!
//! let vocab: Vocabulary<&str> = word_index(["a", "b", "a", "c"]);
//!
//! assert_eq!(vocab.len(), 3);
//! assert_eq!(vocab.convert_token_to_id(&"b"), Some(1));
//! assert_eq!(vocab.convert_id_to_token(2), Some(&"c"));
//! ```
//!
pub mod vocabulary;

// re-export things
pub use vocabulary::*;
