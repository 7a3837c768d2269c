//! # termdoc
//!
//! Document-term frequency matrices from tokenized text.
//!
//! This crate bundles the workspace crates behind features:
//!
//! - `vocab`: [`vocab`], first-occurrence token vocabularies
//! - `matrix`: [`matrix`], sparse count matrices and the `word_count` pipeline
//! - `parallel`: rayon-backed matrix filling
//!
#[cfg(feature = "vocab")]
#[doc(inline)]
pub use termdoc_vocab as vocab;

#[cfg(feature = "matrix")]
#[doc(inline)]
pub use termdoc_matrix as matrix;
