use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use termdoc_vocab::Vocabulary;

use super::count_matrix::CountMatrix;
use super::error::{MatrixError, MatrixResult};

///
/// Count every token of every document against an existing vocabulary.
///
/// The matrix has one row per document and one column per vocabulary entry. Entry
/// `(i, j)` is the number of times the token with id `j` occurs in document `i`.
///
/// # Arguments:
/// - `corpus`: the tokenized documents
/// - `vocab`: the vocabulary giving each token its column
///
/// # Errors:
/// - `TokenNotInVocabulary` for the first token that has no id. Nothing is skipped,
///   a vocabulary built from a different corpus is an error.
///
pub fn fill_count_matrix<T, D>(
    corpus: &[D],
    vocab: &Vocabulary<T>,
) -> MatrixResult<CountMatrix>
where
    T: Eq + Hash + Clone + Debug,
    D: AsRef<[T]>,
{
    let mut matrix = CountMatrix::new((corpus.len(), vocab.len()));

    for (row, doc) in corpus.iter().enumerate() {
        for (position, token) in doc.as_ref().iter().enumerate() {
            let col = lookup_token(vocab, token, row, position)?;
            matrix.increment(row, col)?;
        }
    }

    debug!(
        "Filled {}x{} count matrix with {} non-zero entries",
        matrix.rows(),
        matrix.cols(),
        matrix.nnz()
    );

    Ok(matrix)
}

///
/// Build the vocabulary of a corpus and its count matrix.
///
/// The documents are flattened in order to assign ids by first occurrence, then
/// walked again to fill the matrix. Every token is in the vocabulary by construction.
///
/// # Returns:
/// - `(Vocabulary<T>, CountMatrix)` with shape `(corpus.len(), vocabulary.len())`
///
pub fn word_count<T, D>(corpus: &[D]) -> MatrixResult<(Vocabulary<T>, CountMatrix)>
where
    T: Eq + Hash + Clone + Debug,
    D: AsRef<[T]>,
{
    let vocab = Vocabulary::from_corpus(corpus);
    let matrix = fill_count_matrix(corpus, &vocab)?;
    Ok((vocab, matrix))
}

///
/// Same as [`fill_count_matrix`], but documents are counted on the rayon thread pool.
/// The result is identical to the sequential fill.
///
#[cfg(feature = "parallel")]
pub fn fill_count_matrix_par<T, D>(
    corpus: &[D],
    vocab: &Vocabulary<T>,
) -> MatrixResult<CountMatrix>
where
    T: Eq + Hash + Clone + Debug + Sync,
    D: AsRef<[T]> + Sync,
{
    let row_counts = corpus
        .par_iter()
        .enumerate()
        .map(|(row, doc)| count_document(vocab, doc.as_ref(), row))
        .collect::<MatrixResult<Vec<_>>>()?;

    let mut matrix = CountMatrix::new((corpus.len(), vocab.len()));
    for (row, counts) in row_counts.into_iter().enumerate() {
        for (col, count) in counts {
            matrix.add(row, col, count)?;
        }
    }

    debug!(
        "Filled {}x{} count matrix with {} non-zero entries on {} threads",
        matrix.rows(),
        matrix.cols(),
        matrix.nnz(),
        rayon::current_num_threads()
    );

    Ok(matrix)
}

///
/// Parallel counterpart of [`word_count`]. Vocabulary building stays sequential,
/// first-occurrence order depends on it.
///
#[cfg(feature = "parallel")]
pub fn word_count_par<T, D>(corpus: &[D]) -> MatrixResult<(Vocabulary<T>, CountMatrix)>
where
    T: Eq + Hash + Clone + Debug + Sync,
    D: AsRef<[T]> + Sync,
{
    let vocab = Vocabulary::from_corpus(corpus);
    let matrix = fill_count_matrix_par(corpus, &vocab)?;
    Ok((vocab, matrix))
}

#[cfg(feature = "parallel")]
fn count_document<T>(
    vocab: &Vocabulary<T>,
    doc: &[T],
    row: usize,
) -> MatrixResult<fxhash::FxHashMap<usize, u32>>
where
    T: Eq + Hash + Clone + Debug,
{
    let mut counts = fxhash::FxHashMap::default();
    for (position, token) in doc.iter().enumerate() {
        let col = lookup_token(vocab, token, row, position)?;
        let count: &mut u32 = counts.entry(col).or_insert(0);
        *count = count
            .checked_add(1)
            .ok_or(MatrixError::CountOverflow { row, col })?;
    }
    Ok(counts)
}

fn lookup_token<T>(
    vocab: &Vocabulary<T>,
    token: &T,
    document: usize,
    position: usize,
) -> MatrixResult<usize>
where
    T: Eq + Hash + Clone + Debug,
{
    vocab
        .convert_token_to_id(token)
        .ok_or_else(|| MatrixError::TokenNotInVocabulary {
            document,
            position,
            token: format!("{token:?}"),
        })
}
