use thiserror::Error;

use super::config::MatrixConfigError;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Token {token} at position {position} of document {document} is not in the vocabulary")]
    TokenNotInVocabulary {
        document: usize,
        position: usize,
        token: String,
    },
    #[error("Entry ({row}, {col}) is outside a matrix of shape ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("Count at ({row}, {col}) does not fit in a u32")]
    CountOverflow { row: usize, col: usize },
    #[error(transparent)]
    Config(#[from] MatrixConfigError),
}

pub type MatrixResult<T> = std::result::Result<T, MatrixError>;
