//!
//! The dictionary-of-keys count matrix.
//!
//! Only non-zero cells are stored, keyed by `(row, col)`. Incrementing a cell is a
//! single hash map update, which keeps the fill loop at O(1) amortized per token.
//!
use fxhash::FxHashMap as HashMap;
use log::debug;
use ndarray::Array2;
use sprs::{CsMat, TriMat};

use super::config::{CountMatrixConfig, MatrixLayout};
use super::error::{MatrixError, MatrixResult};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountMatrix {
    shape: (usize, usize),
    entries: HashMap<(usize, usize), u32>,
}

impl CountMatrix {
    ///
    /// Create an all-zero matrix.
    ///
    /// # Arguments:
    /// - `shape`: `(rows, cols)`, i.e. `(number of documents, vocabulary size)`
    ///
    pub fn new(shape: (usize, usize)) -> Self {
        Self {
            shape,
            entries: HashMap::default(),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.0
    }

    pub fn cols(&self) -> usize {
        self.shape.1
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    ///
    /// Get the count at `(row, col)`. Cells that were never touched, including
    /// cells outside the shape, read as zero.
    ///
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    ///
    /// Add one to the count at `(row, col)`.
    ///
    /// # Returns:
    /// - the new count of the cell
    ///
    pub fn increment(&mut self, row: usize, col: usize) -> MatrixResult<u32> {
        self.add(row, col, 1)
    }

    ///
    /// Add `n` to the count at `(row, col)`.
    ///
    /// # Errors:
    /// - `IndexOutOfBounds` if the cell lies outside the matrix shape
    /// - `CountOverflow` if the new count does not fit in a `u32`
    ///
    pub fn add(&mut self, row: usize, col: usize, n: u32) -> MatrixResult<u32> {
        let (rows, cols) = self.shape;
        if row >= rows || col >= cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            });
        }

        // zero stays implicit
        if n == 0 {
            return Ok(self.get(row, col));
        }

        let count = self.entries.entry((row, col)).or_insert(0);
        *count = count
            .checked_add(n)
            .ok_or(MatrixError::CountOverflow { row, col })?;

        Ok(*count)
    }

    ///
    /// Iterate over the non-zero entries as `(row, col, count)` triplets,
    /// sorted by `(row, col)`.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u32)> + use<> {
        let mut triplets: Vec<(usize, usize, u32)> = self
            .entries
            .iter()
            .map(|(&(row, col), &count)| (row, col, count))
            .collect();
        triplets.sort_unstable_by_key(|&(row, col, _)| (row, col));
        triplets.into_iter()
    }

    /// Total count per row. For a filled matrix this is the token count of each document.
    pub fn row_sums(&self) -> Vec<usize> {
        let mut sums = vec![0; self.rows()];
        for (&(row, _), &count) in self.entries.iter() {
            sums[row] += count as usize;
        }
        sums
    }

    /// Total count per column, i.e. how often each vocabulary token occurs in the corpus.
    pub fn col_sums(&self) -> Vec<usize> {
        let mut sums = vec![0; self.cols()];
        for (&(_, col), &count) in self.entries.iter() {
            sums[col] += count as usize;
        }
        sums
    }

    pub fn total(&self) -> usize {
        self.entries.values().map(|&count| count as usize).sum()
    }

    ///
    /// Convert to a `sprs` triplet matrix. Triplets are added in `(row, col)` order.
    ///
    pub fn to_triplets(&self) -> TriMat<u32> {
        let mut triplets = TriMat::with_capacity(self.shape, self.nnz());
        for (row, col, count) in self.iter() {
            triplets.add_triplet(row, col, count);
        }
        triplets
    }

    /// Compressed sparse row copy of the counts.
    pub fn to_csr(&self) -> CsMat<u32> {
        self.to_triplets().to_csr()
    }

    /// Compressed sparse column copy of the counts.
    pub fn to_csc(&self) -> CsMat<u32> {
        self.to_triplets().to_csc()
    }

    ///
    /// Convert to the compressed layout named in the config.
    ///
    pub fn to_compressed(&self, config: &CountMatrixConfig) -> CsMat<u32> {
        debug!(
            "Compressing {}x{} count matrix ({} non-zero) as {:?}",
            self.rows(),
            self.cols(),
            self.nnz(),
            config.layout
        );
        match config.layout {
            MatrixLayout::Csr => self.to_csr(),
            MatrixLayout::Csc => self.to_csc(),
        }
    }

    ///
    /// Materialize the matrix as a dense array. Meant for small matrices and tests.
    ///
    pub fn to_dense(&self) -> Array2<u32> {
        let mut dense = Array2::zeros(self.shape);
        for (&(row, col), &count) in self.entries.iter() {
            dense[[row, col]] = count;
        }
        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn matrix() -> CountMatrix {
        // [[2, 1, 0],
        //  [0, 1, 1]]
        let mut matrix = CountMatrix::new((2, 3));
        matrix.increment(0, 0).unwrap();
        matrix.increment(0, 1).unwrap();
        matrix.increment(0, 0).unwrap();
        matrix.increment(1, 1).unwrap();
        matrix.increment(1, 2).unwrap();
        matrix
    }

    #[rstest]
    fn test_new_is_all_zero() {
        let matrix = CountMatrix::new((4, 5));
        assert_eq!(matrix.shape(), (4, 5));
        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.get(3, 4), 0);
        assert_eq!(matrix.total(), 0);
    }

    #[rstest]
    fn test_increment_returns_new_count() {
        let mut matrix = CountMatrix::new((1, 1));
        assert_eq!(matrix.increment(0, 0).unwrap(), 1);
        assert_eq!(matrix.increment(0, 0).unwrap(), 2);
        assert_eq!(matrix.add(0, 0, 5).unwrap(), 7);
    }

    #[rstest]
    #[case(1, 0)]
    #[case(0, 2)]
    #[case(5, 5)]
    fn test_out_of_bounds(#[case] row: usize, #[case] col: usize) {
        let mut matrix = CountMatrix::new((1, 2));
        let result = matrix.increment(row, col);
        assert_eq!(
            matches!(result, Err(MatrixError::IndexOutOfBounds { .. })),
            true
        );
        assert_eq!(matrix.nnz(), 0);
    }

    #[rstest]
    fn test_adding_zero_stores_nothing() {
        let mut matrix = CountMatrix::new((2, 2));
        assert_eq!(matrix.add(1, 1, 0).unwrap(), 0);
        assert_eq!(matrix.nnz(), 0);
    }

    #[rstest]
    fn test_overflow() {
        let mut matrix = CountMatrix::new((1, 1));
        matrix.add(0, 0, u32::MAX).unwrap();
        let result = matrix.increment(0, 0);
        assert_eq!(
            matches!(result, Err(MatrixError::CountOverflow { row: 0, col: 0 })),
            true
        );
        assert_eq!(matrix.get(0, 0), u32::MAX);
    }

    #[rstest]
    fn test_sorted_triplets(matrix: CountMatrix) {
        let triplets: Vec<(usize, usize, u32)> = matrix.iter().collect();
        assert_eq!(
            triplets,
            vec![(0, 0, 2), (0, 1, 1), (1, 1, 1), (1, 2, 1)]
        );
    }

    #[rstest]
    fn test_sums(matrix: CountMatrix) {
        assert_eq!(matrix.row_sums(), vec![3, 2]);
        assert_eq!(matrix.col_sums(), vec![2, 2, 1]);
        assert_eq!(matrix.total(), 5);
    }

    #[rstest]
    fn test_dense(matrix: CountMatrix) {
        assert_eq!(matrix.to_dense(), array![[2_u32, 1, 0], [0, 1, 1]]);
    }

    #[rstest]
    fn test_csr(matrix: CountMatrix) {
        let csr = matrix.to_csr();
        assert_eq!(csr.is_csr(), true);
        assert_eq!(csr.shape(), (2, 3));
        assert_eq!(csr.nnz(), 4);
        assert_eq!(csr.get(0, 0), Some(&2));
        assert_eq!(csr.get(1, 0), None);
        assert_eq!(csr.get(1, 2), Some(&1));
    }

    #[rstest]
    #[case(MatrixLayout::Csr)]
    #[case(MatrixLayout::Csc)]
    fn test_compressed_layout(matrix: CountMatrix, #[case] layout: MatrixLayout) {
        let compressed = matrix.to_compressed(&CountMatrixConfig::new(layout));
        assert_eq!(compressed.is_csc(), layout == MatrixLayout::Csc);
        assert_eq!(compressed.get(0, 0), Some(&2));
        assert_eq!(compressed.get(0, 2), None);
    }

    #[rstest]
    fn test_empty_shape() {
        let matrix = CountMatrix::new((0, 0));
        assert_eq!(matrix.to_csr().shape(), (0, 0));
        assert_eq!(matrix.to_dense().dim(), (0, 0));
        assert_eq!(matrix.row_sums().len(), 0);
    }
}
