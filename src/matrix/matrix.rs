use itertools::Itertools;
use rayon::prelude::*;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::config::ParallelConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::scalar::Scalar;

/// Dense rectangular matrix stored in row-major order.
///
/// Triangularization never mutates the receiver, it produces a new matrix.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    pub(crate) cols: usize,
    pub(crate) rows: usize,
    pub(crate) cells: Vec<T>,
    config: ParallelConfig,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix {
            cols: 0,
            rows: 0,
            cells: vec![],
            config: ParallelConfig::default(),
        }
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, rhs: &Matrix<T>) -> bool {
        self.rows == rhs.rows && self.cols == rhs.cols && self.cells == rhs.cells
    }
}

fn validate<T>(lines: &[Vec<T>]) -> Result<usize> {
    let cols = lines.first().ok_or(MatrixError::EmptyMatrix)?.len();
    if cols == 0 {
        return Err(MatrixError::EmptyMatrix);
    }

    match lines.iter().position(|line| line.len() != cols) {
        Some(row) => Err(MatrixError::SteppedMatrix {
            row,
            expected: cols,
            got: lines[row].len(),
        }),
        None => Ok(cols),
    }
}

impl<T: Scalar> Matrix<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        let cols = validate(&lines)?;

        Ok(Matrix {
            rows: lines.len(),
            cols,
            cells: lines.into_iter().flatten().collect(),
            config: ParallelConfig::default(),
        })
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.rows_iter().map(|row| row.to_vec()).collect()
    }

    pub fn with_parallelism(mut self, config: ParallelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn parallelism(&self) -> ParallelConfig {
        self.config
    }

    pub fn rows_count(&self) -> usize {
        self.rows
    }

    /// Width of the rows, `0` for the empty matrix.
    pub fn columns_count(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    #[inline(always)]
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    #[inline(always)]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }

    pub fn set_row(&mut self, row: usize, values: Vec<T>) -> Result<()> {
        if row >= self.rows {
            return Err(MatrixError::RowOutOfBounds {
                row,
                rows: self.rows,
            });
        }
        if values.len() != self.cols {
            return Err(MatrixError::RowLengthMismatch {
                expected: self.cols,
                got: values.len(),
            });
        }

        self.row_mut(row).clone_from_slice(&values);
        Ok(())
    }

    /// Number of rows left non-zero after reduction to upper triangular form.
    /// Recomputed on every call.
    pub fn rank(&self) -> usize {
        self.to_upper_triangle()
            .rows_iter()
            .filter(|row| row.iter().any(|x| !x.is_zero()))
            .count()
    }

    pub fn to_upper_triangle(&self) -> Matrix<T> {
        let mut mat = self.clone();
        for i in 1..mat.rows {
            for k in 0..i.min(mat.cols) {
                mat.eliminate(i, k);
            }
        }
        mat
    }

    pub fn to_lower_triangle(&self) -> Matrix<T> {
        let mut mat = self.clone();
        for i in (0..mat.rows.saturating_sub(1)).rev() {
            for k in (i + 1..mat.rows).rev() {
                if k < mat.cols {
                    mat.eliminate(i, k);
                }
            }
        }
        mat
    }

    pub fn upper_triangle(lines: Vec<Vec<T>>) -> Result<Matrix<T>> {
        Ok(Matrix::from_list(lines)?.to_upper_triangle())
    }

    pub fn lower_triangle(lines: Vec<Vec<T>>) -> Result<Matrix<T>> {
        Ok(Matrix::from_list(lines)?.to_lower_triangle())
    }

    // Subtract `pivot_row * (row[k] / pivot_row[k])` from `row`, where
    // `pivot_row` is row `k`. Steps on a zero pivot are skipped, no row swaps.
    fn eliminate(&mut self, row: usize, k: usize) {
        let cols = self.cols;
        let config = self.config;

        let (target, source) = if row > k {
            let (head, tail) = self.cells.split_at_mut(row * cols);
            (&mut tail[..cols], &head[k * cols..(k + 1) * cols])
        } else {
            let (head, tail) = self.cells.split_at_mut(k * cols);
            (&mut head[row * cols..(row + 1) * cols], &tail[..cols])
        };

        let pivot = &source[k];
        if pivot.is_zero() {
            log::trace!("zero pivot at ({k}, {k}), skipping elimination of row {row}");
            return;
        }
        let multiplier = target[k].clone() / pivot.clone();

        if config.is_parallel(cols) {
            target
                .par_iter_mut()
                .zip(source.par_iter())
                .for_each(|(x, p)| *x = x.clone() - p.clone() * multiplier.clone());
        } else {
            target
                .iter_mut()
                .zip(source.iter())
                .for_each(|(x, p)| *x = x.clone() - p.clone() * multiplier.clone());
        }
    }

    /// Divide every pivot row `i` by its diagonal entry and pin the diagonal
    /// to one. Rows are independent, large sweeps run one row per task.
    pub(crate) fn normalize_rows(&mut self, pivot_rows: &[bool]) {
        let cols = self.cols;
        let normalize = |(i, row): (usize, &mut [T])| {
            if !pivot_rows.get(i).copied().unwrap_or(false) {
                return;
            }
            let divider = row[i].clone();
            row.iter_mut()
                .for_each(|x| *x = x.clone() / divider.clone());
            row[i] = T::one();
        };

        if cols == 0 {
            return;
        }
        if self.config.is_parallel(self.rows) {
            self.cells
                .par_chunks_mut(cols)
                .enumerate()
                .for_each(normalize);
        } else {
            self.cells.chunks_mut(cols).enumerate().for_each(normalize);
        }
    }

    pub fn add_column(&mut self, values: Vec<T>) -> Result<()> {
        if values.len() != self.rows {
            return Err(MatrixError::ColumnLengthMismatch {
                expected: self.rows,
                got: values.len(),
            });
        }

        self.extend_rows(values.into_iter().map(|v| vec![v]).collect(), 1);
        Ok(())
    }

    pub fn add_columns(&mut self, lines: Vec<Vec<T>>) -> Result<()> {
        let width = validate(&lines)?;
        if lines.len() != self.rows {
            return Err(MatrixError::RowCountMismatch {
                expected: self.rows,
                got: lines.len(),
            });
        }

        self.extend_rows(lines, width);
        Ok(())
    }

    // Append `width` values to the end of every row.
    fn extend_rows(&mut self, lines: Vec<Vec<T>>, width: usize) {
        if self.rows == 0 {
            return;
        }

        let cols = self.cols + width;
        let mut cells = Vec::with_capacity(self.rows * cols);
        for (row, extra) in self.rows_iter().zip(lines) {
            cells.extend(row.iter().cloned());
            cells.extend(extra);
        }

        self.cells = cells;
        self.cols = cols;
    }

    pub fn add_row(&mut self, values: Vec<T>) -> Result<()> {
        if self.rows == 0 {
            if values.is_empty() {
                return Err(MatrixError::EmptyMatrix);
            }
            self.cols = values.len();
        } else if values.len() != self.cols {
            return Err(MatrixError::RowLengthMismatch {
                expected: self.cols,
                got: values.len(),
            });
        }

        self.cells.extend(values);
        self.rows += 1;
        Ok(())
    }

    pub fn add_rows(&mut self, lines: Vec<Vec<T>>) -> Result<()> {
        let width = validate(&lines)?;
        if self.rows != 0 && width != self.cols {
            return Err(MatrixError::ColumnCountMismatch {
                expected: self.cols,
                got: width,
            });
        }

        self.cols = width;
        self.rows += lines.len();
        self.cells.extend(lines.into_iter().flatten());
        Ok(())
    }

    pub fn get_main_diagonal(&self) -> Result<Vec<T>> {
        if self.rows > self.cols {
            return Err(MatrixError::DiagonalOutOfBounds {
                row: self.cols,
                cols: self.cols,
            });
        }

        Ok((0..self.rows).map(|i| self.at(i, i)).collect())
    }

    pub fn main_diagonal(lines: Vec<Vec<T>>) -> Result<Vec<T>> {
        Matrix::from_list(lines)?.get_main_diagonal()
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(col < self.cols, "column {col} out of bounds");
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(col < self.cols, "column {col} out of bounds");
        &mut self.cells[row * self.cols + col]
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            writeln!(f, "{}", row.iter().join("\t"))?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
