use itertools::Itertools;

use crate::error::{MatrixError, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::scalar::Scalar;
use crate::slae::solution::{InfiniteSolution, MatrixCell, SolutionsCount};

/// A system of linear algebraic equations `A * x = b`.
///
/// The extended matrix `[A | b]` is built once. Solving reduces a fresh copy
/// of it, so every solve method can be called any number of times.
///
/// There is no pivot search: elimination skips zero pivots, so the results
/// are only meaningful when the leading pivots stay non-zero.
#[derive(Debug, Clone)]
pub struct Slae<T> {
    system: Matrix<T>,
    free_vector: Vec<T>,
    extended: Matrix<T>,
}

impl<T: Scalar> Slae<T> {
    pub fn new(system: Matrix<T>, free_vector: Vec<T>) -> Result<Self> {
        if system.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if free_vector.len() != system.rows_count() {
            return Err(MatrixError::FreeVectorLength {
                expected: system.rows_count(),
                got: free_vector.len(),
            });
        }

        let mut extended = system.clone();
        extended.add_column(free_vector.clone())?;

        Ok(Slae {
            system,
            free_vector,
            extended,
        })
    }

    pub fn system(&self) -> &Matrix<T> {
        &self.system
    }

    pub fn free_vector(&self) -> &[T] {
        &self.free_vector
    }

    pub fn extended(&self) -> &Matrix<T> {
        &self.extended
    }

    pub fn variables_count(&self) -> usize {
        self.system.columns_count()
    }

    // Rouché–Capelli
    pub fn is_solvable(&self) -> bool {
        let system_rank = self.system.rank();
        let extended_rank = self.extended.rank();
        log::debug!("rank(A) = {system_rank}, rank(A|b) = {extended_rank}");
        system_rank == extended_rank
    }

    pub fn num_solutions(&self) -> SolutionsCount {
        let count = if !self.is_solvable() {
            SolutionsCount::None
        } else if self.system.rank() == self.variables_count() {
            SolutionsCount::Single
        } else {
            SolutionsCount::Infinity
        };
        log::debug!("system has {count} solution(s)");
        count
    }

    fn reduced(&self) -> Matrix<T> {
        self.extended.to_upper_triangle().to_lower_triangle()
    }

    /// The unique solution, one value per variable.
    ///
    /// Only meaningful when [`Slae::num_solutions`] is
    /// [`SolutionsCount::Single`]; nothing checks it.
    pub fn solve_single(&self) -> Vec<T> {
        let n = self.variables_count();
        let mut reduced = self.reduced();
        let rows = reduced.rows_count();

        let pivot_rows = (0..rows).map(|i| i < n).collect_vec();
        reduced.normalize_rows(&pivot_rows);

        (0..n.min(rows)).map(|i| reduced.at(i, n)).collect()
    }

    /// One record per pivot row, in row order, expressing that variable
    /// through the free ones.
    ///
    /// Only meaningful when [`Slae::num_solutions`] is
    /// [`SolutionsCount::Infinity`]; nothing checks it. A variable is free
    /// when its diagonal entry is exactly zero after reduction, so a row whose
    /// leading coefficient is zero (`0*x0 + 3*x1 - 2*x2 = 1`) marks `x0` free
    /// and yields no record for it.
    pub fn solve_infinite(&self) -> Vec<InfiniteSolution<T>> {
        let n = self.variables_count();
        let mut reduced = self.reduced();
        let rows = reduced.rows_count();

        let free = (0..n)
            .filter(|&j| j >= rows || reduced.at(j, j).is_zero())
            .collect_vec();
        log::debug!("free variables: {free:?}");

        let pivot_rows = (0..rows)
            .map(|i| i < n && !free.contains(&i))
            .collect_vec();
        reduced.normalize_rows(&pivot_rows);

        pivot_rows
            .iter()
            .positions(|&is_pivot| is_pivot)
            .map(|i| {
                let mut solution = InfiniteSolution::new(i, reduced.at(i, n));
                for &f in &free {
                    solution.push(MatrixCell::new(f, -reduced.at(i, f)));
                }
                solution
            })
            .collect()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
