use crate::error::{MatrixError, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::scalar::Scalar;

/// Gauss-Seidel iteration for `A * x = b`.
///
/// Each sweep updates the approximation in place, so a row already sees the
/// values computed earlier in the same sweep. There is no iteration cap:
/// `A` has to be diagonally dominant for [`Seidel::solve`] to return.
#[derive(Debug, Clone)]
pub struct Seidel<T> {
    system: Matrix<T>,
    free_vector: Vec<T>,
    approximation: Vec<T>,
    iterations: usize,
}

impl<T: Scalar> Seidel<T> {
    /// Seeds the approximation with `b[i] / a[i][i]`. A zero diagonal entry
    /// is not checked and divides with the scalar's own semantics.
    pub fn new(system: Matrix<T>, free_vector: Vec<T>) -> Result<Self> {
        if system.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if system.rows_count() != system.columns_count() {
            return Err(MatrixError::NotSquare {
                rows: system.rows_count(),
                cols: system.columns_count(),
            });
        }
        if free_vector.len() != system.rows_count() {
            return Err(MatrixError::FreeVectorLength {
                expected: system.rows_count(),
                got: free_vector.len(),
            });
        }

        let approximation = free_vector
            .iter()
            .zip(system.get_main_diagonal()?)
            .map(|(b, diagonal)| b.clone() / diagonal)
            .collect();

        Ok(Seidel {
            system,
            free_vector,
            approximation,
            iterations: 0,
        })
    }

    pub fn system(&self) -> &Matrix<T> {
        &self.system
    }

    pub fn free_vector(&self) -> &[T] {
        &self.free_vector
    }

    pub fn approximation(&self) -> &[T] {
        &self.approximation
    }

    /// Sweeps performed by the last [`Seidel::solve`].
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    fn row_sum_without(&self, row: usize) -> T {
        self.system
            .row(row)
            .iter()
            .zip(&self.approximation)
            .enumerate()
            .filter(|(j, _)| *j != row)
            .fold(T::zero(), |acc, (_, (a, x))| acc + a.clone() * x.clone())
    }

    /// Iterate until the largest relative change `|(new - old) / new|` of a
    /// sweep is at most `epsilon`, then return the approximation.
    /// Components that stay at zero count as unchanged.
    pub fn solve(&mut self, epsilon: T) -> Vec<T> {
        self.iterations = 0;

        loop {
            let previous = self.approximation.clone();

            for i in 0..self.approximation.len() {
                self.approximation[i] = (self.free_vector[i].clone() - self.row_sum_without(i))
                    / self.system.at(i, i);
            }
            self.iterations += 1;

            // A component that moved onto zero has no relative change, it
            // forces another sweep instead.
            let mut moved_onto_zero = false;
            let change = self
                .approximation
                .iter()
                .zip(&previous)
                .filter_map(|(new, old)| {
                    if !new.is_zero() {
                        Some(((new.clone() - old.clone()) / new.clone()).abs())
                    } else {
                        moved_onto_zero |= !old.is_zero();
                        None
                    }
                })
                .fold(T::zero(), |max, c| if c > max { c } else { max });
            log::debug!(
                "Seidel iteration {}: max relative change = {}",
                self.iterations,
                change
            );

            if !moved_onto_zero && change <= epsilon {
                break;
            }
        }

        log::info!("Seidel converged after {} iterations", self.iterations);
        self.approximation.clone()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::rational::Rational;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn residuals(seidel: &Seidel<f64>, x: &[f64]) -> Vec<f64> {
        seidel
            .system()
            .rows_iter()
            .zip(seidel.free_vector())
            .map(|(row, b)| row.iter().zip(x).map(|(a, x)| a * x).sum::<f64>() - b)
            .collect()
    }

    #[test]
    fn test_seidel_construction() {
        let system =
            Matrix::from_list(vec![vec![5.0, -1.0, 3.0], vec![1.0, -4.0, 2.0], vec![2.0, -1.0, 5.0]])
                .unwrap();
        let seidel = Seidel::new(system.clone(), vec![5.0, 20.0, 10.0]).unwrap();
        assert_eq!(seidel.approximation(), &[1.0, -5.0, 2.0]);
        assert_eq!(seidel.iterations(), 0);

        assert_eq!(
            Seidel::new(system, vec![1.0]).unwrap_err(),
            MatrixError::FreeVectorLength {
                expected: 3,
                got: 1
            }
        );
        assert_eq!(
            Seidel::new(Matrix::from_list(vec![vec![1.0, 2.0]]).unwrap(), vec![1.0]).unwrap_err(),
            MatrixError::NotSquare { rows: 1, cols: 2 }
        );
    }

    #[test]
    fn test_seidel_converges() {
        let system =
            Matrix::from_list(vec![vec![5.0, -1.0, 3.0], vec![1.0, -4.0, 2.0], vec![2.0, -1.0, 5.0]])
                .unwrap();
        let mut seidel = Seidel::new(system, vec![5.0, 20.0, 10.0]).unwrap();

        let x = seidel.solve(0.01);
        assert_eq!(x.len(), 3);
        assert!(seidel.iterations() > 0 && seidel.iterations() < 50);
        assert_eq!(seidel.approximation(), x.as_slice());
        for r in residuals(&seidel, &x) {
            assert!(r.abs() < 0.05, "residual {r} too large");
        }

        let x = seidel.solve(1e-12);
        assert_abs_diff_eq!(x[0], -0.73529, epsilon = 1e-4);
        assert_abs_diff_eq!(x[1], -4.48529, epsilon = 1e-4);
        assert_abs_diff_eq!(x[2], 1.39706, epsilon = 1e-4);
        for r in residuals(&seidel, &x) {
            assert_abs_diff_eq!(r, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_seidel_uses_current_sweep_values() {
        // Seeds are x = (1.5, 1.25). One sweep gives x0 = (3 - 1.25) / 2 = 0.875,
        // then x1 = (5 - 0.875) / 4 with the fresh x0, not the seed.
        let system = Matrix::from_list(vec![vec![2.0, 1.0], vec![1.0, 4.0]]).unwrap();
        let mut seidel = Seidel::new(system, vec![3.0, 5.0]).unwrap();
        let x = seidel.solve(1e9);
        assert_eq!(x, vec![0.875, 1.03125]);
        assert_eq!(seidel.iterations(), 1);
    }

    #[test]
    fn test_seidel_rational() {
        let q = |x: i64| Rational::from(x);
        let system = Matrix::from_list(vec![vec![q(4), q(1)], vec![q(1), q(3)]]).unwrap();
        let mut seidel = Seidel::new(system, vec![q(1), q(2)]).unwrap();

        let x = seidel.solve("1/1000".parse().unwrap());
        let exact = ["1/11".parse::<Rational>().unwrap(), "7/11".parse().unwrap()];
        for (value, exact) in x.iter().zip(exact) {
            assert!((value.clone() - exact).abs() < "1/100".parse::<Rational>().unwrap());
        }
    }

    #[test]
    fn test_seidel_rational_zero_component() {
        let q = |x: i64| Rational::from(x);
        let system = Matrix::from_list(vec![vec![q(2), q(0)], vec![q(0), q(2)]]).unwrap();
        let mut seidel = Seidel::new(system, vec![q(0), q(2)]).unwrap();

        assert_eq!(seidel.solve("1/100".parse().unwrap()), vec![q(0), q(1)]);
        assert_eq!(seidel.iterations(), 1);

        // x1 is seeded with 1/2 and lands on 0 after the first sweep.
        let system = Matrix::from_list(vec![vec![q(4), q(0)], vec![q(2), q(4)]]).unwrap();
        let mut seidel = Seidel::new(system, vec![q(4), q(2)]).unwrap();
        assert_eq!(seidel.solve("1/100".parse().unwrap()), vec![q(1), q(0)]);
        assert_eq!(seidel.iterations(), 2);
    }

    #[test]
    fn test_seidel_random_diagonally_dominant() {
        let mut rng = StdRng::seed_from_u64(7);

        for size in [3, 6, 10] {
            let lines: Vec<Vec<f64>> = (0..size)
                .map(|i| {
                    let row: Vec<f64> = (0..size).map(|_| rng.gen_range(-1.0..1.0)).collect();
                    let off_diagonal: f64 = row
                        .iter()
                        .enumerate()
                        .filter(|(j, _)| *j != i)
                        .map(|(_, a)| a.abs())
                        .sum();
                    row.iter()
                        .enumerate()
                        .map(|(j, &a)| if j == i { off_diagonal + 1.0 } else { a })
                        .collect()
                })
                .collect();
            let free_vector: Vec<f64> = (0..size).map(|_| rng.gen_range(1.0..10.0)).collect();

            let mut seidel = Seidel::new(Matrix::from_list(lines).unwrap(), free_vector).unwrap();
            let x = seidel.solve(1e-10);
            for r in residuals(&seidel, &x) {
                assert_abs_diff_eq!(r, 0.0, epsilon = 1e-6);
            }
        }
    }
}
