use std::fmt;

use crate::matrix::scalar::Scalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionsCount {
    None,
    Single,
    Infinity,
}

impl fmt::Display for SolutionsCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionsCount::None => write!(f, "none"),
            SolutionsCount::Single => write!(f, "single"),
            SolutionsCount::Infinity => write!(f, "infinity"),
        }
    }
}

/// One term `coefficient * x_index` of a parametrized solution.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixCell<T> {
    pub index: usize,
    pub coefficient: T,
}

impl<T: Scalar> MatrixCell<T> {
    pub fn new(index: usize, coefficient: T) -> Self {
        MatrixCell { index, coefficient }
    }
}

fn sign<T: Scalar>(value: &T) -> &'static str {
    if value.is_negative() {
        "-"
    } else {
        "+"
    }
}

impl<T: Scalar> fmt::Display for MatrixCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficient.is_zero() {
            return Ok(());
        }
        write!(
            f,
            "{} {}*x{} ",
            sign(&self.coefficient),
            self.coefficient.abs(),
            self.index
        )
    }
}

/// Value of the dependent variable `x_index` in an underdetermined system:
/// `free_value + sum(cell.coefficient * x_cell.index)` over the free variables.
#[derive(Debug, Clone, PartialEq)]
pub struct InfiniteSolution<T> {
    index: usize,
    free_value: T,
    cells: Vec<MatrixCell<T>>,
}

impl<T: Scalar> InfiniteSolution<T> {
    pub fn new(index: usize, free_value: T) -> Self {
        InfiniteSolution {
            index,
            free_value,
            cells: vec![],
        }
    }

    pub fn push(&mut self, cell: MatrixCell<T>) {
        self.cells.push(cell);
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn free_value(&self) -> &T {
        &self.free_value
    }

    pub fn cells(&self) -> &[MatrixCell<T>] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatrixCell<T>> {
        self.cells.iter()
    }

    /// Value of the dependent variable once every free variable is fixed.
    /// `assignment` is indexed by variable index, entries of dependent
    /// variables are ignored.
    pub fn evaluate(&self, assignment: &[T]) -> T {
        self.cells
            .iter()
            .fold(self.free_value.clone(), |acc, cell| {
                acc + cell.coefficient.clone() * assignment[cell.index].clone()
            })
    }
}

impl<'a, T> IntoIterator for &'a InfiniteSolution<T> {
    type Item = &'a MatrixCell<T>;
    type IntoIter = std::slice::Iter<'a, MatrixCell<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<T: Scalar> fmt::Display for InfiniteSolution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{} = ", self.index)?;
        for cell in &self.cells {
            write!(f, "{cell}")?;
        }
        write!(f, "{} {}", sign(&self.free_value), self.free_value.abs())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
