use std::hint::black_box;
use std::ops::{Index, IndexMut};

/// Dense square matrix stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    dim: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![0.0; dim * dim],
        }
    }

    pub fn from_fn(dim: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..dim {
            for j in 0..dim {
                m[(i, j)] = f(i, j);
            }
        }
        m
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.dim + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.dim + j]
    }
}

/// Left operand: every element of row `i` is `(i + 1) * 0.5`.
pub fn seed_a(dim: usize) -> Matrix {
    Matrix::from_fn(dim, |i, _| (i + 1) as f64 * 0.5)
}

/// Right operand: every element of column `j` is `(j + 1) * 1.5`.
pub fn seed_b(dim: usize) -> Matrix {
    Matrix::from_fn(dim, |_, j| (j + 1) as f64 * 1.5)
}

/// Naive O(n^3) product in i, j, k order. Deliberately not blocked or
/// vectorized: the point is to load the FPU and the cache hierarchy.
pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    debug_assert_eq!(a.dim, b.dim, "matrix dimensions must match");
    let n = a.dim;
    let mut result = Matrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                result[(i, j)] += a[(i, k)] * b[(k, j)];
            }
        }
    }
    result
}

/// Runs the matrix workload and returns the dimension that was multiplied.
pub fn run(dim: usize) -> usize {
    let a = seed_a(dim);
    let b = seed_b(dim);
    let result = multiply(black_box(&a), black_box(&b));
    black_box(&result);
    result.dim()
}
