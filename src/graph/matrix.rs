//! Compressed sparse row matrix for adjacency extraction.
//!
//! Layout follows the usual CSR convention: row `i` owns
//! `indices[indptr[i]..indptr[i + 1]]` (column positions, ascending) and the
//! matching slice of `data`. Zero cells are never stored.

use serde::{Deserialize, Serialize};

/// Square sparse matrix of call counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseMatrix {
    dim: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<u64>,
}

impl SparseMatrix {
    /// Build a matrix from `(row, col, value)` triplets
    ///
    /// Repeated coordinates are summed and zero values dropped.
    /// Every coordinate must be below `dim`.
    pub fn from_triplets(dim: usize, mut triplets: Vec<(usize, usize, u64)>) -> Self {
        triplets.sort_unstable_by_key(|&(row, col, _)| (row, col));

        let mut indptr = vec![0usize; dim + 1];
        let mut indices = Vec::with_capacity(triplets.len());
        let mut data: Vec<u64> = Vec::with_capacity(triplets.len());
        let mut last: Option<(usize, usize)> = None;

        for (row, col, value) in triplets {
            debug_assert!(
                row < dim && col < dim,
                "cell ({}, {}) outside {}x{}",
                row,
                col,
                dim,
                dim
            );

            if value == 0 {
                continue;
            }

            if last == Some((row, col)) {
                if let Some(cell) = data.last_mut() {
                    *cell += value;
                }
                continue;
            }

            indices.push(col);
            data.push(value);
            indptr[row + 1] += 1;
            last = Some((row, col));
        }

        for row in 0..dim {
            indptr[row + 1] += indptr[row];
        }

        Self {
            dim,
            indptr,
            indices,
            data,
        }
    }

    /// Number of rows (and columns)
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.dim, self.dim)
    }

    /// Number of stored (non-zero) cells
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Value at `(row, col)`, or `None` when the coordinate is out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        if row >= self.dim || col >= self.dim {
            return None;
        }

        let (start, end) = (self.indptr[row], self.indptr[row + 1]);
        let value = self.indices[start..end]
            .binary_search(&col)
            .map(|offset| self.data[start + offset])
            .unwrap_or(0);

        Some(value)
    }

    /// Stored cells of one row as `(col, value)` pairs
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        let (start, end) = if row < self.dim {
            (self.indptr[row], self.indptr[row + 1])
        } else {
            (0, 0)
        };

        self.indices[start..end]
            .iter()
            .copied()
            .zip(self.data[start..end].iter().copied())
    }

    /// All stored cells as `(row, col, value)`, in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        (0..self.dim).flat_map(move |row| self.row(row).map(move |(col, value)| (row, col, value)))
    }

    /// Sum of all cells
    pub fn sum(&self) -> u64 {
        self.data.iter().sum()
    }

    /// Expand into a dense row-major matrix
    ///
    /// Allocates `dim * dim` cells; meant for small graphs and tests.
    pub fn to_dense(&self) -> Vec<Vec<u64>> {
        let mut dense = vec![vec![0u64; self.dim]; self.dim];
        for (row, col, value) in self.iter() {
            dense[row][col] = value;
        }
        dense
    }

    /// Check the CSR invariants of a deserialized matrix
    pub fn is_well_formed(&self) -> bool {
        self.indptr.len() == self.dim + 1
            && self.indptr.first() == Some(&0)
            && self.indptr.last() == Some(&self.indices.len())
            && self.indices.len() == self.data.len()
            && self.indptr.windows(2).all(|w| w[0] <= w[1])
            && self.indices.iter().all(|&col| col < self.dim)
            && self.data.iter().all(|&value| value > 0)
            && (0..self.dim).all(|row| {
                self.indices[self.indptr[row]..self.indptr[row + 1]]
                    .windows(2)
                    .all(|w| w[0] < w[1])
            })
    }
}
