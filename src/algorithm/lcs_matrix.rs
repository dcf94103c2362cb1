use std::ops::{Index, IndexMut};

use super::LcsError;

/// Dynamic-programming table of a longest common subsequence computation.
///
/// Cell `[i][j]` holds the LCS length of `first[0..=i]` and `second[0..=j]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsMatrix {
    columns: usize,
    internal: Vec<usize>,
}

impl LcsMatrix {
    fn zeroed(rows: usize, columns: usize) -> Self {
        LcsMatrix {
            columns,
            internal: vec![0; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.internal.len() / self.columns
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn shape(&self) -> [usize; 2] {
        [self.rows(), self.columns]
    }

    /// LCS length of the prefixes `first[..first_len]` and `second[..second_len]`.
    /// An empty prefix on either side reads as 0.
    pub fn prefix(&self, first_len: usize, second_len: usize) -> usize {
        if first_len == 0 || second_len == 0 {
            0
        } else {
            self[first_len - 1][second_len - 1]
        }
    }

    /// The bottom-right cell, i.e. the LCS length of the whole sequences.
    pub fn lcs_length(&self) -> usize {
        self.internal[self.internal.len() - 1]
    }
}

impl Index<usize> for LcsMatrix {
    type Output = [usize];

    fn index(&self, row: usize) -> &Self::Output {
        &self.internal[(row * self.columns)..((row + 1) * self.columns)]
    }
}

impl IndexMut<usize> for LcsMatrix {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.internal[(row * self.columns)..((row + 1) * self.columns)]
    }
}

pub fn fill_lcs_matrix<T: PartialEq>(first: &[T], second: &[T]) -> Result<LcsMatrix, LcsError> {
    if first.is_empty() || second.is_empty() {
        return Err(LcsError::EmptySequence);
    }

    let mut matrix = LcsMatrix::zeroed(first.len(), second.len());
    for (i, first_token) in first.iter().enumerate() {
        for (j, second_token) in second.iter().enumerate() {
            matrix[i][j] = if first_token == second_token {
                matrix.prefix(i, j) + 1
            } else {
                std::cmp::max(matrix.prefix(i + 1, j), matrix.prefix(i, j + 1))
            };
        }
    }
    Ok(matrix)
}
