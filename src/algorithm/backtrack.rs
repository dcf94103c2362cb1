use super::{order_normalized, LcsError, LcsMatrix};

/// Recovers the longest common subsequence from a filled matrix.
///
/// The sequences are order-normalized the same way [`super::find_lcs_length`] does it, and `matrix` must
/// have been built for the normalized pair. When both neighbours of a mismatching cell hold the same
/// value, the walk moves up (decrements the index into the first sequence); this decides which of
/// several optimal subsequences is returned.
pub fn find_lcs<T: PartialEq + Clone>(first: &[T], second: &[T], matrix: &LcsMatrix) -> Result<Vec<T>, LcsError> {
    let (first, second) = order_normalized(first, second);
    if first.is_empty() || second.is_empty() {
        return Err(LcsError::EmptySequence);
    }
    let expected = [first.len(), second.len()];
    if matrix.shape() != expected {
        return Err(LcsError::MatrixShapeMismatch {
            expected,
            actual: matrix.shape(),
        });
    }
    if matrix.lcs_length() == 0 {
        return Ok(vec![]);
    }

    let mut result = Vec::with_capacity(matrix.lcs_length());
    // Prefix lengths, so the walk also visits the top-left cell and no token is left to prepend
    // once it leaves the grid.
    let (mut i, mut j) = (first.len(), second.len());
    while i > 0 && j > 0 {
        if first[i - 1] == second[j - 1] {
            result.push(first[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if matrix.prefix(i, j - 1) > matrix.prefix(i - 1, j) {
            j -= 1;
        } else {
            i -= 1;
        }
    }

    result.reverse();
    debug_assert_eq!(result.len(), matrix.lcs_length());
    Ok(result)
}
