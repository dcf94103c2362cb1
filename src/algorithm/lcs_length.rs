use super::{fill_lcs_matrix, LcsError, LcsMatrix};

pub const DEFAULT_PLAGIARISM_THRESHOLD: f64 = 0.3;

pub fn check_threshold(plagiarism_threshold: f64) -> Result<f64, LcsError> {
    // Also rejects NaN.
    if (0.0..=1.0).contains(&plagiarism_threshold) {
        Ok(plagiarism_threshold)
    } else {
        Err(LcsError::ThresholdOutOfRange(plagiarism_threshold))
    }
}

/// Swaps the sequences so that the first one is never longer than the second one.
pub fn order_normalized<'a, T>(first: &'a [T], second: &'a [T]) -> (&'a [T], &'a [T]) {
    if first.len() > second.len() {
        (second, first)
    } else {
        (first, second)
    }
}

/// Weak matches are treated as coincidental: a length covering less than `plagiarism_threshold`
/// of the longer sequence is reported as 0.
pub(super) fn apply_threshold(lcs_length: usize, longer_len: usize, plagiarism_threshold: f64) -> usize {
    if lcs_length as f64 / longer_len as f64 >= plagiarism_threshold {
        lcs_length
    } else {
        0
    }
}

/// Builds the matrix for the order-normalized pair, or `None` when one of the sequences is empty.
pub(super) fn normalized_matrix<T: PartialEq>(first: &[T], second: &[T]) -> Option<LcsMatrix> {
    let (shorter, longer) = order_normalized(first, second);
    fill_lcs_matrix(shorter, longer).ok()
}

pub fn find_lcs_length<T: PartialEq>(first: &[T], second: &[T], plagiarism_threshold: f64) -> Result<usize, LcsError> {
    let plagiarism_threshold = check_threshold(plagiarism_threshold)?;
    match normalized_matrix(first, second) {
        Some(matrix) => Ok(apply_threshold(
            matrix.lcs_length(),
            matrix.columns(),
            plagiarism_threshold,
        )),
        None => Ok(0),
    }
}

/// Same contract as [`find_lcs_length`], but keeps only two rows of the matrix in memory.
pub fn find_lcs_length_optimized<T: PartialEq>(
    first: &[T],
    second: &[T],
    plagiarism_threshold: f64,
) -> Result<usize, LcsError> {
    let plagiarism_threshold = check_threshold(plagiarism_threshold)?;
    // The longer sequence drives the outer loop so rows are as short as possible.
    let (shorter, longer) = order_normalized(first, second);
    if shorter.is_empty() {
        return Ok(0);
    }

    // previous[j] is the LCS length of the already processed prefix of `longer` and `shorter[..j]`.
    let mut previous = vec![0usize; shorter.len() + 1];
    let mut current = vec![0usize; shorter.len() + 1];
    for longer_token in longer {
        for (j, shorter_token) in shorter.iter().enumerate() {
            current[j + 1] = if longer_token == shorter_token {
                previous[j] + 1
            } else {
                std::cmp::max(current[j], previous[j + 1])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }
    let lcs_length = previous[shorter.len()];

    Ok(apply_threshold(lcs_length, longer.len(), plagiarism_threshold))
}
