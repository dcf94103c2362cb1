use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LcsError {
    #[error("cannot build an LCS matrix for an empty sequence")]
    EmptySequence,

    #[error("plagiarism threshold {0} is outside of [0, 1]")]
    ThresholdOutOfRange(f64),

    #[error("LCS length {lcs_length} exceeds the sentence length {sentence_length}")]
    LcsLengthExceedsSentence { lcs_length: usize, sentence_length: usize },

    /// Backtracking got a matrix that was not built for the (order-normalized) pair of sequences.
    #[error("LCS matrix has shape {actual:?}, expected {expected:?}")]
    MatrixShapeMismatch { expected: [usize; 2], actual: [usize; 2] },

    #[error("the suspicious text has no sentences")]
    EmptyText,
}
