mod backtrack;
mod difference;
mod error;
mod lcs_length;
mod lcs_matrix;
pub mod preprocess;
mod scoring;
mod statistics;

pub use self::{
    backtrack::find_lcs,
    difference::{find_diff_in_sentence, DifferenceIndexes},
    error::LcsError,
    lcs_length::{
        check_threshold, find_lcs_length, find_lcs_length_optimized, order_normalized, DEFAULT_PLAGIARISM_THRESHOLD,
    },
    lcs_matrix::{fill_lcs_matrix, LcsMatrix},
    scoring::{calculate_plagiarism_score, calculate_text_plagiarism_score, pad_text},
    statistics::{accumulate_diff_stats, DiffStats, SentenceIndex},
};

/// A lowercase word without punctuation.
pub type Token = String;

/// May be empty when it only pads a shorter text.
pub type Sentence = Vec<Token>;

/// Sentences of two texts are compared by position.
pub type Text = Vec<Sentence>;
