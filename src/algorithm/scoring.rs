use std::borrow::Cow;

use super::{find_lcs_length_optimized, LcsError, Sentence};

/// Share of the suspicious sentence covered by the common subsequence, in `[0, 1]`.
pub fn calculate_plagiarism_score<T>(lcs_length: usize, suspicious_sentence: &[T]) -> Result<f64, LcsError> {
    if suspicious_sentence.is_empty() {
        return Ok(0.0);
    }
    if lcs_length > suspicious_sentence.len() {
        return Err(LcsError::LcsLengthExceedsSentence {
            lcs_length,
            sentence_length: suspicious_sentence.len(),
        });
    }
    Ok(lcs_length as f64 / suspicious_sentence.len() as f64)
}

/// Extends `original` with empty sentences at the end until it has as many sentences as
/// `suspicious`. Sentences are paired purely by position, so a longer `original` is left as is and
/// its extra sentences never take part in a comparison.
pub fn pad_text<'a>(original: &'a [Sentence], suspicious: &[Sentence]) -> Cow<'a, [Sentence]> {
    if original.len() >= suspicious.len() {
        return Cow::Borrowed(original);
    }
    let mut padded = original.to_vec();
    padded.resize_with(suspicious.len(), Sentence::new);
    Cow::Owned(padded)
}

pub(super) fn average_score(scores: impl ExactSizeIterator<Item = f64>) -> Result<f64, LcsError> {
    let count = scores.len();
    if count == 0 {
        return Err(LcsError::EmptyText);
    }
    Ok(scores.sum::<f64>() / count as f64)
}

/// Mean of the sentence scores over all suspicious sentences, after padding the original text.
pub fn calculate_text_plagiarism_score(
    original: &[Sentence],
    suspicious: &[Sentence],
    plagiarism_threshold: f64,
) -> Result<f64, LcsError> {
    let original = pad_text(original, suspicious);
    let scores = suspicious
        .iter()
        .zip(original.iter())
        .map(|(suspicious_sentence, original_sentence)| {
            let lcs_length = find_lcs_length_optimized(suspicious_sentence, original_sentence, plagiarism_threshold)?;
            calculate_plagiarism_score(lcs_length, suspicious_sentence)
        })
        .collect::<Result<Vec<f64>, LcsError>>()?;
    average_score(scores.into_iter())
}
