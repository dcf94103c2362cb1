use index_vec::IndexVec;
use log::debug;

use super::{
    backtrack::find_lcs,
    calculate_plagiarism_score,
    difference::{find_diff_in_sentence, DifferenceIndexes},
    lcs_length::{apply_threshold, check_threshold, normalized_matrix},
    scoring::{average_score, pad_text},
    LcsError, Sentence,
};

index_vec::define_index_type! {
    pub struct SentenceIndex = usize;
}

/// Comparison results of two texts, one entry per suspicious sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffStats {
    pub text_plagiarism: f64,
    pub sentence_plagiarism: IndexVec<SentenceIndex, f64>,
    pub sentence_lcs_length: IndexVec<SentenceIndex, usize>,
    pub difference_indexes: IndexVec<SentenceIndex, DifferenceIndexes>,
}

impl DiffStats {
    pub fn sentence_count(&self) -> usize {
        self.sentence_plagiarism.len()
    }
}

struct SentenceStats {
    lcs_length: usize,
    plagiarism: f64,
    difference: DifferenceIndexes,
}

fn compare_sentences(
    original: &Sentence,
    suspicious: &Sentence,
    plagiarism_threshold: f64,
) -> Result<SentenceStats, LcsError> {
    // One matrix serves both the thresholded length and the subsequence.
    let (lcs_length, lcs) = match normalized_matrix(original, suspicious) {
        Some(matrix) => {
            let lcs_length = apply_threshold(matrix.lcs_length(), matrix.columns(), plagiarism_threshold);
            (lcs_length, find_lcs(original, suspicious, &matrix)?)
        }
        None => (0, vec![]),
    };
    Ok(SentenceStats {
        lcs_length,
        plagiarism: calculate_plagiarism_score(lcs_length, suspicious)?,
        difference: find_diff_in_sentence(original, suspicious, &lcs),
    })
}

pub fn accumulate_diff_stats(
    original: &[Sentence],
    suspicious: &[Sentence],
    plagiarism_threshold: f64,
) -> Result<DiffStats, LcsError> {
    let plagiarism_threshold = check_threshold(plagiarism_threshold)?;
    if suspicious.is_empty() {
        return Err(LcsError::EmptyText);
    }
    let original = pad_text(original, suspicious);

    let mut sentence_plagiarism = IndexVec::with_capacity(suspicious.len());
    let mut sentence_lcs_length = IndexVec::with_capacity(suspicious.len());
    let mut difference_indexes = IndexVec::with_capacity(suspicious.len());
    for (original_sentence, suspicious_sentence) in original.iter().zip(suspicious) {
        let stats = compare_sentences(original_sentence, suspicious_sentence, plagiarism_threshold)?;
        let index: SentenceIndex = sentence_lcs_length.push(stats.lcs_length);
        debug!(
            "sentence {}: lcs = {}, plagiarism = {:.3}, differences = {:?}",
            index.raw(),
            stats.lcs_length,
            stats.plagiarism,
            stats.difference
        );
        sentence_plagiarism.push(stats.plagiarism);
        difference_indexes.push(stats.difference);
    }

    Ok(DiffStats {
        text_plagiarism: average_score(sentence_plagiarism.iter().copied())?,
        sentence_plagiarism,
        sentence_lcs_length,
        difference_indexes,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::{calculate_text_plagiarism_score, test::text};

    #[test]
    fn one_entry_per_suspicious_sentence() {
        let original = text("i have a cat. his name is bruno");
        let suspicious = text("i have a dog. his name is bruno. he is grey");
        let stats = accumulate_diff_stats(&original, &suspicious, 0.3).unwrap();

        assert_eq!(stats.sentence_count(), 3);
        assert_eq!(stats.sentence_lcs_length.raw, vec![3, 4, 0]);
        assert_eq!(stats.sentence_plagiarism.raw, vec![0.75, 1.0, 0.0]);
        assert_eq!(
            stats.difference_indexes[SentenceIndex::new(0)],
            DifferenceIndexes {
                original: vec![3, 4],
                suspicious: vec![3, 4]
            }
        );
        assert_eq!(stats.difference_indexes[SentenceIndex::new(1)], DifferenceIndexes::default());
        assert_eq!(
            stats.difference_indexes[SentenceIndex::new(2)],
            DifferenceIndexes {
                original: vec![],
                suspicious: vec![0, 3]
            }
        );
        assert!((stats.text_plagiarism - 1.75 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn agrees_with_text_score() {
        let original = text("the quick brown fox jumps. over the lazy dog. and runs away");
        let suspicious = text("a quick red fox jumps. under the lazy cat");
        for threshold in [0.0, 0.3, 0.6, 1.0] {
            let stats = accumulate_diff_stats(&original, &suspicious, threshold).unwrap();
            let text_score = calculate_text_plagiarism_score(&original, &suspicious, threshold).unwrap();
            assert!((stats.text_plagiarism - text_score).abs() < 1e-9);
        }
    }

    #[test]
    fn weak_match_keeps_its_differences() {
        // The length is zeroed by the threshold, the alignment is still reported.
        let original = text("the cat");
        let suspicious = text("the dog sat on a mat");
        let stats = accumulate_diff_stats(&original, &suspicious, 0.3).unwrap();
        assert_eq!(stats.sentence_lcs_length.raw, vec![0]);
        assert_eq!(stats.sentence_plagiarism.raw, vec![0.0]);
        assert_eq!(stats.difference_indexes[SentenceIndex::new(0)].suspicious, vec![1, 6]);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(accumulate_diff_stats(&text("a"), &[], 0.3), Err(LcsError::EmptyText));
        assert_eq!(
            accumulate_diff_stats(&text("a"), &text("a"), -1.0),
            Err(LcsError::ThresholdOutOfRange(-1.0))
        );
    }
}
