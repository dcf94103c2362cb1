use log::warn;

use super::algorithm::{pad_text, DiffStats, Sentence};

const EPSILON: f64 = 1e-9;

/// Checks the invariants of a statistics record against the texts it was computed from.
pub fn validate(stats: &DiffStats, original: &[Sentence], suspicious: &[Sentence]) -> Vec<String> {
    let mut errors = vec![];

    // The parallel sequences have one entry per suspicious sentence.
    for (name, len) in [
        ("sentence_lcs_length", stats.sentence_lcs_length.len()),
        ("sentence_plagiarism", stats.sentence_plagiarism.len()),
        ("difference_indexes", stats.difference_indexes.len()),
    ] {
        if len != suspicious.len() {
            errors.push(format!(
                "{name} has {len} entries, but the suspicious text has {} sentences",
                suspicious.len()
            ));
        }
    }
    if !errors.is_empty() {
        return errors;
    }

    let original = pad_text(original, suspicious);
    for (index, suspicious_sentence) in suspicious.iter().enumerate() {
        let original_sentence = &original[index];
        let lcs_length = stats.sentence_lcs_length.raw[index];
        let plagiarism = stats.sentence_plagiarism.raw[index];

        // An LCS is never longer than either sentence.
        let shorter = std::cmp::min(original_sentence.len(), suspicious_sentence.len());
        if lcs_length > shorter {
            errors.push(format!(
                "Sentence {index} has lcs length {lcs_length}, but its shorter side has only {shorter} tokens"
            ));
        }

        // The score is the covered share of the suspicious sentence.
        let expected = if suspicious_sentence.is_empty() {
            0.0
        } else {
            lcs_length as f64 / suspicious_sentence.len() as f64
        };
        if !(0.0..=1.0).contains(&plagiarism) || (plagiarism - expected).abs() > EPSILON {
            errors.push(format!(
                "Sentence {index} has plagiarism {plagiarism}, expected {expected}"
            ));
        }

        // Bounds come in increasing (start, end) pairs within the sentence.
        let difference = &stats.difference_indexes.raw[index];
        for (side_name, bounds, sentence) in [
            ("original", &difference.original, original_sentence),
            ("suspicious", &difference.suspicious, suspicious_sentence),
        ] {
            if bounds.len() % 2 != 0 {
                errors.push(format!(
                    "The {side_name} side of sentence {index} has an odd number of difference bounds"
                ));
            }
            for i in 1..bounds.len() {
                if bounds[i - 1] >= bounds[i] {
                    errors.push(format!(
                        "The {side_name} side of sentence {index} has bound {} at {} which is not smaller than {} at {}",
                        bounds[i - 1],
                        i - 1,
                        bounds[i],
                        i
                    ));
                }
            }
            if let Some(&last) = bounds.last() {
                if last > sentence.len() {
                    errors.push(format!(
                        "The {side_name} side of sentence {index} has bound {last}, but only {} tokens",
                        sentence.len()
                    ));
                }
            }
        }
    }

    // The text score is the mean of the sentence scores.
    let mean = stats.sentence_plagiarism.iter().sum::<f64>() / suspicious.len() as f64;
    if !suspicious.is_empty() && (stats.text_plagiarism - mean).abs() > EPSILON {
        errors.push(format!(
            "Text plagiarism is {}, but the mean sentence plagiarism is {mean}",
            stats.text_plagiarism
        ));
    }

    errors
}

pub fn print_errors(errors: &[String]) {
    if !errors.is_empty() {
        warn!("Statistics validation errors:");
        for error in errors {
            warn!("  {error}");
        }
    }
}
