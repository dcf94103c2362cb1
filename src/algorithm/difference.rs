/// Boundaries of the spans not covered by the common subsequence, for both compared sentences.
///
/// Each list holds `start, end, start, end, ...` token positions; `end` is exclusive, so the bounds can
/// be used directly as insertion points for markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DifferenceIndexes {
    pub original: Vec<usize>,
    pub suspicious: Vec<usize>,
}

impl DifferenceIndexes {
    pub fn sides(&self) -> [&[usize]; 2] {
        [&self.original, &self.suspicious]
    }
}

/// Membership in `lcs` is checked by value, not by position: a token repeated elsewhere in the
/// sentence counts as covered as soon as the subsequence contains it once.
fn difference_bounds<T: PartialEq>(sentence: &[T], lcs: &[T]) -> Vec<usize> {
    let covered: Vec<bool> = sentence.iter().map(|token| lcs.contains(token)).collect();
    let mut bounds = vec![];
    for (i, &is_covered) in covered.iter().enumerate() {
        if is_covered {
            continue;
        }
        if i == 0 || covered[i - 1] {
            bounds.push(i);
        }
        if i == sentence.len() - 1 || covered[i + 1] {
            bounds.push(i + 1);
        }
    }
    bounds
}

pub fn find_diff_in_sentence<T: PartialEq>(original: &[T], suspicious: &[T], lcs: &[T]) -> DifferenceIndexes {
    DifferenceIndexes {
        original: difference_bounds(original, lcs),
        suspicious: difference_bounds(suspicious, lcs),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    #[test]
    fn trailing_difference() {
        let diff = find_diff_in_sentence(&words("i have a cat"), &words("i have a dog"), &words("i have a"));
        assert_eq!(diff.original, vec![3, 4]);
        assert_eq!(diff.suspicious, vec![3, 4]);
    }

    #[test]
    fn several_spans() {
        let diff = find_diff_in_sentence(
            &words("the big cat sat on a mat"),
            &words("a small cat was on a red mat"),
            &words("cat on a mat"),
        );
        assert_eq!(diff.original, vec![0, 2, 3, 4]);
        assert_eq!(diff.suspicious, vec![1, 2, 3, 4, 6, 7]);
    }

    #[test]
    fn whole_sentence_differs() {
        let diff = find_diff_in_sentence(&words("a b"), &words("c d e"), &[]);
        assert_eq!(diff.original, vec![0, 2]);
        assert_eq!(diff.suspicious, vec![0, 3]);
    }

    #[test]
    fn identical_sentences() {
        let sentence = words("nothing to see here");
        let diff = find_diff_in_sentence(&sentence, &sentence, &sentence);
        assert_eq!(diff, DifferenceIndexes::default());
    }

    #[test]
    fn empty_sentence_has_no_bounds() {
        let diff = find_diff_in_sentence(&[], &words("x y"), &[]);
        assert!(diff.original.is_empty());
        assert_eq!(diff.suspicious, vec![0, 2]);
    }

    #[test]
    fn repeated_token_counts_as_covered() {
        // The second "a" is not part of the alignment, but it still matches by value.
        let diff = find_diff_in_sentence(&words("a b a"), &words("a c"), &words("a"));
        assert_eq!(diff.original, vec![1, 2]);
        assert_eq!(diff.suspicious, vec![1, 2]);
    }
}
