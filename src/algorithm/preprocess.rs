use regex::Regex;
use string_interner::{DefaultStringInterner, Symbol as _};
use unicode_segmentation::UnicodeSegmentation as _;

use super::{Sentence, Text};

pub const DEFAULT_SENTENCE_PATTERN: &str = "[.!?]";

/// Splits raw text into sentences of lowercase, punctuation-free tokens.
pub struct Tokenizer {
    sentence_bounds: Regex,
}

impl Tokenizer {
    pub fn new(sentence_pattern: &str) -> Result<Tokenizer, regex::Error> {
        Ok(Tokenizer {
            sentence_bounds: Regex::new(sentence_pattern)?,
        })
    }

    /// `"I have a cat.\nHis name is Bruno"` becomes `[["i", "have", "a", "cat"], ["his", "name", "is", "bruno"]]`.
    /// Sentences without any word are dropped.
    pub fn tokenize_by_lines(&self, text: &str) -> Text {
        self.sentence_bounds
            .split(text)
            .map(tokenize_words)
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new(DEFAULT_SENTENCE_PATTERN).expect("the default sentence pattern is a valid regex")
    }
}

pub fn tokenize_words(text: &str) -> Sentence {
    text.unicode_words()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// Maps words to numeric ids. The same interner must be used for every compared text, otherwise the
/// ids are not comparable.
#[derive(Default)]
pub struct WordIds {
    interner: DefaultStringInterner,
}

impl WordIds {
    pub fn intern(&mut self, words: &[String]) -> Vec<usize> {
        words
            .iter()
            .map(|word| self.interner.get_or_intern(word).to_usize())
            .collect()
    }

    pub fn distinct_words(&self) -> usize {
        self.interner.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splits_sentences_and_words() {
        let text = Tokenizer::default().tokenize_by_lines("I have a cat.\nHis name is Bruno");
        assert_eq!(
            text,
            vec![
                vec!["i", "have", "a", "cat"],
                vec!["his", "name", "is", "bruno"]
            ]
        );
    }

    #[test]
    fn drops_punctuation_and_empty_sentences() {
        let text = Tokenizer::default().tokenize_by_lines("Hello, world!! ... What's up? -- ;");
        assert_eq!(text, vec![vec!["hello", "world"], vec!["whats", "up"]]);
    }

    #[test]
    fn custom_sentence_pattern() {
        let tokenizer = Tokenizer::new(r"\n").unwrap();
        let text = tokenizer.tokenize_by_lines("one. two\nthree");
        assert_eq!(text, vec![vec!["one", "two"], vec!["three"]]);
        assert!(Tokenizer::new("[").is_err());
    }

    #[test]
    fn keeps_numbers() {
        assert_eq!(tokenize_words("Room 101, floor 3"), vec!["room", "101", "floor", "3"]);
    }

    #[test]
    fn shared_ids() {
        let mut ids = WordIds::default();
        let first = ids.intern(&tokenize_words("to be or not to be"));
        let second = ids.intern(&tokenize_words("not to be"));
        assert_eq!(first, vec![0, 1, 2, 3, 0, 1]);
        assert_eq!(second, vec![3, 0, 1]);
        assert_eq!(ids.distinct_words(), 4);
    }
}
