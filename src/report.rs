use std::fmt::{self, Write};

use crate::{
    algorithm::{pad_text, DiffStats, Sentence, Token},
    config::Config,
};

pub struct ReportStyle {
    pub marker: String,
    pub precision: usize,
}

impl Default for ReportStyle {
    fn default() -> Self {
        ReportStyle::from_config(&Config::default())
    }
}

impl ReportStyle {
    pub fn from_config(config: &Config) -> Self {
        ReportStyle {
            marker: config.marker.clone(),
            precision: config.precision,
        }
    }
}

/// Joins the tokens with spaces and puts `marker` at every boundary position.
fn marked_sentence(sentence: &[Token], bounds: &[usize], marker: &str) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(sentence.len() + bounds.len());
    let mut bounds = bounds.iter().copied().peekable();
    for (index, token) in sentence.iter().enumerate() {
        while bounds.next_if(|&bound| bound <= index).is_some() {
            parts.push(marker);
        }
        parts.push(token);
    }
    parts.extend(bounds.map(|_| marker));
    parts.join(" ")
}

pub fn write_diff_report(
    output: &mut impl Write,
    original: &[Sentence],
    suspicious: &[Sentence],
    stats: &DiffStats,
    style: &ReportStyle,
) -> fmt::Result {
    let original = pad_text(original, suspicious);
    let precision = style.precision;
    let sentences = original
        .iter()
        .zip(suspicious)
        .zip(stats.difference_indexes.iter())
        .zip(stats.sentence_lcs_length.iter().zip(stats.sentence_plagiarism.iter()));
    for (((original_sentence, suspicious_sentence), difference), (lcs_length, plagiarism)) in sentences {
        writeln!(
            output,
            "- {}",
            marked_sentence(original_sentence, &difference.original, &style.marker)
        )?;
        writeln!(
            output,
            "+ {}",
            marked_sentence(suspicious_sentence, &difference.suspicious, &style.marker)
        )?;
        writeln!(output)?;
        writeln!(output, "lcs = {lcs_length}, plagiarism = {:.precision$}%", plagiarism * 100.0)?;
        writeln!(output)?;
    }
    write!(
        output,
        "Text average plagiarism (words): {:.precision$}%",
        stats.text_plagiarism * 100.0
    )
}

pub fn create_diff_report(
    original: &[Sentence],
    suspicious: &[Sentence],
    stats: &DiffStats,
    style: &ReportStyle,
) -> String {
    let mut report = String::new();
    write_diff_report(&mut report, original, suspicious, stats, style).expect("writing to a String cannot fail");
    report
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::{accumulate_diff_stats, test::text};

    fn tokens(text: &str) -> Vec<Token> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn markers_at_bounds() {
        let sentence = tokens("a small cat was on a red mat");
        assert_eq!(
            marked_sentence(&sentence, &[1, 2, 3, 4, 6, 7], "|"),
            "a | small | cat | was | on a | red | mat"
        );
        assert_eq!(marked_sentence(&sentence[..2], &[0, 2], "*"), "* a small *");
        assert_eq!(marked_sentence(&sentence[..2], &[], "*"), "a small");
        assert_eq!(marked_sentence(&[], &[], "*"), "");
    }

    #[test]
    fn full_report() {
        let original = text("i have a cat");
        let suspicious = text("i have a dog. his name is bruno");
        let stats = accumulate_diff_stats(&original, &suspicious, 0.3).unwrap();
        let report = create_diff_report(&original, &suspicious, &stats, &ReportStyle::default());
        assert_eq!(
            report,
            "- i have a | cat |\n\
             + i have a | dog |\n\
             \n\
             lcs = 3, plagiarism = 75.00%\n\
             \n\
             - \n\
             + | his name is bruno |\n\
             \n\
             lcs = 0, plagiarism = 0.00%\n\
             \n\
             Text average plagiarism (words): 37.50%"
        );
    }

    #[test]
    fn custom_style() {
        let original = text("a b");
        let style = ReportStyle {
            marker: "#".to_owned(),
            precision: 0,
        };
        let stats = accumulate_diff_stats(&original, &original, 0.3).unwrap();
        let report = create_diff_report(&original, &original, &stats, &style);
        assert_eq!(report, "- a b\n+ a b\n\nlcs = 2, plagiarism = 100%\n\nText average plagiarism (words): 100%");
    }
}
