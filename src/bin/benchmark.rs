use std::{
    ffi::OsStr,
    fs::read_to_string,
    path::{Path, PathBuf},
    time::Instant,
};

use clap::Parser;
use plagdiff::algorithm::{
    find_lcs_length, find_lcs_length_optimized,
    preprocess::{tokenize_words, WordIds},
    DEFAULT_PLAGIARISM_THRESHOLD,
};
use rand::{Rng, SeedableRng};
use regex::Regex;

#[derive(Debug)]
struct Testcase {
    name: String,
    original: PathBuf,
    suspicious: PathBuf,
}

#[derive(Parser)]
struct Args {
    /// Directory with NAME.orig and NAME.susp file pairs.
    #[arg(required_unless_present = "random")]
    testcase_directory: Option<String>,

    #[arg(short, long, default_value_t = String::from(""))]
    filter: String,

    /// Compare two random texts with this many words instead of reading testcases.
    #[arg(long, value_name = "WORDS")]
    random: Option<usize>,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(short, long, default_value_t = DEFAULT_PLAGIARISM_THRESHOLD)]
    threshold: f64,
}

fn find_testcases(directory: &Path, filter: &Regex) -> Result<Vec<Testcase>, Box<dyn std::error::Error>> {
    let mut testcases = vec![];
    for file in std::fs::read_dir(directory)? {
        let path = file?.path();
        if path.extension() != Some(OsStr::new("orig")) {
            continue;
        }

        let Some(name) = path.file_stem().and_then(OsStr::to_str).map(str::to_owned) else {
            continue;
        };
        if !filter.is_match(&name) {
            continue;
        }
        let original = path;
        let mut suspicious = original.clone();
        suspicious.set_extension("susp");
        if !suspicious.exists() {
            continue;
        }

        testcases.push(Testcase {
            name,
            original,
            suspicious,
        });
    }
    testcases.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(testcases)
}

/// A random text and a copy of it with roughly a third of the words replaced.
fn random_texts(words: usize, seed: u64) -> [Vec<usize>; 2] {
    const VOCABULARY: usize = 2000;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    let original: Vec<usize> = (0..words).map(|_| rng.gen_range(0..VOCABULARY)).collect();
    let suspicious = original
        .iter()
        .map(|&word| {
            if rng.gen_bool(1.0 / 3.0) {
                rng.gen_range(0..VOCABULARY)
            } else {
                word
            }
        })
        .collect();
    [original, suspicious]
}

fn compare(name: &str, texts: &[Vec<usize>; 2], threshold: f64) -> Result<(), Box<dyn std::error::Error>> {
    println!("Compare {name}: {} vs {} words", texts[0].len(), texts[1].len());

    let start = Instant::now();
    let full = find_lcs_length(&texts[0], &texts[1], threshold)?;
    let full_time = start.elapsed();

    let start = Instant::now();
    let optimized = find_lcs_length_optimized(&texts[0], &texts[1], threshold)?;
    let optimized_time = start.elapsed();

    println!("full matrix: lcs = {full} in {full_time:?}");
    println!("two rows:    lcs = {optimized} in {optimized_time:?}");
    if full != optimized {
        return Err(format!("{name}: the LCS lengths differ").into());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(words) = args.random {
        return compare(
            &format!("random texts (seed {})", args.seed),
            &random_texts(words, args.seed),
            args.threshold,
        );
    }

    let regex = Regex::new(&args.filter)?;
    let directory = args.testcase_directory.unwrap_or_default();
    for testcase in find_testcases(Path::new(&directory), &regex)? {
        let mut ids = WordIds::default();
        let texts = [&testcase.original, &testcase.suspicious]
            .map(|path| read_to_string(path).map(|text| ids.intern(&tokenize_words(&text))));
        let [original, suspicious] = texts;
        compare(&testcase.name, &[original?, suspicious?], args.threshold)?;
    }

    Ok(())
}
