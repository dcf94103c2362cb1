use clap::Parser;
use plagdiff::{
    algorithm::{
        accumulate_diff_stats, calculate_plagiarism_score, calculate_text_plagiarism_score, check_threshold,
        find_lcs_length_optimized, preprocess::Tokenizer,
    },
    config::{Config, ConfigOpt, OutputMode},
    input::{read_file_pair, tokenize_big_files},
    report::{create_diff_report, ReportStyle},
    validate::{print_errors, validate},
    DynResult,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(arg_required_else_help(true))]
struct Args {
    /// The text that may have been plagiarized.
    original: PathBuf,
    /// The text checked for plagiarism.
    suspicious: PathBuf,
    /// Config file to use instead of the default one.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(flatten)]
    config_opt: ConfigOpt,
}

fn compare_words(paths: &[PathBuf; 2], config: &Config, threshold: f64) -> DynResult<()> {
    let ids = tokenize_big_files(paths)?;
    let lcs_length = find_lcs_length_optimized(&ids[0], &ids[1], threshold)?;
    let plagiarism = calculate_plagiarism_score(lcs_length, &ids[1])?;
    println!(
        "lcs = {lcs_length}, plagiarism = {:.precision$}%",
        plagiarism * 100.0,
        precision = config.precision
    );
    Ok(())
}

fn compare_sentences(paths: &[PathBuf; 2], config: &Config, threshold: f64) -> DynResult<()> {
    let input = read_file_pair(paths)?;
    let tokenizer = Tokenizer::new(&config.sentence_pattern)?;
    let [original, suspicious] = input.texts.map(|text| tokenizer.tokenize_by_lines(&text));

    if suspicious.is_empty() {
        eprintln!("{} has no sentences to check.", input.file_names[1]);
        return Ok(());
    }

    if config.mode == OutputMode::Summary {
        let plagiarism = calculate_text_plagiarism_score(&original, &suspicious, threshold)?;
        println!(
            "Text average plagiarism (words): {:.precision$}%",
            plagiarism * 100.0,
            precision = config.precision
        );
        return Ok(());
    }

    let stats = accumulate_diff_stats(&original, &suspicious, threshold)?;
    if config.validate {
        print_errors(&validate(&stats, &original, &suspicious));
    }
    if config.mode == OutputMode::Debug {
        println!("{stats:#?}");
    } else {
        let style = ReportStyle::from_config(config);
        println!("{}", create_diff_report(&original, &suspicious, &stats, &style));
    }
    Ok(())
}

fn try_main() -> DynResult<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?.update(args.config_opt);
    let threshold = check_threshold(config.threshold)?;
    let paths = [args.original, args.suspicious];

    match config.mode {
        OutputMode::Words => compare_words(&paths, &config, threshold),
        OutputMode::Report | OutputMode::Debug | OutputMode::Summary => compare_sentences(&paths, &config, threshold),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Returning the error from main() would print it with Debug instead of Display.
    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
