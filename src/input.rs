use crate::algorithm::preprocess::{tokenize_words, WordIds};
use crate::DynResult;
use log::debug;
use std::path::{Path, PathBuf};

pub struct ProgramInput {
    pub texts: [String; 2],
    pub file_names: [String; 2],
}

fn read_text(path: &Path) -> DynResult<String> {
    std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()).into())
}

pub fn read_file_pair(paths: &[PathBuf; 2]) -> DynResult<ProgramInput> {
    let [original, suspicious] = paths;
    Ok(ProgramInput {
        texts: [read_text(original)?, read_text(suspicious)?],
        file_names: [0, 1].map(|side| paths[side].display().to_string()),
    })
}

/// Reads each file as one word sequence and maps the words to numeric ids shared by all the files.
pub fn tokenize_big_files(paths: &[PathBuf]) -> DynResult<Vec<Vec<usize>>> {
    let mut ids = WordIds::default();
    let mut result = vec![];
    for path in paths {
        let words = tokenize_words(&read_text(path)?);
        debug!("{}: {} words", path.display(), words.len());
        result.push(ids.intern(&words));
    }
    debug!("{} distinct words", ids.distinct_words());
    Ok(result)
}
