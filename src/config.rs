use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::algorithm::{preprocess::DEFAULT_SENTENCE_PATTERN, DEFAULT_PLAGIARISM_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Sentence-by-sentence report with marked differences.
    Report,
    /// Raw statistics record.
    Debug,
    /// Only the text average plagiarism.
    Summary,
    /// Compare the whole files as single word sequences, without sentence pairing.
    Words,
}

// Every `Config` field becomes an optional `ConfigOpt` field, so a config file or the command line
// only overrides what it names. An alias is a CLI-only flag that sets its target field to a fixed
// value, e.g. `--no-validate` sets `validate = false`; it is not read from config files.
macro_rules! config_structs {
    {
        $(
            $( #[config_opt($attr:meta)] )*
            pub $name:ident: $typ:ty,
        )*
        $(
            #[config_alias($atarget:ident = $avalue:expr)]
            $( #[config_opt($aattr:meta)] )*
            pub $aname:ident: bool,
        )*
    } => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct Config {
            $( pub $name: $typ, )*
        }

        #[derive(Args, Deserialize, Default)]
        pub struct ConfigOpt {
            $( $( #[$aattr] )* #[serde(skip)] pub $aname: bool, )*
            $( $( #[$attr] )* pub $name: Option<$typ>, )*
        }

        impl Config {
            pub fn update(self, mut opt: ConfigOpt) -> Config {
                // Aliases are applied first and win over an explicit value of their target.
                $(
                    if opt.$aname {
                        opt.$atarget = Some($avalue);
                    }
                )*
                Config {
                    $( $name: opt.$name.unwrap_or(self.$name), )*
                }
            }
        }
    }
}

config_structs! {
    #[config_opt(arg(short, long))]
    pub mode: OutputMode,

    #[config_opt(doc = "Minimum share of the longer sentence an LCS must cover to count as plagiarism")]
    #[config_opt(arg(short, long, value_name = "RATIO"))]
    pub threshold: f64,

    #[config_opt(doc = "Inserted at every boundary of a differing span in the report")]
    #[config_opt(arg(long, value_name = "STRING"))]
    pub marker: String,

    #[config_opt(doc = "Decimal digits of the reported percentages")]
    #[config_opt(arg(long, value_name = "NUM"))]
    pub precision: usize,

    #[config_opt(doc = "Regular expression splitting raw text into sentences")]
    #[config_opt(arg(long, value_name = "REGEX"))]
    pub sentence_pattern: String,

    #[config_opt(arg(long, require_equals = true, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL", group = "validate_group"))]
    pub validate: bool,

    #[config_alias(validate = false)]
    #[config_opt(arg(long, group = "validate_group"))]
    pub no_validate: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            mode: OutputMode::Report,
            threshold: DEFAULT_PLAGIARISM_THRESHOLD,
            marker: "|".to_owned(),
            precision: 2,
            sentence_pattern: DEFAULT_SENTENCE_PATTERN.to_owned(),
            validate: true,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("plagdiff").join("config.toml"))
}

impl Config {
    pub fn update_from_toml(self, contents: &str) -> Result<Config> {
        let opt: ConfigOpt = toml::from_str(contents)?;
        Ok(self.update(opt))
    }

    /// Defaults patched by the config file. An explicitly given file must exist, the default one is optional.
    pub fn load(explicit_path: Option<&Path>) -> Result<Config> {
        let config = Config::default();
        let path = match explicit_path {
            Some(path) => path.to_owned(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file found, using defaults");
                    return Ok(config);
                }
            },
        };
        debug!("reading config from {}", path.display());
        let contents =
            std::fs::read_to_string(&path).with_context(|| format!("cannot read config file {}", path.display()))?;
        config
            .update_from_toml(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn file_overrides_defaults() {
        let config = Config::default()
            .update_from_toml("threshold = 0.5\nmode = \"summary\"\nmarker = \"**\"")
            .unwrap();
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.mode, OutputMode::Summary);
        assert_eq!(config.marker, "**");
        assert_eq!(config.precision, 2);
        assert!(config.validate);
    }

    #[test]
    fn alias_wins_over_value() {
        let opt = ConfigOpt {
            validate: Some(true),
            no_validate: true,
            ..ConfigOpt::default()
        };
        assert!(!Config::default().update(opt).validate);
    }

    #[test]
    fn alias_is_ignored_in_config_file() {
        let config = Config::default().update_from_toml("no_validate = true").unwrap();
        assert!(config.validate);
    }

    #[test]
    fn unset_options_keep_previous_values() {
        let config = Config {
            precision: 5,
            ..Config::default()
        };
        assert_eq!(config.clone().update(ConfigOpt::default()), config);
    }

    #[test]
    fn rejects_malformed_file() {
        assert!(Config::default().update_from_toml("threshold = \"high\"").is_err());
        assert!(Config::default().update_from_toml("mode = \"fancy\"").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/plagdiff.toml"))).is_err());
    }
}
