use crate::utils::{check_greater_than, check_num};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Window-average configuration parameters.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Config {
    pub series: SeriesConfig,
    pub average: AverageConfig,
}

/// Source of the step-function samples.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Inline `[time, level]` samples.
    #[serde(default)]
    pub samples: Option<Vec<[f64; 2]>>,
    /// Sample file with `time level` rows, relative to the root directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Character starting a comment in the sample file.
    #[serde(default = "default_comment_char")]
    pub comment_char: char,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AverageConfig {
    /// Averaging windows as `[lower, upper]` pairs.
    pub windows: Vec<[f64; 2]>,
}

fn default_comment_char() -> char {
    '#'
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        match (&self.series.samples, &self.series.file) {
            (Some(samples), None) => {
                check_num(samples.len(), 1..).context("invalid number of samples")?;
                for (i_sample, sample) in samples.iter().enumerate() {
                    if !sample[0].is_finite() {
                        bail!("sample {i_sample} has non-finite time {}", sample[0]);
                    }
                }
            }
            (None, Some(_)) => {}
            _ => bail!("series must define exactly one of samples and file"),
        }

        check_num(self.average.windows.len(), 1..).context("invalid number of windows")?;
        for (i_window, &[lower, upper]) in self.average.windows.iter().enumerate() {
            check_window(lower, upper).with_context(|| format!("invalid window {i_window}"))?;
        }

        Ok(())
    }
}

fn check_window(lower: f64, upper: f64) -> Result<()> {
    if !(lower.is_finite() && upper.is_finite()) {
        bail!("window bounds must be finite, but are [{lower}, {upper}]");
    }
    if lower == upper {
        bail!("window must have positive length, but both bounds are {lower}");
    }
    check_greater_than(upper, "upper bound", lower)?;
    Ok(())
}
