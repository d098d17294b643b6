use crate::config::Config;
use crate::io::{parse_samples, read_and_filter};
use crate::stats::{StepSeries, WindowReport};
use crate::utils::by_level;
use anyhow::{Context, Result, bail};
use glob::glob;
use rmp_serde::encode;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub struct Manager {
    root_dir: PathBuf,
    cfg: Config,
}

impl Manager {
    pub fn new<P: AsRef<Path>>(root_dir: P) -> Result<Self> {
        let root_dir = root_dir.as_ref().to_path_buf();

        let cfg =
            Config::from_file(root_dir.join("config.toml")).context("failed to construct cfg")?;
        log::info!("{cfg:#?}");

        Ok(Self { root_dir, cfg })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn load_series(&self) -> Result<StepSeries> {
        let samples: Vec<(f64, f64)> = match (&self.cfg.series.samples, &self.cfg.series.file) {
            (Some(samples), _) => samples.iter().map(|&[time, level]| (time, level)).collect(),
            (None, Some(file)) => {
                let file = self.root_dir.join(file);
                let text = read_and_filter(&file, self.cfg.series.comment_char)
                    .with_context(|| format!("failed to load {file:?}"))?;
                parse_samples(&text).with_context(|| format!("failed to parse {file:?}"))?
            }
            (None, None) => bail!("series must define samples or file"),
        };
        log::debug!("read {} samples", samples.len());

        let series = StepSeries::from_samples(samples).context("failed to build series")?;
        log::debug!("series has {} distinct sample times", series.len());

        Ok(series)
    }

    pub fn compute_averages(&self) -> Result<Vec<WindowReport>> {
        let series = self.load_series().context("failed to load series")?;

        let mut reports = Vec::with_capacity(self.cfg.average.windows.len());
        for &[lower, upper] in &self.cfg.average.windows {
            let report = WindowReport::new(&series, lower, upper)
                .with_context(|| format!("failed to average window [{lower}, {upper}]"))?;
            log::info!("average over [{lower}, {upper}] is {}", report.average);
            reports.push(report);
        }

        Ok(reports)
    }

    pub fn save_averages(&self) -> Result<()> {
        let reports = self
            .compute_averages()
            .context("failed to compute averages")?;

        let file = self.results_file();
        let file_handle =
            File::create(&file).with_context(|| format!("failed to create {file:?}"))?;
        let mut writer = BufWriter::new(file_handle);
        encode::write(&mut writer, &reports).context("failed to serialize reports")?;
        writer.flush().context("failed to flush writer stream")?;
        log::info!("saved {file:?}");

        Ok(())
    }

    pub fn inspect_series(&self) -> Result<()> {
        let series = self.load_series().context("failed to load series")?;
        let samples = series.samples();

        log::info!("number of samples: {}", series.len());
        if let (Some(first), Some(last)) = (series.first(), series.last()) {
            log::info!("time span: [{}, {}]", first.0, last.0);
        }
        if let (Some(min), Some(max)) = (
            samples.iter().min_by(|a, b| by_level(a, b)),
            samples.iter().max_by(|a, b| by_level(a, b)),
        ) {
            log::info!("level range: [{}, {}]", min.1, max.1);
        }

        Ok(())
    }

    pub fn clean_results(&self) -> Result<()> {
        let pattern = self.root_dir.join("results*.msgpack");
        let pattern = pattern.to_str().context("pattern is not valid UTF-8")?;
        for file in glob(pattern)
            .context("failed to glob results files")?
            .filter_map(|entry| entry.ok())
        {
            fs::remove_file(&file).with_context(|| format!("failed to remove {file:?}"))?;
            log::info!("removed {file:?}");
        }

        Ok(())
    }

    fn results_file(&self) -> PathBuf {
        self.root_dir.join("results.msgpack")
    }
}
