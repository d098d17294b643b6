use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Read a text file, dropping comments and blank lines.
///
/// Everything from `comment_char` to the end of a line is removed. The result
/// is trimmed and keeps one `\n` between retained lines.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_and_filter<P: AsRef<Path>>(file: P, comment_char: char) -> Result<String> {
    let file = file.as_ref();
    let contents = fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
    Ok(filter_comments(&contents, comment_char))
}

pub fn filter_comments(contents: &str, comment_char: char) -> String {
    contents
        .lines()
        .map(|line| match line.find(comment_char) {
            Some(idx) => &line[..idx],
            None => line,
        })
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Parse `time level` rows separated by whitespace or commas.
///
/// Rows are numbered from 1 in errors, skipping blank lines.
pub fn parse_samples(text: &str) -> Result<Vec<(f64, f64)>> {
    let mut samples = Vec::new();
    let rows = text.lines().filter(|line| !line.trim().is_empty());
    for (i_row, row) in (1..).zip(rows) {
        let fields: Vec<_> = row
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect();
        if fields.len() != 2 {
            bail!("row {i_row} must have 2 fields, but has {}", fields.len());
        }
        let time = fields[0]
            .parse()
            .with_context(|| format!("invalid time on row {i_row}"))?;
        let level = fields[1]
            .parse()
            .with_context(|| format!("invalid level on row {i_row}"))?;
        samples.push((time, level));
    }
    Ok(samples)
}
