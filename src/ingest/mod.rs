//! Review ingestion from uploaded files
//!
//! Accepts:
//! - JSON: `{"comments": ["...", ...]}`
//! - CSV: header row, review text in the first column
//! - TXT: one review per non-empty line


use crate::error::{ReviewError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Supported input file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewFormat {
    Json,
    Csv,
    Text,
}

impl ReviewFormat {
    /// Pick the format from a file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Ok(ReviewFormat::Json),
            "csv" => Ok(ReviewFormat::Csv),
            "txt" => Ok(ReviewFormat::Text),
            other => Err(ReviewError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Pick the format from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(ext)
    }
}

#[derive(Debug, Deserialize)]
struct CommentsFile {
    #[serde(default)]
    comments: Vec<String>,
}

/// Parse reviews of a known format from any reader
pub fn parse_reviews<R: Read>(format: ReviewFormat, reader: R) -> Result<Vec<String>> {
    match format {
        ReviewFormat::Json => parse_json(reader),
        ReviewFormat::Csv => parse_csv(reader),
        ReviewFormat::Text => parse_text(reader),
    }
}

/// Load reviews from a file, choosing the parser by extension
pub fn load_reviews<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let format = ReviewFormat::from_path(path)?;
    let file = File::open(path)?;
    let reviews = parse_reviews(format, BufReader::new(file))?;

    tracing::debug!(
        path = %path.display(),
        ?format,
        count = reviews.len(),
        "Loaded reviews"
    );

    Ok(reviews)
}

fn parse_json<R: Read>(reader: R) -> Result<Vec<String>> {
    let file: CommentsFile = serde_json::from_reader(reader)?;
    Ok(file.comments)
}

fn parse_csv<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut reviews = Vec::new();
    for record in rdr.records() {
        let record = record?;
        // Empty cells carry no review
        if let Some(text) = record.get(0).filter(|t| !t.is_empty()) {
            reviews.push(text.to_string());
        }
    }
    Ok(reviews)
}

fn parse_text<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
