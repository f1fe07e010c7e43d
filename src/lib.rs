//! Product Review Sentiment Analyzer
//!
//! Classifies short product reviews as positive, negative or neutral
//! with a lexicon-based scorer and summarizes batches for the CLI and
//! the terminal dashboard.

pub mod config;
pub mod customization;
pub mod dashboard;
pub mod error;
pub mod ingest;
pub mod report;
pub mod sentiment;

#[cfg(test)]
mod error_tests;
