//! Interactive terminal dashboard
//!
//! Two input modes, mirroring the web dashboard:
//! - Enter Text: analyze a single review
//! - Upload File: analyze a JSON/CSV/TXT file of reviews

use crate::customization::UiSettings;
use crate::error::Result;
use crate::ingest::load_reviews;
use crate::report::{render_batch, render_single};
use crate::sentiment::{PolarityScorer, ReviewAnalyzer};
use crossterm::style::Stylize;
use std::io::{BufRead, Write};

/// Menu choice parsed from a line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    EnterText,
    UploadFile,
    Quit,
}

impl InputMode {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "enter text" | "text" => Some(InputMode::EnterText),
            "2" | "upload file" | "file" => Some(InputMode::UploadFile),
            "q" | "quit" | "exit" => Some(InputMode::Quit),
            _ => None,
        }
    }
}

/// A dashboard session bound to an analyzer and resolved UI settings
pub struct Dashboard<'a, S: PolarityScorer> {
    analyzer: &'a ReviewAnalyzer<S>,
    settings: UiSettings,
    /// Color the title with the theme color
    styled: bool,
}

impl<'a, S: PolarityScorer> Dashboard<'a, S> {
    pub fn new(analyzer: &'a ReviewAnalyzer<S>, settings: UiSettings) -> Self {
        Self {
            analyzer,
            settings,
            styled: false,
        }
    }

    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Run until the user quits or input ends
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        self.write_header(&mut output)?;

        loop {
            writeln!(output, "\nChoose your input method:")?;
            writeln!(output, "  1) Enter Text")?;
            writeln!(output, "  2) Upload File")?;
            writeln!(output, "  q) Quit")?;
            let Some(choice) = prompt(&mut input, &mut output, "> ")? else {
                break;
            };

            match InputMode::parse(&choice) {
                Some(InputMode::EnterText) => self.enter_text(&mut input, &mut output)?,
                Some(InputMode::UploadFile) => self.upload_file(&mut input, &mut output)?,
                Some(InputMode::Quit) => break,
                None => writeln!(output, "Unknown choice: {}", choice.trim())?,
            }
        }

        output.flush()?;
        Ok(())
    }

    fn write_header<W: Write>(&self, output: &mut W) -> Result<()> {
        let title = format!("{} 🎯", self.settings.app_title);
        match self.settings.accent_color().filter(|_| self.styled) {
            Some(accent) => writeln!(output, "{}", title.as_str().with(accent))?,
            None => writeln!(output, "{title}")?,
        }
        if !self.settings.welcome_message.is_empty() {
            writeln!(output, "{}", self.settings.welcome_message)?;
        }
        Ok(())
    }

    fn enter_text<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        let Some(text) = prompt(input, output, "Enter your product review: ")? else {
            return Ok(());
        };
        let text = text.trim();
        if text.is_empty() {
            writeln!(output, "Please enter a review to analyze.")?;
            return Ok(());
        }

        match self.analyzer.analyze_review(text) {
            Ok(result) => write!(output, "{}", render_single(&result, &self.settings))?,
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn upload_file<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        let Some(path) = prompt(input, output, "Upload your reviews file (json, csv, txt): ")? else {
            return Ok(());
        };
        let path = path.trim();

        let reviews = match load_reviews(path) {
            Ok(reviews) => reviews,
            Err(e) => {
                tracing::debug!(path, error = %e, "Rejected upload");
                writeln!(output, "Error: {}", e)?;
                return Ok(());
            }
        };

        if reviews.is_empty() {
            writeln!(output, "No reviews found in {}", path)?;
            return Ok(());
        }

        match self.analyzer.analyze_reviews(&reviews) {
            Ok(batch) => write!(output, "{}", render_batch(&batch, &self.settings))?,
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
        Ok(())
    }
}

/// Print a prompt and read one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
