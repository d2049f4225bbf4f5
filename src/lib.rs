//! Extract quiz questions written as markdown checkbox lists into JSON.
//!
//! A question is a `### ` heading followed by `- [x]` / `- [ ]` option
//! lines, optionally with images and free text, closed by the next heading
//! or a `**[⬆ Back to Top]**` anchor.

mod config;
mod error;
mod json;
pub mod markup;
mod parser;
mod question;

pub use config::{Config, MarkupConfig, PathsConfig};
pub use error::{QuizError, Result};
pub use question::{AnswerOption, Question, Quiz};

use std::fs;
use std::path::Path;

use tracing::info;

/// Parse markdown text into questions using the default markers.
pub fn parse(markdown: &str) -> Quiz {
    parse_with_config(markdown, &Config::compiled_default().markup)
}

/// Parse markdown text into questions with custom markers.
pub fn parse_with_config(markdown: &str, config: &MarkupConfig) -> Quiz {
    parser::parse(markdown, config)
}

/// Serialize questions to pretty-printed JSON.
pub fn to_json(quiz: &Quiz) -> Result<String> {
    json::quiz_to_json(quiz)
}

/// Read `input`, extract its questions and write them as JSON to `output`.
///
/// The output file is written in one call after everything else succeeded,
/// so a failure leaves no partial file behind. The parent directory of
/// `output` must already exist. Returns the number of questions written.
pub fn extract_file(input: &Path, output: &Path, config: &MarkupConfig) -> Result<usize> {
    let markdown = fs::read_to_string(input).map_err(|source| QuizError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    info!(path = %input.display(), bytes = markdown.len(), "read document");

    // A leading BOM is not whitespace to `str::trim`
    let markdown = markdown.strip_prefix('\u{feff}').unwrap_or(&markdown);
    let quiz = parse_with_config(markdown, config);
    let json = to_json(&quiz)?;

    fs::write(output, json).map_err(|source| QuizError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;
    info!(path = %output.display(), questions = quiz.len(), "wrote quiz");

    Ok(quiz.len())
}
