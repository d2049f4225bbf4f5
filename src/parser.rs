use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::config::MarkupConfig;
use crate::markup;
use crate::question::{AnswerOption, Question, Quiz};

/// `- [x] text` or `- [ ] text`, marker case-insensitive
static OPTION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^- \[([xX ])\] ?(.*)$").unwrap());

/// Parse a document into its question blocks.
///
/// A block starts at a heading line and runs up to, but not including, the
/// next heading or back-to-top anchor. Everything outside a block is skipped.
pub fn parse(markdown: &str, config: &MarkupConfig) -> Quiz {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut quiz = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        let Some(heading) = line.strip_prefix(config.heading.as_str()) else {
            i += 1;
            continue;
        };

        let start_line = i + 1;
        let mut block = BlockBuilder::new(heading.trim());
        i += 1;

        while i < lines.len() {
            let line = lines[i].trim();
            // The boundary line stays unconsumed so the outer loop sees it
            if is_boundary(line, config) {
                break;
            }
            block.push_line(line, config);
            i += 1;
        }

        quiz.push(block.finish(start_line));
    }

    quiz
}

fn is_boundary(line: &str, config: &MarkupConfig) -> bool {
    line.starts_with(config.back_to_top.as_str()) || line.starts_with(config.heading.as_str())
}

/// Lines of one block, classified as they are read
struct BlockBuilder {
    question: String,
    options: Vec<AnswerOption>,
    // Lines that are neither options nor option images
    extra_text: Vec<String>,
}

impl BlockBuilder {
    fn new(heading: &str) -> Self {
        Self {
            question: heading.to_string(),
            options: Vec::new(),
            extra_text: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str, config: &MarkupConfig) {
        if line.is_empty() {
            return;
        }

        if let Some(caps) = OPTION_REGEX.captures(line) {
            let correct = caps[1].eq_ignore_ascii_case("x");
            let text = markup::normalize_inline(caps[2].trim(), &config.image_style);
            self.options.push(AnswerOption {
                text,
                correct,
                image: None,
            });
            return;
        }

        if let Some(target) = markup::standalone_image(line) {
            if let Some(last) = self.options.last_mut() {
                last.image = Some(target.to_string());
                return;
            }
        }

        self.extra_text.push(line.to_string());
    }

    fn finish(self, start_line: usize) -> Question {
        let mut question = self.question;
        let mut image = None;

        if !self.extra_text.is_empty() {
            let joined = self.extra_text.join("\n");
            match markup::first_image(&joined) {
                Some(found) => {
                    image = Some(found.target.to_string());
                    let remaining = format!(
                        "{}{}",
                        &joined[..found.span.start],
                        &joined[found.span.end..]
                    );
                    let remaining = remaining.trim();
                    if !remaining.is_empty() {
                        question.push_str("\n\n");
                        question.push_str(remaining);
                    }
                }
                None => {
                    question.push_str("\n\n");
                    question.push_str(&joined);
                }
            }
        }

        let question = markup::fenced_code_to_html(&question);
        let question = markup::inline_code_to_html(&question);

        let record = Question {
            question,
            options: self.options,
            image,
        };

        if record.options.is_empty() {
            warn!(line = start_line, "question block has no options");
        } else if record.correct_count() == 0 {
            warn!(line = start_line, "question block has no correct option");
        }
        debug!(
            line = start_line,
            options = record.options.len(),
            multiple_answer = record.is_multiple_answer(),
            has_image = record.image.is_some(),
            "parsed question block"
        );

        record
    }
}
