use serde::{Deserialize, Serialize};

/// A single selectable answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub correct: bool,
    /// Standalone image line that followed the option in the source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One question block, with its options in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<AnswerOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Question {
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|o| o.correct).count()
    }

    /// More than one option is marked correct. Renderers use this to pick
    /// checkboxes over radio buttons.
    pub fn is_multiple_answer(&self) -> bool {
        self.correct_count() > 1
    }
}

/// All questions of a document, in document order
pub type Quiz = Vec<Question>;
