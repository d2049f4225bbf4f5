use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use quiz::{Config, MarkupConfig, QuizError};

const README: &str = "# Rust Quiz

Intro text that is not part of any question.

### What is 2+2?
- [ ] 3
- [x] 4

**[⬆ Back to Top]**

### Which shape is this?
![shape](img/circle.png)
- [x] Circle
- [ ] Square
![square](img/square.png)

**[⬆ Back to Top]**
";

#[test]
fn extract_file_writes_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("README.md");
    let output = dir.path().join("quiz.json");
    fs::write(&input, README).unwrap();

    let count = quiz::extract_file(&input, &output, &MarkupConfig::default()).unwrap();
    assert_eq!(count, 2);

    let written = fs::read_to_string(&output).unwrap();
    let expected = r#"[
  {
    "question": "What is 2+2?",
    "options": [
      {
        "text": "3",
        "correct": false
      },
      {
        "text": "4",
        "correct": true
      }
    ]
  },
  {
    "question": "Which shape is this?",
    "options": [
      {
        "text": "Circle",
        "correct": true
      },
      {
        "text": "Square",
        "correct": false,
        "image": "img/square.png"
      }
    ],
    "image": "img/circle.png"
  }
]"#;
    assert_eq!(written, expected);
}

#[test]
fn written_json_reads_back_into_questions() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("README.md");
    let output = dir.path().join("quiz.json");
    fs::write(&input, README).unwrap();

    quiz::extract_file(&input, &output, &MarkupConfig::default()).unwrap();

    let written: quiz::Quiz = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, quiz::parse(README));
}

#[test]
fn document_without_questions_writes_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("README.md");
    let output = dir.path().join("quiz.json");
    fs::write(&input, "# Title\n\n## Section\n\nNo questions here.\n").unwrap();

    let count = quiz::extract_file(&input, &output, &MarkupConfig::default()).unwrap();
    assert_eq!(count, 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
}

#[test]
fn missing_input_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.md");
    let output = dir.path().join("quiz.json");

    let result = quiz::extract_file(&input, &output, &MarkupConfig::default());
    assert!(matches!(result, Err(QuizError::ReadInput { ref path, .. }) if *path == input));
    assert!(!output.exists());
}

#[test]
fn missing_output_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("README.md");
    let output = dir.path().join("docs").join("quiz.json");
    fs::write(&input, README).unwrap();

    let result = quiz::extract_file(&input, &output, &MarkupConfig::default());
    assert!(matches!(result, Err(QuizError::WriteOutput { .. })));
    assert!(!output.exists());
}

#[test]
fn config_file_overrides_markup() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("quiz.toml");
    fs::write(
        &config_path,
        "[paths]\ninput = \"QUESTIONS.md\"\n\n[markup]\nimage_style = \"max-width:100px\"\n",
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    assert_eq!(config.paths.input, PathBuf::from("QUESTIONS.md"));
    assert_eq!(config.paths.output, PathBuf::from("docs/quiz.json"));

    let questions = quiz::parse_with_config("### Q\n- [x] ![a](a.png)", &config.markup);
    assert_eq!(questions[0].options[0].text, "<img src='a.png' style='max-width:100px'>");
}

#[test]
fn normalized_output_is_stable_under_renormalization() {
    let questions = quiz::parse("### Use `iter()` on ![v](v.png)\n```\nfor x in v {}\n```\n- [x] `ok`");
    let question = &questions[0].question;
    let renormalized =
        quiz::markup::inline_code_to_html(&quiz::markup::fenced_code_to_html(question));
    assert_eq!(&renormalized, question);
    assert_eq!(
        quiz::markup::normalize_inline(&questions[0].options[0].text, "max-width:320px"),
        questions[0].options[0].text
    );
}

#[test]
fn byte_order_mark_does_not_hide_first_question() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("README.md");
    let output = dir.path().join("quiz.json");
    fs::write(&input, "\u{feff}### First?\n- [x] yes\n### Second?\n- [ ] no\n").unwrap();

    let count = quiz::extract_file(&input, &output, &MarkupConfig::default()).unwrap();
    assert_eq!(count, 2);

    let written: quiz::Quiz = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written[0].question, "First?");
    assert_eq!(written[1].question, "Second?");
}
