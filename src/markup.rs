//! Inline markup normalization.
//!
//! Markdown images and code spans are rewritten into their HTML equivalents.
//! The output never contains the source patterns again, so running any of
//! these functions twice gives the same result as running it once.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `![alt](target)` anywhere in a string
static IMAGE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[[^\]]*\]\(([^)]+)\)").unwrap());

/// A line holding exactly one image token and nothing else
static STANDALONE_IMAGE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!\[[^\]]*\]\(([^)]+)\)$").unwrap());

static FENCED_CODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());

static INLINE_CODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Image found inside a larger piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef<'a> {
    /// Byte range of the whole `![alt](target)` token
    pub span: Range<usize>,
    pub target: &'a str,
}

/// Replace every image token with an `<img>` tag carrying `style`.
pub fn images_to_html(text: &str, style: &str) -> String {
    IMAGE_REGEX
        .replace_all(text, |caps: &Captures| {
            format!("<img src='{}' style='{}'>", &caps[1], style)
        })
        .into_owned()
}

/// Replace `` `code` `` spans with `<code>` tags.
pub fn inline_code_to_html(text: &str) -> String {
    INLINE_CODE_REGEX
        .replace_all(text, "<code>${1}</code>")
        .into_owned()
}

/// Replace triple-backtick fences with `<pre><code>` blocks, keeping the
/// interior (including line breaks) verbatim. Matching is non-greedy so each
/// opening fence pairs with the nearest closing one.
pub fn fenced_code_to_html(text: &str) -> String {
    FENCED_CODE_REGEX
        .replace_all(text, "<pre><code>${1}</code></pre>")
        .into_owned()
}

/// Normalization applied to option text: images, then inline code.
pub fn normalize_inline(text: &str, image_style: &str) -> String {
    inline_code_to_html(&images_to_html(text, image_style))
}

/// Target of a line that is nothing but one image token.
pub fn standalone_image(line: &str) -> Option<&str> {
    STANDALONE_IMAGE_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The first image token in `text`, if any.
pub fn first_image(text: &str) -> Option<ImageRef<'_>> {
    let caps = IMAGE_REGEX.captures(text)?;
    let whole = caps.get(0)?;
    let target = caps.get(1)?;
    Some(ImageRef {
        span: whole.range(),
        target: target.as_str(),
    })
}
