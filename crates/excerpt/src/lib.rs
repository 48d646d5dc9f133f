//! Short previews of note text.
//!
//! [`excerpt`] drops a leading frontmatter block, trims the rest and cuts
//! it down to a maximum length at the most natural boundary available:
//! a paragraph break, then a sentence end, then a word gap, and only then
//! mid-word.
//!
//! Lengths and positions count `char`s, so a cut never lands inside a code
//! point.

use serde::Serialize;

/// Appended when the excerpt ends mid-sentence.
pub const TRUNCATION_MARKER: &str = "...";

/// Paragraph and sentence breaks must sit past this fraction of the limit.
pub const BREAK_THRESHOLD: f64 = 0.5;

/// Word breaks must sit past this fraction of the limit.
pub const WORD_THRESHOLD: f64 = 0.7;

const FRONTMATTER_OPEN: &str = "---\n";
const FRONTMATTER_CLOSE: &str = "\n---\n";
const SENTENCE_ENDS: [&str; 3] = [". ", "! ", "? "];

/// Where an excerpt was cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Boundary {
    /// The text fit; nothing was cut.
    Whole,
    Paragraph,
    Sentence,
    Word,
    /// No acceptable boundary; cut at the limit.
    Hard,
}

impl Boundary {
    pub fn is_marked(&self) -> bool {
        matches!(self, Boundary::Word | Boundary::Hard)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Excerpt {
    pub text: String,
    pub boundary: Boundary,
}

/// Splits a leading `---` frontmatter block off `raw`.
///
/// The block opens with a `---` line at the very start and ends at the first
/// following `---` line. Returns the block's inner text (if any) and the rest
/// of the document after the closing delimiter line.
pub fn split_frontmatter(raw: &str) -> (Option<&str>, &str) {
    let Some(after_open) = raw.strip_prefix(FRONTMATTER_OPEN) else {
        return (None, raw);
    };
    match after_open.find(FRONTMATTER_CLOSE) {
        Some(close) => (
            Some(&after_open[..close]),
            &after_open[close + FRONTMATTER_CLOSE.len()..],
        ),
        None => (None, raw),
    }
}

/// Excerpt of `raw` of at most `max_length` chars (plus the marker).
pub fn excerpt(raw: &str, max_length: usize) -> String {
    excerpt_with_boundary(raw, max_length).text
}

/// Like [`excerpt`], also reporting which boundary was used.
pub fn excerpt_with_boundary(raw: &str, max_length: usize) -> Excerpt {
    let (_, body) = split_frontmatter(raw);
    truncate(body.trim(), max_length)
}

/// Cuts already-cleaned `content` down to `max_length` chars.
pub fn truncate(content: &str, max_length: usize) -> Excerpt {
    let Some((window_end, _)) = content.char_indices().nth(max_length) else {
        return Excerpt { text: content.to_string(), boundary: Boundary::Whole };
    };
    let window = &content[..window_end];

    let limit = max_length as f64;
    let position = |byte_index: usize| window[..byte_index].chars().count() as f64;

    if let Some(paragraph) = window.rfind("\n\n")
        && position(paragraph) > limit * BREAK_THRESHOLD
    {
        return Excerpt { text: window[..paragraph].to_string(), boundary: Boundary::Paragraph };
    }

    let sentence = SENTENCE_ENDS.iter().filter_map(|end| window.rfind(end)).max();
    if let Some(sentence) = sentence
        && position(sentence) > limit * BREAK_THRESHOLD
    {
        // Keep the punctuation mark, drop the space.
        return Excerpt { text: window[..=sentence].to_string(), boundary: Boundary::Sentence };
    }

    if let Some(space) = window.rfind(' ')
        && position(space) > limit * WORD_THRESHOLD
    {
        return Excerpt {
            text: format!("{}{}", &window[..space], TRUNCATION_MARKER),
            boundary: Boundary::Word,
        };
    }

    Excerpt { text: format!("{}{}", window, TRUNCATION_MARKER), boundary: Boundary::Hard }
}
