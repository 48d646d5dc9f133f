//! Low-level nom parser functions for property values.
//!
//! This module provides composable parsers for the shapes a cover property
//! can take: hex colors, wiki-links and markdown image embeds.

use deck_types::Color;
use nom::bytes::complete::{tag, take_while, take_while1, take_while_m_n};
use nom::character::complete::char;
use nom::combinator::{map_res, verify};
use nom::sequence::{delimited, pair, preceded};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

/// The pieces of a `![alt](target)` embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownImage<'a> {
    pub alt: &'a str,
    pub target: &'a str,
}

/// True for addresses that need no vault lookup.
pub fn is_external_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

// --- Color Parsers ---

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Parses a hex color with 3, 4, 6 or 8 digits (e.g. "#F00", "#FF000080").
pub fn parse_hex_color(input: &str) -> IResult<&str, Color> {
    map_res(
        preceded(
            char('#'),
            verify(take_while_m_n(3, 8, is_hex_digit), |digits: &str| {
                matches!(digits.len(), 3 | 4 | 6 | 8)
            }),
        ),
        |digits: &str| Color::from_hex(&format!("#{}", digits)),
    )
    .parse(input)
}

// --- Link Parsers ---

/// Parses a wiki-link (`[[target]]`), yielding the target.
///
/// The target must be non-empty and cannot contain `]`.
pub fn parse_wiki_link(input: &str) -> IResult<&str, &str> {
    delimited(tag("[["), take_while1(|c: char| c != ']'), tag("]]")).parse(input)
}

/// Parses a markdown image embed (`![alt](target)`).
///
/// The alt text may be empty; the target may not, and cannot contain `)`.
pub fn parse_markdown_image(input: &str) -> IResult<&str, MarkdownImage<'_>> {
    let (rest, (alt, target)) = preceded(
        char('!'),
        pair(
            delimited(char('['), take_while(|c: char| c != ']'), char(']')),
            delimited(char('('), take_while1(|c: char| c != ')'), char(')')),
        ),
    )
    .parse(input)?;
    Ok((rest, MarkdownImage { alt, target }))
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
///
/// The parser must consume the whole (trimmed) input.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}
