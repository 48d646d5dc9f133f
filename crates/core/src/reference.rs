//! Image reference resolution for cover properties.
//!
//! A cover property can hold almost anything: an external URL, a
//! wiki-link, a markdown embed, a bare vault path, a color, a list of those,
//! or a host object with a string form. Resolution happens in two steps.
//! [`Reference::classify`] normalises the value once into a tagged variant,
//! then [`Reference::resolve`] turns the variant into an address, consulting
//! the [`LinkResolver`] only for vault-local targets.
//!
//! Both steps are total: every input yields a variant, and every variant
//! yields either an address or `None`.

use crate::style_types::parsers::{parse_hex_color, parse_markdown_image, parse_wiki_link, run_parser};
use crate::style_types::is_external_url;
use crate::traits::LinkResolver;
use crate::types_base::{Color, GENERIC_OBJECT_REPR, PropertyValue};

/// What a property value designates, decided without any lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference<'a> {
    /// Nothing: null, falsy, blank text or an empty list.
    Empty,
    /// A hex color. Never an image.
    HexColor(Color),
    /// An `http(s)://` address, usable as is. Also produced by markdown
    /// embeds whose target is external.
    ExternalUrl(&'a str),
    /// `[[target]]`. `raw` is the whole trimmed text, tried as a direct
    /// path if the target does not resolve.
    WikiLink { target: &'a str, raw: &'a str },
    /// `![alt](target)` with a vault-local target.
    MarkdownImage { target: &'a str, raw: &'a str },
    /// Any other text, looked up as a vault path.
    DirectPath(&'a str),
    /// A value with no usable string form (numbers, `true`, opaque objects).
    Unrecognized,
}

impl<'a> Reference<'a> {
    /// Classifies a property value.
    ///
    /// Lists are unwrapped to their first element, however deeply nested;
    /// objects are replaced by their string form.
    pub fn classify(value: &'a PropertyValue) -> Self {
        let mut current = value;
        loop {
            if current.is_falsy() {
                return Reference::Empty;
            }
            match current {
                PropertyValue::List(items) => match items.first() {
                    Some(first) => current = first,
                    None => return Reference::Empty,
                },
                PropertyValue::Text(text) => return Self::parse(text),
                PropertyValue::Object(Some(repr))
                    if !repr.is_empty() && repr != GENERIC_OBJECT_REPR =>
                {
                    return Self::parse(repr);
                }
                _ => return Reference::Unrecognized,
            }
        }
    }

    /// Classifies a string value.
    pub fn parse(text: &'a str) -> Self {
        let raw = text.trim();
        if raw.is_empty() {
            return Reference::Empty;
        }
        if let Ok(color) = run_parser(parse_hex_color, raw) {
            return Reference::HexColor(color);
        }
        // Before the link forms, so that brackets inside a URL are left alone.
        if is_external_url(raw) {
            return Reference::ExternalUrl(raw);
        }
        if let Ok(target) = run_parser(parse_wiki_link, raw) {
            return Reference::WikiLink { target, raw };
        }
        if let Ok(image) = run_parser(parse_markdown_image, raw) {
            if is_external_url(image.target) {
                return Reference::ExternalUrl(image.target);
            }
            return Reference::MarkdownImage { target: image.target, raw };
        }
        Reference::DirectPath(raw)
    }

    /// Turns the reference into an image address.
    ///
    /// Colors, empty and unrecognized values never produce one. Link targets
    /// that the resolver cannot find fall back to a lookup of the whole text.
    pub fn resolve<L>(&self, context_path: &str, links: &L) -> Option<String>
    where
        L: LinkResolver + ?Sized,
    {
        match *self {
            Reference::Empty | Reference::HexColor(_) | Reference::Unrecognized => None,
            Reference::ExternalUrl(url) => Some(url.to_string()),
            Reference::WikiLink { target, raw } | Reference::MarkdownImage { target, raw } => {
                lookup(links, target, context_path).or_else(|| {
                    log::debug!(
                        "Link target '{}' not found from '{}', trying '{}' as a path",
                        target,
                        context_path,
                        raw
                    );
                    lookup(links, raw, context_path)
                })
            }
            Reference::DirectPath(path) => lookup(links, path, context_path),
        }
    }

    pub fn as_color(&self) -> Option<&Color> {
        match self {
            Reference::HexColor(color) => Some(color),
            _ => None,
        }
    }
}

fn lookup<L>(links: &L, target: &str, context_path: &str) -> Option<String>
where
    L: LinkResolver + ?Sized,
{
    links
        .resolve_link(target, context_path)
        .map(|resolved| resolved.resource_address)
}

/// Resolves a property value to an image address, or `None` if it names no image.
pub fn resolve_image<L>(value: &PropertyValue, context_path: &str, links: &L) -> Option<String>
where
    L: LinkResolver + ?Sized,
{
    Reference::classify(value).resolve(context_path, links)
}
