//! Opening-tag discovery.
//!
//! Tags are found with a single regex pass rather than a real HTML parser.
//! A `>` inside a quoted attribute value ends the match early; that
//! inaccuracy is accepted. Callers only depend on the [`TagFinder`] trait,
//! so a parser-backed finder can replace [`RegexTagFinder`] later.

use regex::Regex;
use std::sync::LazyLock;

/// An opening tag as found in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOccurrence<'a> {
    /// Tag name as written, e.g. `div`, `x-alert`, `flux:button`.
    pub name: &'a str,
    /// Everything between the tag name and the closing `>`, unparsed.
    pub attrs: &'a str,
    /// Byte offset of the `<` that opens the tag.
    pub offset: usize,
}

pub trait TagFinder {
    /// Yields opening tags in left-to-right order.
    fn find_tags<'a>(&self, content: &'a str) -> impl Iterator<Item = TagOccurrence<'a>> + 'a;
}

// `<` + name + shortest run without `>` + `>`. The name is an ASCII letter
// followed by ASCII word chars, colons or hyphens, and always ends on a word
// char, which is where an ASCII `\b` after the longest such run would land.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([a-zA-Z](?:[A-Za-z0-9_:-]*[A-Za-z0-9_])?)([^>]*?)>").unwrap()
});

#[derive(Debug, Default, Clone, Copy)]
pub struct RegexTagFinder;

impl TagFinder for RegexTagFinder {
    fn find_tags<'a>(&self, content: &'a str) -> impl Iterator<Item = TagOccurrence<'a>> + 'a {
        TAG_REGEX.captures_iter(content).filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(TagOccurrence {
                name: name.as_str(),
                attrs: caps.get(2).map_or("", |m| m.as_str()),
                offset: whole.start(),
            })
        })
    }
}
