//! Vue-flavoured attribute detection on a tag's raw attribute text.

use regex::Regex;
use std::sync::LazyLock;

use crate::hit::HitKind;

// Classes are ASCII-only (`(?-u)`): `\w` and `\s` never match non-ASCII text.

/// Tokens after `:` that are XML namespace declarations, not prop bindings.
const XML_NAMESPACE_PREFIXES: &[&str] = &["xmlns", "xlink", "xml"];

// ` v-if=`, ` v-on:click.prevent=`, ... (closed directive set)
static DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i-u)\s(v-(?:if|else-if|else|for|show|model|on:[\w.-]+|bind:[\w.-]+|html|text|cloak|once|slot))\s*=",
    )
    .unwrap()
});

// ` @click=`, ` @submit.prevent=`
static EVENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)\s(@[A-Za-z][\w.-]*)\s*=").unwrap());

// ` :title=`; namespace tokens are filtered afterwards
static BIND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)\s:([A-Za-z_][\w.-]*)\s*=").unwrap());

/// A single attribute-level finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeHit {
    pub kind: HitKind,
    pub attr: String,
}

impl AttributeHit {
    fn new(kind: HitKind, attr: impl Into<String>) -> Self {
        Self {
            kind,
            attr: attr.into(),
        }
    }
}

/// Runs every attribute rule over `attrs`.
///
/// Rules fire independently and never suppress each other. Output is grouped
/// by rule (directives, events, bindings, mustache marker), each group in
/// left-to-right order.
pub fn scan_attributes(attrs: &str) -> Vec<AttributeHit> {
    let mut hits = Vec::new();

    for caps in DIRECTIVE_REGEX.captures_iter(attrs) {
        hits.push(AttributeHit::new(HitKind::VDirective, &caps[1]));
    }

    for caps in EVENT_REGEX.captures_iter(attrs) {
        hits.push(AttributeHit::new(HitKind::Event, &caps[1]));
    }

    for caps in BIND_REGEX.captures_iter(attrs) {
        let prop = &caps[1];
        if !is_xml_namespace(prop) {
            hits.push(AttributeHit::new(HitKind::Bind, format!(":{}", prop)));
        }
    }

    if attrs.contains("@{{") {
        hits.push(AttributeHit::new(HitKind::MustacheEscape, "@{{ ... }}"));
    }

    hits
}

/// True when the token's leading word is `xmlns`, `xlink` or `xml`.
fn is_xml_namespace(prop: &str) -> bool {
    let head = prop.split(['.', '-']).next().unwrap_or(prop);
    XML_NAMESPACE_PREFIXES
        .iter()
        .any(|ns| head.eq_ignore_ascii_case(ns))
}
