use std::collections::HashSet;
use std::sync::LazyLock;

/// Common HTML and SVG element names, lowercase.
///
/// Only used to keep ordinary markup out of the custom-tag heuristic, so
/// it is deliberately not exhaustive.
const STANDARD_TAGS: &[&str] = &[
    // HTML
    "html", "head", "title", "meta", "link", "style", "script", "body", "header", "footer", "nav",
    "main", "section", "article", "aside", "h1", "h2", "h3", "h4", "h5", "h6", "p", "div", "span",
    "a", "ul", "ol", "li", "dl", "dt", "dd", "table", "thead", "tbody", "tfoot", "tr", "td", "th",
    "form", "label", "input", "textarea", "select", "option", "button", "fieldset", "legend",
    "datalist", "output", "progress", "meter", "img", "picture", "source", "figure",
    "figcaption", "canvas", "iframe", "video", "audio", "track", "map", "area", "blockquote",
    "pre", "code", "small", "strong", "em", "i", "b", "u", "s", "sub", "sup", "br", "hr", "time",
    "mark", "kbd", "samp", "var", "template", "slot",
    // SVG
    "svg", "g", "path", "rect", "circle", "ellipse", "line", "polyline", "polygon", "text", "defs",
    "use", "symbol", "clippath", "mask", "lineargradient", "radialgradient", "stop", "pattern",
    "filter",
];

static STANDARD_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STANDARD_TAGS.iter().copied().collect());

/// True for a built-in HTML/SVG element name. Expects a lowercased name.
pub fn is_standard_tag(lower_name: &str) -> bool {
    STANDARD_TAG_SET.contains(lower_name)
}
