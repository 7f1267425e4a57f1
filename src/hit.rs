use std::fmt;

use serde::Serialize;

/// Category of a detected framework-usage pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HitKind {
    /// Tag name matches a component registered in the app entry.
    VueComponentTag,
    /// `v-if=`, `v-for=`, `v-on:click=`, ...
    VDirective,
    /// `@click=` style event shorthand.
    #[serde(rename = "@event")]
    Event,
    /// `:prop=` style binding shorthand.
    #[serde(rename = ":bind")]
    Bind,
    /// `@{{` inside a tag, the Blade escape for a Vue mustache.
    MustacheEscape,
    /// Tag name that is neither standard HTML/SVG nor a known component.
    CustomTag,
}

impl HitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HitKind::VueComponentTag => "vue-component-tag",
            HitKind::VDirective => "v-directive",
            HitKind::Event => "@event",
            HitKind::Bind => ":bind",
            HitKind::MustacheEscape => "mustache-escape",
            HitKind::CustomTag => "custom-tag",
        }
    }
}

impl fmt::Display for HitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected occurrence, tagged with its 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    pub line: usize,
    pub kind: HitKind,
    pub detail: String,
}

impl Hit {
    pub fn new(line: usize, kind: HitKind, detail: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            detail: detail.into(),
        }
    }

    /// Hit for a tag whose name alone is the signal, rendered as `<name>`.
    pub fn tag(line: usize, kind: HitKind, tag_name: &str) -> Self {
        Self::new(line, kind, format!("<{}>", tag_name))
    }
}
