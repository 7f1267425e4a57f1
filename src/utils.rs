//! Common utility functions shared across the codebase.

use std::path::{Component, Path};

/// Converts a PascalCase or camelCase component name to kebab-case.
///
/// A hyphen is inserted wherever an ASCII lowercase letter or digit is
/// directly followed by an ASCII uppercase letter, then the whole string is
/// lowercased. Runs of capitals are not split, and a leading capital never
/// gets a hyphen in front of it.
///
/// # Examples
///
/// ```
/// use findvue::utils::to_kebab_case;
///
/// assert_eq!(to_kebab_case("OtherThing"), "other-thing");
/// assert_eq!(to_kebab_case("myWidget"), "my-widget");
/// assert_eq!(to_kebab_case("Chart2D"), "chart2-d");
/// assert_eq!(to_kebab_case("HTMLEditor"), "htmleditor");
/// assert_eq!(to_kebab_case("MyHTMLEditor"), "my-htmleditor");
/// ```
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            out.push('-');
        }
        out.push(c);
        prev = Some(c);
    }

    out.to_lowercase()
}

/// Renders a path with forward slashes regardless of platform.
///
/// `.` components and trailing separators are dropped, so `./a/b/` and
/// `a/./b` both render as `a/b`.
pub fn normalize_path(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::CurDir => continue,
            Component::RootDir => out.push('/'),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out.replace('\\', "/")
}
