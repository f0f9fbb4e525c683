//! Conditional class-name composition for component markup.

/// Joins the non-empty entries with single spaces.
///
/// Empty entries are skipped, so conditional classes compose cleanly with
/// [`when`]:
///
/// ```rust
/// use folio_kernel::css::{classes, when};
///
/// let scrolled = false;
/// let class = classes(["site-header", when(scrolled, "is-scrolled")]);
/// assert_eq!(class, "site-header");
/// ```
pub fn classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// Returns `class` when `cond` holds, otherwise the empty string.
#[must_use]
pub const fn when(cond: bool, class: &str) -> &str {
    if cond { class } else { "" }
}
