// crates/heritage-core/src/text.rs

//! # Text utilities
//!
//! Folding, slugs and label formatting shared by the query layer and by
//! whatever renders its results. Anything that builds a URL path from a tag,
//! audience or region must go through [`slugify`] so the slugs it produces
//! match the ones the query layer compares against.

use std::cmp::Ordering;

/// Separator placed between alphanumeric runs of a slug.
pub const SLUG_SEPARATOR: char = '-';

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Case-fold, so a letter and its capital share one form
///    (`Ξ`/`ξ`, `µ`/`Μ`)
/// 2\) Transliterate Unicode → ASCII (e.g. `Éire` -> `Eire`)
/// 3\) Normalize to lowercase
///
/// Folding case before transliterating matters for scripts where the two
/// cases transliterate differently (`Ξ` gives `Ks`, `ξ` gives `x`).
///
/// # Examples
///
/// ```rust
/// use heritage_core::text::fold_key;
///
/// assert_eq!(fold_key("Dún Aonghasa"), "dun aonghasa");
/// ```
pub fn fold_key(s: &str) -> String {
    let cased = s.to_uppercase().to_lowercase();
    deunicode::deunicode(&cased).to_lowercase()
}

/// Accent-insensitive, case-insensitive substring test.
///
/// An empty needle matches everything.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_key(haystack).contains(&fold_key(needle))
}

/// Derive the URL slug of a label.
///
/// The label is folded with [`fold_key`], every run of characters outside
/// `[a-z0-9]` collapses into a single [`SLUG_SEPARATOR`], and separators at
/// either end are dropped. The function is idempotent and ignores case.
///
/// Accented and non-Latin letters are transliterated, not dropped:
/// `"Dún Aonghasa"` gives `"dun-aonghasa"`. Slugs built by a plain
/// `[a-z0-9]` filter over the raw label (`"d-n-aonghasa"`) will not match.
///
/// Distinct labels may share a slug (`"Co. Kerry"` and `"Co Kerry"` both give
/// `"co-kerry"`).
///
/// ```rust
/// use heritage_core::text::slugify;
///
/// assert_eq!(slugify("Family Friendly!"), "family-friendly");
/// assert_eq!(slugify("  --Bronze Age--  "), "bronze-age");
/// assert_eq!(slugify("Éire"), "eire");
/// ```
pub fn slugify(value: &str) -> String {
    let folded = fold_key(value);
    let mut out = String::with_capacity(folded.len());
    let mut pending_separator = false;

    for ch in folded.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !out.is_empty() {
                out.push(SLUG_SEPARATOR);
            }
            pending_separator = false;
            out.push(ch);
        } else {
            pending_separator = true;
        }
    }

    out
}

/// Turn a key-style string into a readable phrase.
///
/// A space goes in front of every ASCII capital, `-` and `_` become spaces,
/// whitespace runs collapse, and the first character is upper-cased. The rest
/// of the text keeps its case.
///
/// ```rust
/// use heritage_core::text::format_label;
///
/// assert_eq!(format_label("adultPrice"), "Adult Price");
/// assert_eq!(format_label("family_ticket"), "Family ticket");
/// assert_eq!(format_label("OPW"), "O P W");
/// ```
pub fn format_label(label: &str) -> String {
    let mut spaced = String::with_capacity(label.len() + 8);
    for ch in label.chars() {
        match ch {
            c if c.is_ascii_uppercase() => {
                spaced.push(' ');
                spaced.push(c);
            }
            '-' | '_' => spaced.push(' '),
            c => spaced.push(c),
        }
    }

    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut chars = collapsed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ordering used wherever labels are listed "ascending".
///
/// Compares the folded forms first so `"castle"` and `"Castle"` sit together,
/// then falls back to the raw strings to keep the order total.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    fold_key(a).cmp(&fold_key(b)).then_with(|| a.cmp(b))
}
