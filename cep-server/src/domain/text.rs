//! City-name normalization and Portuguese ordering.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block (U+0300..=U+036F).
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Comparison key for city names: accents stripped, lower-cased, trimmed.
///
/// Used only to decide whether two names denote the same city, never for
/// display.
///
/// ```
/// use cep_server::domain::normalize_city;
///
/// assert_eq!(normalize_city("  SÃO PAULO "), "sao paulo");
/// assert_eq!(normalize_city("São Paulo"), normalize_city("sao paulo"));
/// ```
pub fn normalize_city(s: &str) -> String {
    let folded: String = s
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
        .collect();
    folded.trim().to_string()
}

/// Primary collation key: base letters only, case folded.
fn primary_key(s: &str) -> Vec<char> {
    s.nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Secondary key: the marks attached to each base letter, in order.
fn accent_key(s: &str) -> Vec<(usize, char)> {
    let mut base = 0usize;
    let mut marks = Vec::new();
    for c in s.nfd() {
        if is_combining_mark(c) {
            marks.push((base, c));
        } else {
            base += 1;
        }
    }
    marks
}

/// Tertiary key: lowercase sorts before uppercase at equal letters.
fn case_key(s: &str) -> Vec<bool> {
    s.nfd()
        .filter(|&c| !is_combining_mark(c))
        .map(char::is_uppercase)
        .collect()
}

/// Brazilian Portuguese ordering of two names.
///
/// Letters compare by their base form first, so "Ábaco" sorts next to
/// "Abacate" and not after "Zé Doca". Ties are broken by accents (an
/// unaccented letter first), then by case (lowercase first), then by raw
/// code points so the order is total.
pub fn compare_pt_br(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| compare_accents(&accent_key(a), &accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

/// Walk both mark lists together. At the first difference, the name with no
/// mark at that letter sorts first: either its list ran out or its next mark
/// sits on a later letter. Marks on the same letter compare by code point.
fn compare_accents(a: &[(usize, char)], b: &[(usize, char)]) -> Ordering {
    for (&(pa, ma), &(pb, mb)) in a.iter().zip(b) {
        match pb.cmp(&pa).then(ma.cmp(&mb)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Sort names in Brazilian Portuguese order. The sort is stable.
pub fn sort_pt_br(names: &mut [String]) {
    names.sort_by(|a, b| compare_pt_br(a, b));
}
