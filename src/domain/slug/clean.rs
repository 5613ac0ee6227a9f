// src/domain/slug/clean.rs
use super::kana::collapse_separators;

pub const MIN_SLUG_LEN: usize = 3;
pub const MAX_SLUG_LEN: usize = 80;

/// Normalize romanizer output into `[a-z0-9-]`.
///
/// Latin letters with diacritics (`ō`, `â`) are transliterated; anything
/// outside the Latin ranges is discarded before slugifying.
pub fn clean_romanized(raw: &str) -> String {
    let latin: String = raw
        .chars()
        .map(|c| if is_latin(c) { c } else { ' ' })
        .collect();
    let slugged = slug::slugify(latin);
    let filtered: String = slugged
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();
    truncate(&collapse_separators(&filtered))
}

/// Cap the length and drop any separator left dangling at the cut.
pub fn truncate(slug: &str) -> String {
    if slug.len() <= MAX_SLUG_LEN {
        return slug.to_string();
    }
    slug[..MAX_SLUG_LEN].trim_end_matches('-').to_string()
}

fn is_latin(c: char) -> bool {
    c.is_ascii() || ('\u{00C0}'..='\u{024F}').contains(&c)
}
