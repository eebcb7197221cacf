//! Pre-insertion variant dedupe against a user's existing posts.
//!
//! Before generation, the caller fingerprints everything already stored for
//! the user. Each fresh variant colliding with that set gets one retry with
//! a cycled variety tag appended; a variant that still collides is accepted
//! as-is. Bounded by design: never more than one attempt per variant.

use std::collections::HashSet;

use super::fingerprint::fingerprint;

/// Suffixes cycled onto colliding variants.
const VARIETY_TAGS: [&str; 5] = [
    "Fresh angle",
    "Alternative phrasing",
    "New perspective",
    "Another take",
    "Different spin",
];

/// Fingerprints of a user's existing post contents.
pub fn existing_fingerprints<'a, I>(contents: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    contents.into_iter().map(fingerprint).collect()
}

/// Rework variants that collide with already-stored content.
///
/// Order and length of the input are preserved; only colliding entries are
/// rewritten (or kept verbatim when the tagged form collides too).
pub fn dedupe_variants(variants: Vec<String>, existing: &HashSet<String>) -> Vec<String> {
    variants
        .into_iter()
        .enumerate()
        .map(|(i, variant)| {
            if !existing.contains(&fingerprint(&variant)) {
                return variant;
            }
            let tag = VARIETY_TAGS[i % VARIETY_TAGS.len()];
            let tagged = format!("{variant} ({tag})");
            if existing.contains(&fingerprint(&tagged)) {
                // Accepted duplicate: one retry only, no loop.
                variant
            } else {
                tagged
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_variants_pass_through() {
        let existing = existing_fingerprints(["Old news"]);
        let out = dedupe_variants(vec!["Brand new".into()], &existing);
        assert_eq!(out, vec!["Brand new".to_string()]);
    }

    #[test]
    fn collision_gets_a_variety_tag() {
        let existing = existing_fingerprints(["Weekly update"]);
        let out = dedupe_variants(vec!["Weekly  UPDATE".into()], &existing);
        assert_eq!(out, vec!["Weekly  UPDATE (Fresh angle)".to_string()]);
    }

    #[test]
    fn tags_cycle_by_position() {
        let existing = existing_fingerprints(["dup"]);
        let out = dedupe_variants(vec!["fine".into(), "dup".into()], &existing);
        assert_eq!(out[1], "dup (Alternative phrasing)");
    }

    #[test]
    fn double_collision_is_accepted_as_is() {
        let existing = existing_fingerprints(["promo", "promo (Fresh angle)"]);
        let out = dedupe_variants(vec!["Promo".into()], &existing);
        assert_eq!(out, vec!["Promo".to_string()]);
    }
}
