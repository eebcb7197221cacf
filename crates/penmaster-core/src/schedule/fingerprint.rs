//! Content fingerprinting for approximate duplicate detection.
//!
//! Not cryptographic. The fingerprint only needs to equality-match
//! near-identical strings (case and whitespace insensitive) so the
//! generator and the variant dedupe pass can drop repeats cheaply.

/// Lowercase and collapse runs of whitespace to single spaces.
fn normalize(content: &str) -> String {
    content
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// djb2-style rolling hash of the normalized content, base-36 encoded.
pub fn fingerprint(content: &str) -> String {
    let mut hash: u32 = 5381;
    for ch in normalize(content).chars() {
        hash = hash.wrapping_mul(33) ^ (ch as u32);
    }
    to_base36(hash)
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_and_whitespace_insensitive() {
        assert_eq!(fingerprint("Hello  World"), fingerprint("hello world"));
        assert_eq!(fingerprint("  a\tb\nc "), fingerprint("A B C"));
    }

    #[test]
    fn distinct_content_differs() {
        assert_ne!(fingerprint("Post A"), fingerprint("Post B"));
    }

    #[test]
    fn stable_across_calls() {
        let a = fingerprint("Spring launch announcement");
        let b = fingerprint("Spring launch announcement");
        assert_eq!(a, b);
    }

    #[test]
    fn empty_content_hashes() {
        assert_eq!(fingerprint(""), fingerprint("   "));
    }
}
