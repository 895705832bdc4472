//! Integration secret generation.

use uuid::Uuid;

/// Generate a fresh integration secret (UUID v4, canonical hyphenated form).
///
/// Each call draws new randomness; secrets are never stored or reused.
pub fn generate() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use uuid::{Uuid, Variant};

    use super::generate;

    #[test]
    fn canonical_hyphenated_form() {
        let secret = generate();
        assert_eq!(secret.len(), 36);
        for (i, c) in secret.char_indices() {
            match i {
                8 | 13 | 18 | 23 => assert_eq!(c, '-'),
                _ => assert!(c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            }
        }
    }

    #[test]
    fn version_and_variant_bits() {
        let parsed = Uuid::parse_str(&generate()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), Variant::RFC4122);
    }

    #[test]
    fn does_not_collide_over_many_samples() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate()));
        }
    }
}
