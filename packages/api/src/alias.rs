//! Alias validation and generation.
//!
//! An alias is the short user-facing identifier printed on QR tags:
//! 1 to 10 characters from `[A-Z0-9]`. Generated aliases are always 6
//! characters and are re-drawn until they collide with nothing already in
//! the loaded profile list.

use rand::Rng;

use crate::models::Profile;

const ALIAS_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const GENERATED_LEN: usize = 6;
pub const MAX_ALIAS_LEN: usize = 10;

/// Whether a string is a well-formed alias: `[A-Z0-9]{1,10}`.
pub fn is_valid_alias(alias: &str) -> bool {
    !alias.is_empty()
        && alias.len() <= MAX_ALIAS_LEN
        && alias
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Draw a random 6-character alias from `[A-Z0-9]`.
pub fn generate_alias<R: Rng>(rng: &mut R) -> String {
    (0..GENERATED_LEN)
        .map(|_| ALIAS_CHARS[rng.gen_range(0..ALIAS_CHARS.len())] as char)
        .collect()
}

/// Generate an alias that is not already used as an id or alias by any of
/// the given profiles.
pub fn unique_alias<R: Rng>(profiles: &[Profile], rng: &mut R) -> String {
    loop {
        let candidate = generate_alias(rng);
        let taken = profiles
            .iter()
            .any(|p| p.id == candidate || p.alias.as_deref() == Some(candidate.as_str()));
        if !taken {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profile_with_alias(alias: &str) -> Profile {
        Profile {
            id: alias.to_string(),
            plate_number: "ABC123".to_string(),
            first_name: "Sam".to_string(),
            state: "California".to_string(),
            description: None,
            alias: Some(alias.to_string()),
            created_at: None,
        }
    }

    #[test]
    fn test_is_valid_alias() {
        assert!(is_valid_alias("A"));
        assert!(is_valid_alias("CAR42"));
        assert!(is_valid_alias("ABCDEFGH12"));
        assert!(!is_valid_alias(""));
        assert!(!is_valid_alias("abc123"));
        assert!(!is_valid_alias("TOO-LONG"));
        assert!(!is_valid_alias("ABCDEFGHIJK"));
    }

    #[test]
    fn test_generated_alias_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let alias = generate_alias(&mut rng);
            assert_eq!(alias.len(), 6);
            assert!(is_valid_alias(&alias));
        }
    }

    #[test]
    fn test_unique_alias_avoids_existing() {
        // Seed a list with the first few draws of the same generator so the
        // loop is forced to skip past them.
        let mut setup = StdRng::seed_from_u64(42);
        let existing: Vec<Profile> = (0..3)
            .map(|_| profile_with_alias(&generate_alias(&mut setup)))
            .collect();

        let mut rng = StdRng::seed_from_u64(42);
        let alias = unique_alias(&existing, &mut rng);
        assert!(is_valid_alias(&alias));
        assert!(existing
            .iter()
            .all(|p| p.alias.as_deref() != Some(alias.as_str())));
    }
}
