//! Pattern-based string generators.
//!
//! Placeholders:
//! - `#` - random digit
//! - `?` - random lowercase letter
//!
//! `numerify` replaces only `#`, `lexify` only `?`, `bothify` both.

use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Replace every `#` with a random digit.
pub fn numerify<R: Rng>(pattern: &str, rng: &mut R) -> String {
    replace_placeholders(pattern, rng, true, false)
}

/// Replace every `?` with a random letter.
pub fn lexify<R: Rng>(pattern: &str, rng: &mut R) -> String {
    replace_placeholders(pattern, rng, false, true)
}

/// Replace `#` with digits and `?` with letters.
pub fn bothify<R: Rng>(pattern: &str, rng: &mut R) -> String {
    replace_placeholders(pattern, rng, true, true)
}

fn replace_placeholders<R: Rng>(pattern: &str, rng: &mut R, digits: bool, letters: bool) -> String {
    let mut result = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        match c {
            '#' if digits => result.push(random_digit(rng)),
            '?' if letters => result.push(random_letter(rng)),
            other => result.push(other),
        }
    }
    result
}

pub(crate) fn random_digit<R: Rng>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(0..10u8))
}

pub(crate) fn random_letter<R: Rng>(rng: &mut R) -> char {
    char::from(LETTERS[rng.gen_range(0..LETTERS.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_numerify() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = numerify("code-###?", &mut rng);

        assert!(value.starts_with("code-"));
        assert!(value.ends_with('?'));
        assert_eq!(value.len(), 9);
        assert!(value[5..8].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_lexify() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = lexify("??-#", &mut rng);

        assert!(value[..2].chars().all(|c| c.is_ascii_lowercase()));
        assert!(value.ends_with("-#"));
    }

    #[test]
    fn test_bothify() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = bothify("##??", &mut rng);

        assert!(value[..2].chars().all(|c| c.is_ascii_digit()));
        assert!(value[2..].chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(bothify("##-??", &mut rng1), bothify("##-??", &mut rng2));
    }
}
