//! Lorem-ipsum text generators.

use super::person::pick;
use rand::Rng;

const WORDS: &[&str] = &[
    "alias", "consequatur", "aut", "perferendis", "sit", "voluptatem", "accusantium", "doloremque",
    "aperiam", "eaque", "ipsa", "quae", "ab", "illo", "inventore", "veritatis", "et", "quasi",
    "architecto", "beatae", "vitae", "dicta", "sunt", "explicabo", "aspernatur", "odit", "fugit",
    "sed", "quia", "consequuntur", "magni", "dolores", "eos", "qui", "ratione", "sequi", "nesciunt",
    "neque", "dolorem", "ipsum", "dolor", "amet", "consectetur", "adipisci", "velit", "numquam",
    "eius", "modi", "tempora", "incidunt", "ut", "labore", "dolore", "magnam", "aliquam",
    "quaerat", "enim", "minima", "veniam", "quis", "nostrum", "exercitationem", "ullam",
    "corporis", "nemo", "suscipit", "laboriosam", "nisi", "aliquid", "ex", "ea", "commodi",
];

pub fn word<R: Rng>(rng: &mut R) -> String {
    pick(rng, WORDS).to_string()
}

pub fn words<R: Rng>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| word(rng)).collect()
}

/// A capitalized sentence of roughly `nb_words` words, ending with a period.
///
/// With `variable` set the word count drifts by up to 40% either way.
pub fn sentence<R: Rng>(rng: &mut R, nb_words: usize, variable: bool) -> String {
    let count = if variable {
        let spread = (nb_words as f64 * 0.4).round() as usize;
        rng.gen_range(nb_words.saturating_sub(spread)..=nb_words + spread)
    } else {
        nb_words
    }
    .max(1);

    let mut text = words(rng, count).join(" ");
    if let Some(first) = text.get(..1) {
        text = first.to_uppercase() + &text[1..];
    }
    text.push('.');
    text
}

pub fn paragraph<R: Rng>(rng: &mut R, nb_sentences: usize, variable: bool) -> String {
    let count = if variable {
        let spread = (nb_sentences as f64 * 0.4).round() as usize;
        rng.gen_range(nb_sentences.saturating_sub(spread)..=nb_sentences + spread)
    } else {
        nb_sentences
    }
    .max(1);

    (0..count)
        .map(|_| sentence(rng, 6, true))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of at most `max_chars` characters made of whole sentences
/// (or whole words when a single sentence does not fit).
pub fn text<R: Rng>(rng: &mut R, max_chars: usize) -> String {
    let mut out = String::new();
    loop {
        let next = sentence(rng, 6, true);
        let candidate_len = if out.is_empty() {
            next.len()
        } else {
            out.len() + 1 + next.len()
        };
        if candidate_len > max_chars {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&next);
    }

    if out.is_empty() {
        // Not even one sentence fits: fall back to words.
        loop {
            let next = word(rng);
            let extra = if out.is_empty() { 0 } else { 1 };
            if out.len() + extra + next.len() + 1 > max_chars {
                break;
            }
            if extra == 1 {
                out.push(' ');
            }
            out.push_str(&next);
        }
        if out.is_empty() {
            out = word(rng).chars().take(max_chars.saturating_sub(1)).collect();
        }
        out.push('.');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_words_count() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(words(&mut rng, 5).len(), 5);
        assert!(words(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_sentence_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = sentence(&mut rng, 6, false);
        assert!(value.ends_with('.'));
        assert_eq!(value.split(' ').count(), 6);
        assert!(value.chars().next().unwrap().is_ascii_uppercase());
    }

    #[test]
    fn test_text_respects_max_chars() {
        let mut rng = StdRng::seed_from_u64(42);
        for max in [5, 20, 50, 200, 1000] {
            let value = text(&mut rng, max);
            assert!(value.len() <= max, "{} > {max}: {value}", value.len());
            assert!(!value.is_empty());
        }
    }

    #[test]
    fn test_paragraph_has_sentences() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = paragraph(&mut rng, 3, false);
        assert_eq!(value.matches('.').count(), 3);
    }
}
