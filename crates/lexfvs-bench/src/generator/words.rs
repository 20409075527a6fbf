//! Deterministic synthetic word names.
//!
//! Index `i` maps to a pronounceable string built from consonant-vowel
//! syllables, so generated dictionaries are readable in exports and every
//! index gets a distinct name.

const CONSONANTS: &[u8] = b"bdfgklmnprstvz";
const VOWELS: &[u8] = b"aeiou";

/// Returns the synthetic word for `index`.
pub fn word_name(index: usize) -> String {
    let base = CONSONANTS.len() * VOWELS.len();
    let mut n = index;
    let mut name = String::new();
    loop {
        let syllable = n % base;
        name.push(char::from(CONSONANTS[syllable / VOWELS.len()]));
        name.push(char::from(VOWELS[syllable % VOWELS.len()]));
        n /= base;
        if n == 0 {
            break;
        }
        n -= 1;
    }
    name
}
