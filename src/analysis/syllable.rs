//! Heuristic syllable counting.
//!
//! The readability formulas need a per-word syllable estimate, not phonetic
//! truth. The heuristic here counts vowel groups and discounts a trailing
//! silent `e`; it will misjudge words such as "queue" or many latinate
//! endings, and that inexactness is deliberate — the downstream formulas
//! were calibrated against exactly this kind of approximation.

/// Count syllables in a word (approximation).
///
/// The word is lower-cased and scanned left to right; each vowel group start
/// (`a`, `e`, `i`, `o`, `u`, `y` not immediately preceded by another vowel)
/// counts one syllable. A trailing `e` is dropped again when more than one
/// syllable was counted. The result is never below 1.
///
/// # Examples
///
/// ```
/// use prosa::analysis::syllable::count_syllables;
///
/// assert_eq!(count_syllables("cat"), 1);
/// assert_eq!(count_syllables("window"), 2);
/// assert_eq!(count_syllables("beautiful"), 3);
/// ```
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut syllable_count = 0usize;
    let mut previous_was_vowel = false;

    for ch in word.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            syllable_count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    // Silent 'e' heuristic
    if word.ends_with('e') && syllable_count > 1 {
        syllable_count -= 1;
    }

    syllable_count.max(1)
}
