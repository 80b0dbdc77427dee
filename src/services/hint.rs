use std::collections::{BTreeSet, HashSet};

/// Placeholder for positions not yet revealed
pub const HINT_PLACEHOLDER: char = '_';

/// A masked rendering of the secret word plus the letter set it discloses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintReveal {
    pub masked: String,
    pub revealed: BTreeSet<char>,
}

/// Decide which letters of a secret word to disclose
///
/// Reveals whole letters (every position of a chosen letter) until exactly
/// `letters_to_reveal` distinct letters are shown, or every revealable letter
/// if the word has fewer. Letters already guessed wrong are never revealed.
/// Letters revealed earlier in the round stay revealed, and new letters are
/// chosen in order of first appearance, left to right, so identical inputs
/// always produce the identical hint.
pub fn reveal_letters(
    word: &str,
    incorrect: &HashSet<char>,
    already_revealed: &HashSet<char>,
    letters_to_reveal: usize,
) -> HintReveal {
    let word_letters: Vec<char> = word.chars().collect();

    // Carry over prior reveals, dropping anything that is not actually a
    // revealable letter of this word
    let mut revealed: BTreeSet<char> = already_revealed
        .iter()
        .copied()
        .filter(|c| word_letters.contains(c) && !incorrect.contains(c))
        .collect();

    let target = letters_to_reveal.max(revealed.len());
    for &c in &word_letters {
        if revealed.len() >= target {
            break;
        }
        if !incorrect.contains(&c) {
            revealed.insert(c);
        }
    }

    let masked = word_letters
        .iter()
        .map(|c| if revealed.contains(c) { *c } else { HINT_PLACEHOLDER })
        .collect();

    HintReveal { masked, revealed }
}
