//! Picking a word from the list, filtered by sign count.

use crate::decompose::{decompose, visible_len};
use crate::glyphs::GlyphSet;
use crate::types::{LengthBounds, TrainerError, Word};

use rand::Rng;

/// Random draws before falling back to a full scan of the list.
const RANDOM_ATTEMPTS: usize = 100;

/// Pick a word whose sign count lies within `bounds`. Words that cannot be
/// spelled (unknown characters) are skipped. Rather than resampling
/// forever on bounds nothing satisfies, a full scan decides between a
/// qualifying word and `NoWordMatchesBounds`.
pub fn pick_word(
    words: &[String],
    glyphs: &GlyphSet,
    bounds: &LengthBounds,
    rng: &mut impl Rng,
) -> Result<Word, TrainerError> {
    let no_match = TrainerError::NoWordMatchesBounds {
        min: bounds.min(),
        max: bounds.max(),
    };
    if words.is_empty() {
        return Err(no_match);
    }

    for _ in 0..RANDOM_ATTEMPTS {
        let original = &words[rng.random_range(0..words.len())];
        if let Some(word) = spell(original, glyphs, bounds) {
            log::debug!("new word: {} {:?}", word.normalized, word.tokens);
            return Ok(word);
        }
        log::debug!("picking new word");
    }

    let mut candidates: Vec<Word> = words
        .iter()
        .filter_map(|w| spell(w, glyphs, bounds))
        .collect();
    if candidates.is_empty() {
        return Err(no_match);
    }
    Ok(candidates.swap_remove(rng.random_range(0..candidates.len())))
}

fn spell(original: &str, glyphs: &GlyphSet, bounds: &LengthBounds) -> Option<Word> {
    let normalized = original.to_lowercase();
    let tokens = decompose(&normalized, glyphs).ok()?;
    if !bounds.contains(visible_len(&tokens)) {
        return None;
    }
    Some(Word {
        original: original.to_string(),
        normalized,
        tokens,
    })
}

/// Smallest and largest sign count over all spellable words, or `None` if
/// nothing in the list can be spelled at all.
pub fn dataset_bounds(words: &[String], glyphs: &GlyphSet) -> Option<(usize, usize)> {
    let mut range: Option<(usize, usize)> = None;
    for word in words {
        if let Ok(tokens) = decompose(&word.to_lowercase(), glyphs) {
            let len = visible_len(&tokens);
            range = Some(match range {
                None => (len, len),
                Some((lo, hi)) => (lo.min(len), hi.max(len)),
            });
        }
    }
    range
}
