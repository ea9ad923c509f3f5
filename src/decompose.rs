//! Spelling a word out into sign tokens.
//!
//! The scan walks the lowercased word left to right. Rule order matters:
//! "sch" wins over a doubled letter, a doubled letter wins over the
//! umlaut/ß rule. A doubled letter collapses into one sign that slides in
//! sideways; umlauts and ß use the base letter's sign sliding in from
//! above. Any character without a sign fails the whole word.

use crate::glyphs::GlyphSet;
use crate::types::{GlyphToken, Motion, TrainerError};

pub const BLANK: &str = "blank";

fn base_char(c: char) -> char {
    match c {
        'ä' => 'a',
        'ö' => 'o',
        'ü' => 'u',
        'ß' => 's',
        _ => c,
    }
}

/// Spell out an already lowercased word. The returned sequence always ends
/// with the blank card.
pub fn decompose(word: &str, glyphs: &GlyphSet) -> Result<Vec<GlyphToken>, TrainerError> {
    let chars: Vec<char> = word.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len() + 1);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let base = base_char(c);
        if !glyphs.has_char(base) {
            log::warn!("no sign for {c:?}, skipping {word:?}");
            return Err(TrainerError::UnsupportedCharacter(c));
        }

        if chars[i..].starts_with(&['s', 'c', 'h']) {
            tokens.push(GlyphToken::new("sch", Motion::None));
            i += 3;
        } else if chars.get(i + 1) == Some(&c) {
            tokens.push(GlyphToken::new(base.to_string(), Motion::SlideRight));
            i += 2;
        } else if matches!(c, 'ä' | 'ö' | 'ü' | 'ß') {
            tokens.push(GlyphToken::new(base.to_string(), Motion::SlideDown));
            i += 1;
        } else {
            tokens.push(GlyphToken::new(c.to_string(), Motion::None));
            i += 1;
        }
    }

    tokens.push(GlyphToken::new(BLANK, Motion::None));
    Ok(tokens)
}

/// Sign count without the trailing blank card.
pub fn visible_len(tokens: &[GlyphToken]) -> usize {
    tokens.len().saturating_sub(1)
}
