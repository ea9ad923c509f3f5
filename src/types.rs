//! Pure data types shared across the trainer, no rendering involved.

use thiserror::Error;

/// Animation timing, measured in driver ticks (~30 per second).
pub const TICK_MS: u64 = 33;
pub const INITIAL_DELAY: u64 = 15;
pub const DEFAULT_DELAY: u16 = 20;
pub const MIN_DELAY: u16 = 10;
pub const MAX_DELAY: u16 = 60;

/// How a sign enters the screen. Doubled letters slide in sideways,
/// umlauts and ß slide in from above.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    None,
    SlideRight,
    SlideDown,
}

/// One unit of the animated sequence: a sign plus its entry motion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphToken {
    pub glyph: String,
    pub motion: Motion,
}

impl GlyphToken {
    pub fn new(glyph: impl Into<String>, motion: Motion) -> Self {
        Self {
            glyph: glyph.into(),
            motion,
        }
    }
}

/// A picked word together with its spelled-out sign sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub original: String,
    pub normalized: String,
    pub tokens: Vec<GlyphToken>,
}

impl Word {
    /// Number of signs the user actually sees (the trailing blank card
    /// does not count).
    pub fn visible_len(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainerError {
    #[error("no sign for character '{0}'")]
    UnsupportedCharacter(char),
    #[error("no word in the list spells out to {min}..={max} signs")]
    NoWordMatchesBounds { min: usize, max: usize },
}

/// Word-length filter for the picker. Both ends stay clamped to the range
/// the word list actually offers, and min/max drag each other along so the
/// interval never inverts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthBounds {
    min: usize,
    max: usize,
    dataset_min: usize,
    dataset_max: usize,
}

impl LengthBounds {
    pub fn new(dataset_min: usize, dataset_max: usize) -> Self {
        Self {
            min: dataset_min,
            max: dataset_max,
            dataset_min,
            dataset_max,
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn set_min(&mut self, min: usize) {
        self.min = min.clamp(self.dataset_min, self.dataset_max);
        if self.min > self.max {
            self.max = self.min;
        }
    }

    pub fn set_max(&mut self, max: usize) {
        self.max = max.clamp(self.dataset_min, self.dataset_max);
        if self.max < self.min {
            self.min = self.max;
        }
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}
