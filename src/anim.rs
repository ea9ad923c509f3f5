//! Tick-driven playback of a sign sequence.
//!
//! The driver owns a frame counter and calls [`Animation::tick`] once per
//! frame; the UI only reads the current [`SignFrame`]. A sign is displayed
//! every `delay` ticks, with a short pre-roll before the first one. Signs
//! with a motion slide into their rest position over the interval between
//! two display ticks.

use crate::glyphs::GlyphSet;
use crate::types::{GlyphToken, INITIAL_DELAY, MAX_DELAY, MIN_DELAY, Motion};

/// What the UI paints: a sign card displaced from its rest position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignFrame {
    pub glyph: String,
    pub dx: i16,
    pub dy: i16,
}

#[derive(Debug)]
pub struct Animation {
    tokens: Vec<GlyphToken>,
    cur: usize,
    playing: bool,
    next_at: Option<u64>,
    delay: u16,
    frame: Option<SignFrame>,
}

impl Animation {
    pub fn new(delay: u16) -> Self {
        Self {
            tokens: Vec::new(),
            cur: 0,
            playing: false,
            next_at: None,
            delay: delay.clamp(MIN_DELAY, MAX_DELAY),
            frame: None,
        }
    }

    /// Begin (or restart) playback. The first sign appears `INITIAL_DELAY`
    /// ticks from `now`, not immediately.
    pub fn start(&mut self, tokens: Vec<GlyphToken>, now: u64) {
        self.playing = !tokens.is_empty();
        self.tokens = tokens;
        self.cur = 0;
        self.next_at = self.playing.then(|| now + INITIAL_DELAY);
        self.frame = None;
    }

    /// Back to idle. Safe to call in any state, any number of times.
    pub fn reset(&mut self) {
        self.cur = 0;
        self.playing = false;
        self.next_at = None;
        self.frame = None;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn frame(&self) -> Option<&SignFrame> {
        self.frame.as_ref()
    }

    pub fn delay(&self) -> u16 {
        self.delay
    }

    /// Speed adjustment; applies from the next scheduled interval onward,
    /// the in-flight interval keeps its deadline.
    pub fn adjust_delay(&mut self, delta: i16) {
        let delay = self.delay as i16 + delta;
        self.delay = delay.clamp(MIN_DELAY as i16, MAX_DELAY as i16) as u16;
    }

    pub fn tick(&mut self, now: u64, glyphs: &GlyphSet) {
        if !self.playing {
            return;
        }
        let Some(next_at) = self.next_at else {
            return;
        };

        if now >= next_at {
            let token = self.tokens[self.cur].clone();
            self.frame = Some(positioned(&token, glyphs, 1.0));
            self.next_at = Some(now + self.delay as u64);
            self.cur += 1;
            if self.cur == self.tokens.len() {
                self.playing = false;
                self.next_at = None;
            }
        } else if self.cur > 0 {
            let token = &self.tokens[self.cur - 1];
            if token.motion != Motion::None && self.delay >= 3 {
                // remaining runs from delay-1 down to 1 between displays;
                // clamp in case the delay was lowered mid-interval
                let remaining = (next_at - now).min(self.delay as u64 - 1);
                let t = (remaining - 1) as f32 / (self.delay - 2) as f32;
                self.frame = Some(positioned(token, glyphs, t));
            }
        }
    }
}

/// Frame for a sign at interpolation point `t`: 1.0 is the entry position
/// (full displacement), 0.0 the rest position. Sliding signs come in from
/// the left or from above, so the displacement is negative.
fn positioned(token: &GlyphToken, glyphs: &GlyphSet, t: f32) -> SignFrame {
    let (w, h) = glyphs
        .get(&token.glyph)
        .map(|s| (s.width(), s.height()))
        .unwrap_or((0, 0));

    let (dx, dy) = match token.motion {
        Motion::None => (0, 0),
        Motion::SlideRight => (-(((w / 2) as f32 * t).round() as i16), 0),
        Motion::SlideDown => (0, -(((h / 3) as f32 * t).round() as i16)),
    };

    SignFrame {
        glyph: token.glyph.clone(),
        dx,
        dy,
    }
}
