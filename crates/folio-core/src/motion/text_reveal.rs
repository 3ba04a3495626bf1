//! Per-glyph staggered reveal for headline typography.
//!
//! The input is decomposed into words and glyphs; each visible glyph gets
//! a reveal slot, staggered by a fixed increment over the base delay.
//! The joined plain text is kept verbatim as the non-visual fallback.

use std::time::{Duration, Instant};

use super::easing::Easing;
use super::timing::progress;

#[derive(Debug, Clone)]
pub struct TextRevealConfig {
    /// Delay before the first glyph starts
    pub delay: Duration,
    /// Increment between sibling glyphs
    pub stagger: Duration,
    /// Per-glyph transition duration
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for TextRevealConfig {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            stagger: Duration::from_millis(30),
            duration: Duration::from_millis(400),
            easing: Easing::Quintic,
        }
    }
}

impl TextRevealConfig {
    /// Collapse all timing for reduced motion.
    pub fn instant(mut self) -> Self {
        self.delay = Duration::ZERO;
        self.stagger = Duration::ZERO;
        self.duration = Duration::ZERO;
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct Glyph {
    ch: char,
    /// Word the glyph belongs to (whitespace belongs to the word it follows)
    word: usize,
    /// Stagger slot; whitespace shares the slot of the next visible glyph
    slot: usize,
}

/// Resolved per-glyph style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle {
    pub ch: char,
    /// Eased reveal progress, 0.0 hidden to 1.0 shown
    pub progress: f64,
}

/// Staggered text revealer
#[derive(Debug, Clone)]
pub struct TextReveal {
    text: String,
    glyphs: Vec<Glyph>,
    config: TextRevealConfig,
    started_at: Option<Instant>,
}

impl TextReveal {
    pub fn new(text: impl Into<String>, config: TextRevealConfig) -> Self {
        let text = text.into();
        let mut glyphs = Vec::with_capacity(text.chars().count());
        let mut word = 0usize;
        let mut slot = 0usize;
        let mut prev_ws = false;

        for ch in text.chars() {
            if ch.is_whitespace() {
                if !prev_ws {
                    word += 1;
                }
                prev_ws = true;
                glyphs.push(Glyph { ch, word, slot });
            } else {
                prev_ws = false;
                glyphs.push(Glyph { ch, word, slot });
                slot += 1;
            }
        }

        Self {
            text,
            glyphs,
            config,
            started_at: None,
        }
    }

    /// The accessible fallback; always equals the joined input.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.glyphs.last().map(|g| g.word + 1).unwrap_or(0)
    }

    #[inline]
    pub fn has_begun(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start the cascade. Idempotent; with zero-length text this is a
    /// no-op and no transition is ever scheduled.
    pub fn begin(&mut self, now: Instant) {
        if self.is_empty() || self.started_at.is_some() {
            return;
        }
        self.started_at = Some(now);
    }

    /// Return to the unrevealed state so the cascade can replay.
    pub fn reset(&mut self) {
        self.started_at = None;
    }

    /// Eased progress of a single glyph.
    pub fn glyph_progress(&self, index: usize, now: Instant) -> f64 {
        let (Some(started_at), Some(glyph)) = (self.started_at, self.glyphs.get(index)) else {
            return 0.0;
        };
        let delay = self.config.delay + self.config.stagger * glyph.slot as u32;
        self.config
            .easing
            .apply(progress(started_at, now, delay, self.config.duration))
    }

    /// Styles for every glyph in input order.
    pub fn styles(&self, now: Instant) -> Vec<GlyphStyle> {
        (0..self.glyphs.len())
            .map(|i| GlyphStyle {
                ch: self.glyphs[i].ch,
                progress: self.glyph_progress(i, now),
            })
            .collect()
    }

    /// True once every glyph has fully revealed.
    pub fn is_complete(&self, now: Instant) -> bool {
        if self.is_empty() {
            return true;
        }
        match self.started_at {
            Some(_) => self
                .glyphs
                .last()
                .map(|_| self.glyph_progress(self.glyphs.len() - 1, now) >= 1.0)
                .unwrap_or(true),
            None => false,
        }
    }
}
