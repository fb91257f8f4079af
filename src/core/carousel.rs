//! Testimonial carousel navigation and autoplay state

use std::time::Duration;

/// Delay between automatic slide changes
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(8000);

/// Slide position plus autoplay flag.
///
/// Autoplay only ever runs with more than one slide. Manual navigation
/// stops it for good; hovering pauses it until the pointer leaves. A slide
/// changes only after a full [`AUTOPLAY_INTERVAL`] of uninterrupted play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    playing: bool,
    waited: Duration,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            playing: len > 1,
            waited: Duration::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether prev/next arrows and dots are shown
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    /// "Testimonial 2 of 3"
    pub fn slide_label(&self) -> String {
        format!("Testimonial {} of {}", self.index + 1, self.len)
    }

    /// Autoplay step after `elapsed` of play. Returns whether the slide
    /// changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.playing || self.len <= 1 {
            return false;
        }
        self.waited += elapsed;
        if self.waited < AUTOPLAY_INTERVAL {
            return false;
        }
        self.waited = Duration::ZERO;
        self.advance();
        true
    }

    /// User pressed "next"
    pub fn next(&mut self) {
        self.advance();
        self.playing = false;
    }

    /// User pressed "previous"
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.playing = false;
    }

    /// User picked a dot. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
            self.playing = false;
        }
    }

    pub fn hover_start(&mut self) {
        if self.len > 1 {
            self.playing = false;
            self.waited = Duration::ZERO;
        }
    }

    /// Resumes autoplay with a fresh interval
    pub fn hover_end(&mut self) {
        if self.len > 1 {
            self.playing = true;
            self.waited = Duration::ZERO;
        }
    }

    fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}
