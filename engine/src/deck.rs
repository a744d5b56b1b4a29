//! Slide navigation for the presentation shell.

use lecture_types::{DeckError, Slide};

#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
    index: usize,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { slides, index: 0 })
    }

    #[must_use]
    pub fn current(&self) -> &Slide {
        &self.slides[self.index]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; construction rejects empty decks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// One-based `(current, total)` for display.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.slides.len())
    }

    /// Returns whether the current slide changed.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        self.go_to(self.index.saturating_add(1))
    }

    pub fn previous(&mut self) -> bool {
        self.go_to(self.index.saturating_sub(1))
    }

    pub fn first(&mut self) -> bool {
        self.go_to(0)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.slides.len() - 1)
    }

    fn go_to(&mut self, index: usize) -> bool {
        let index = index.min(self.slides.len() - 1);
        if index == self.index {
            return false;
        }
        self.index = index;
        true
    }
}
