//! Declarative slide content.
//!
//! Slides are plain data. The engine decides which slide is current and the
//! TUI decides how each block looks.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("a deck needs at least one slide")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub blocks: Vec<Block>,
}

impl Slide {
    #[must_use]
    pub fn new(title: &'static str, blocks: Vec<Block>) -> Self {
        Self { title, blocks }
    }

    /// Whether showing this slide mounts the live view.
    #[must_use]
    pub fn has_live_demo(&self) -> bool {
        self.blocks.iter().any(|b| matches!(b, Block::LiveDemo))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Bullets(Vec<Vec<Inline>>),
    Code {
        language: &'static str,
        lines: Vec<&'static str>,
    },
    Link {
        href: &'static str,
        label: Option<&'static str>,
    },
    /// A screenshot shown by file name; the terminal cannot display it.
    Image {
        file: &'static str,
    },
    IconRow(Vec<IconLabel>),
    Callout {
        heading: &'static str,
        body: Vec<Inline>,
    },
    Spacer,
    LiveDemo,
}

impl Block {
    /// A paragraph made of a single run of text.
    #[must_use]
    pub fn text(text: &'static str) -> Self {
        Self::Paragraph(vec![Inline::Text(text)])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline {
    Text(&'static str),
    Code(&'static str),
    Badge(&'static str),
}

impl Inline {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Inline::Text(s) | Inline::Code(s) | Inline::Badge(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLabel {
    pub icon: Icon,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Laptop,
    Server,
    Database,
    ArrowDown,
}
