//! Core domain types for the lecture deck.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

#![allow(clippy::missing_errors_doc)]

pub mod deck;
mod sanitize;
pub mod ui;

pub use deck::{Block, DeckError, Icon, IconLabel, Inline, Slide};
pub use sanitize::sanitize_display_line;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Resource keys
// ============================================================================

/// Inclusive range of ids the live view may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBounds {
    min: u32,
    max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key bounds are inverted (min {min} > max {max})")]
pub struct BoundsError {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key {value} is outside [{min}, {max}]")]
pub struct KeyOutOfRange {
    pub value: u32,
    pub min: u32,
    pub max: u32,
}

impl KeyBounds {
    /// The `[1, 5]` window used by the live-coding slide.
    pub const DEFAULT: Self = Self { min: 1, max: 5 };

    pub fn new(min: u32, max: u32) -> Result<Self, BoundsError> {
        if min > max {
            return Err(BoundsError { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    #[must_use]
    pub const fn contains(self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// The key a freshly mounted view starts on.
    #[must_use]
    pub const fn first(self) -> ResourceKey {
        ResourceKey(self.min)
    }

    pub fn key(self, value: u32) -> Result<ResourceKey, KeyOutOfRange> {
        if self.contains(value) {
            Ok(ResourceKey(value))
        } else {
            Err(KeyOutOfRange {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// One step from `key` in `direction`, or `None` at the boundary.
    #[must_use]
    pub fn step(self, key: ResourceKey, direction: NavDirection) -> Option<ResourceKey> {
        match direction {
            NavDirection::Previous if key.0 > self.min => Some(ResourceKey(key.0 - 1)),
            NavDirection::Next if key.0 < self.max => Some(ResourceKey(key.0 + 1)),
            NavDirection::Previous | NavDirection::Next => None,
        }
    }

    #[must_use]
    pub const fn is_min(self, key: ResourceKey) -> bool {
        key.0 == self.min
    }

    #[must_use]
    pub const fn is_max(self, key: ResourceKey) -> bool {
        key.0 == self.max
    }
}

impl Default for KeyBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Id of the remote item the live view is showing.
///
/// Only constructible through [`KeyBounds`], so a key is always in range for
/// the bounds that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey(u32);

impl ResourceKey {
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

// ============================================================================
// Request epochs
// ============================================================================

/// Generation marker for a fetch. A completion is applied only while its
/// epoch is still the view's current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Epoch(u64);

impl Epoch {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Remote payload
// ============================================================================

/// A todo item as served by `/todos/{id}`.
///
/// Unknown fields (`userId`) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}
