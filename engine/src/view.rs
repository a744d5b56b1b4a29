//! Bounded, epoch-guarded view over one remote todo.
//!
//! The view owns the selected key and the displayed todo. Every key change
//! (including mount) advances the epoch and yields a [`SyncRequest`]; the
//! caller performs the read and hands the result back through
//! [`ResourceBoundView::complete`]. A result is committed only while its
//! epoch is still current, so whichever request was issued last wins no
//! matter the order responses arrive in.

use std::fmt::Display;

use lecture_types::ui::Alert;
use lecture_types::{Epoch, KeyBounds, NavDirection, ResourceKey, Todo};

/// Text of the alert raised when the current read fails.
pub const FETCH_FAILED_MESSAGE: &str = "오류 발생";

/// A read the caller must perform for `key`, tagged with the epoch it was
/// issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncRequest {
    pub epoch: Epoch,
    pub key: ResourceKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The key changed and the display was cleared; `SyncRequest` must be issued.
    Moved(SyncRequest),
    /// Already at the boundary. Nothing changed.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Applied,
    Failed(Alert),
    /// Superseded by a later key change or teardown; dropped without effect.
    Stale,
}

#[derive(Debug)]
pub struct ResourceBoundView {
    bounds: KeyBounds,
    key: ResourceKey,
    resource: Option<Todo>,
    epoch: Epoch,
    torn_down: bool,
}

impl ResourceBoundView {
    /// Mount at `bounds.min()` with nothing displayed.
    #[must_use]
    pub fn mount(bounds: KeyBounds) -> (Self, SyncRequest) {
        let key = bounds.first();
        let epoch = Epoch::default().next();
        let view = Self {
            bounds,
            key,
            resource: None,
            epoch,
            torn_down: false,
        };
        (view, SyncRequest { epoch, key })
    }

    pub fn navigate(&mut self, direction: NavDirection) -> NavOutcome {
        if self.torn_down {
            return NavOutcome::Unchanged;
        }
        let Some(key) = self.bounds.step(self.key, direction) else {
            return NavOutcome::Unchanged;
        };

        self.resource = None;
        self.key = key;
        self.epoch = self.epoch.next();
        tracing::debug!(key = %key, epoch = %self.epoch, "Live view key changed");

        NavOutcome::Moved(SyncRequest {
            epoch: self.epoch,
            key,
        })
    }

    /// Apply the result of a read issued under `epoch`.
    pub fn complete<E: Display>(&mut self, epoch: Epoch, result: Result<Todo, E>) -> SyncOutcome {
        if self.torn_down || epoch != self.epoch {
            tracing::debug!(
                epoch = %epoch,
                current = %self.epoch,
                ok = result.is_ok(),
                "Discarding stale response"
            );
            return SyncOutcome::Stale;
        }

        match result {
            Ok(todo) => {
                self.resource = Some(todo);
                SyncOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(key = %self.key, "Failed to fetch todo: {err}");
                SyncOutcome::Failed(Alert::new(FETCH_FAILED_MESSAGE))
            }
        }
    }

    /// Invalidate the current epoch. Reads still in flight will come back
    /// [`SyncOutcome::Stale`].
    pub fn teardown(&mut self) {
        self.epoch = self.epoch.next();
        self.torn_down = true;
    }

    #[must_use]
    pub fn key(&self) -> ResourceKey {
        self.key
    }

    #[must_use]
    pub fn resource(&self) -> Option<&Todo> {
        self.resource.as_ref()
    }

    #[must_use]
    pub fn bounds(&self) -> KeyBounds {
        self.bounds
    }

    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        !self.bounds.is_min(self.key)
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        !self.bounds.is_max(self.key)
    }
}
