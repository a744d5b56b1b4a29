//! The mounted live view: [`ResourceBoundView`] plus the async plumbing that
//! performs its reads.
//!
//! Reads run as spawned tasks that only report back over a channel. All state
//! changes happen in [`LiveDemo::process_completions`], called from the frame
//! loop, so the view has exactly one writer. Reads are never aborted; a
//! superseded one simply comes back stale.

use lecture_fetch::{FetchError, TodoClient};
use lecture_types::ui::Alert;
use lecture_types::{Epoch, KeyBounds, NavDirection, Todo};
use tokio::sync::mpsc;

use crate::view::{NavOutcome, ResourceBoundView, SyncOutcome, SyncRequest};

#[derive(Debug)]
pub struct FetchCompletion {
    pub epoch: Epoch,
    pub result: Result<Todo, FetchError>,
}

#[derive(Debug)]
pub struct LiveDemo {
    view: ResourceBoundView,
    client: TodoClient,
    tx: mpsc::UnboundedSender<FetchCompletion>,
    rx: mpsc::UnboundedReceiver<FetchCompletion>,
    in_flight: usize,
}

impl LiveDemo {
    /// Mount a fresh view and start the read for its first key.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mount(client: TodoClient, bounds: KeyBounds) -> Self {
        let (view, request) = ResourceBoundView::mount(bounds);
        let (tx, rx) = mpsc::unbounded_channel();
        let mut live = Self {
            view,
            client,
            tx,
            rx,
            in_flight: 0,
        };
        tracing::info!(key = %request.key, "Live view mounted");
        live.dispatch(request);
        live
    }

    fn dispatch(&mut self, request: SyncRequest) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let result = client.fetch_todo(request.key).await;
            // Receiver is gone once the view unmounts; the result is moot then.
            let _ = tx.send(FetchCompletion {
                epoch: request.epoch,
                result,
            });
        });
    }

    /// Returns whether the key moved.
    pub fn navigate(&mut self, direction: NavDirection) -> bool {
        match self.view.navigate(direction) {
            NavOutcome::Moved(request) => {
                self.dispatch(request);
                true
            }
            NavOutcome::Unchanged => false,
        }
    }

    /// Drain finished reads into the view. Returns the alert raised by the
    /// last failed read for the current epoch, if any.
    pub fn process_completions(&mut self) -> Option<Alert> {
        let mut alert = None;
        loop {
            let completion = match self.rx.try_recv() {
                Ok(completion) => completion,
                Err(mpsc::error::TryRecvError::Empty) => break,
                // Unreachable while `self.tx` is alive.
                Err(mpsc::error::TryRecvError::Disconnected) => break,
            };
            self.in_flight = self.in_flight.saturating_sub(1);

            match self.view.complete(completion.epoch, completion.result) {
                SyncOutcome::Applied | SyncOutcome::Stale => {}
                SyncOutcome::Failed(raised) => alert = Some(raised),
            }
        }
        alert
    }

    /// Tear the view down. Reads still in flight finish but are discarded.
    pub fn unmount(mut self) {
        self.view.teardown();
        self.rx.close();
        tracing::info!(in_flight = self.in_flight, "Live view unmounted");
    }

    #[must_use]
    pub fn view(&self) -> &ResourceBoundView {
        &self.view
    }

    /// Reads issued but not yet drained, including ones that will be stale.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
