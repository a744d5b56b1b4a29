//! Core engine for the lecture deck - state machine and orchestration.
//!
//! This crate contains the App state machine without TUI dependencies.
//!
//! # Architecture
//!
//! - [`Deck`] - which slide is showing
//! - [`LiveDemo`] - the live view mounted while its slide is showing
//! - [`ResourceBoundView`] - the epoch-guarded state the live view renders
//!
//! The frame loop calls [`App::process_fetch_events`] once per frame; that is
//! the only place fetch results reach view state.

mod deck;
pub mod lecture;
mod live;
mod view;

use anyhow::{Context, Result};

pub use deck::Deck;
pub use lecture::{DATA_FETCHING, LectureInfo, data_fetching_slides};
pub use live::{FetchCompletion, LiveDemo};
pub use view::{FETCH_FAILED_MESSAGE, NavOutcome, ResourceBoundView, SyncOutcome, SyncRequest};

pub use lecture_config::{DemoSettings, LectureConfig};
pub use lecture_fetch::{FetchError, TodoClient};
pub use lecture_types::ui::{Alert, UiOptions};
pub use lecture_types::{
    Block, Epoch, Icon, IconLabel, Inline, KeyBounds, NavDirection, ResourceKey, Slide, Todo,
    sanitize_display_line,
};

pub struct App {
    info: LectureInfo,
    deck: Deck,
    client: TodoClient,
    bounds: KeyBounds,
    live: Option<LiveDemo>,
    alert: Option<Alert>,
    ui_options: UiOptions,
    scroll: u16,
    should_quit: bool,
    tick: usize,
}

impl App {
    /// Must be called from within a Tokio runtime: if the first slide is the
    /// live slide its read starts immediately.
    pub fn new(
        info: LectureInfo,
        deck: Deck,
        client: TodoClient,
        bounds: KeyBounds,
        ui_options: UiOptions,
    ) -> Self {
        let mut app = Self {
            info,
            deck,
            client,
            bounds,
            live: None,
            alert: None,
            ui_options,
            scroll: 0,
            should_quit: false,
            tick: 0,
        };
        app.remount_live();
        app
    }

    /// The data-fetching lecture, configured from `config` (defaults if `None`).
    pub fn from_config(config: Option<&LectureConfig>) -> Result<Self> {
        let (settings, ui_options) = match config {
            Some(config) => (
                config
                    .demo_settings()
                    .context("invalid [demo] configuration")?,
                config.ui_options(),
            ),
            None => (
                LectureConfig::default()
                    .demo_settings()
                    .context("invalid demo environment override")?,
                UiOptions::default(),
            ),
        };
        tracing::info!(
            base_url = %settings.base_url,
            min = settings.bounds.min(),
            max = settings.bounds.max(),
            "Live view configured"
        );

        let client = TodoClient::new(settings.base_url, settings.timeout)
            .context("failed to build HTTP client")?;
        let deck = Deck::new(data_fetching_slides()).context("lecture has no slides")?;
        Ok(Self::new(
            DATA_FETCHING,
            deck,
            client,
            settings.bounds,
            ui_options,
        ))
    }

    // ------------------------------------------------------------------------
    // Slides
    // ------------------------------------------------------------------------

    pub fn next_slide(&mut self) -> bool {
        self.move_slide(Deck::next)
    }

    pub fn previous_slide(&mut self) -> bool {
        self.move_slide(Deck::previous)
    }

    pub fn first_slide(&mut self) -> bool {
        self.move_slide(Deck::first)
    }

    pub fn last_slide(&mut self) -> bool {
        self.move_slide(Deck::last)
    }

    fn move_slide(&mut self, step: fn(&mut Deck) -> bool) -> bool {
        if self.alert.is_some() || !step(&mut self.deck) {
            return false;
        }
        let (index, total) = self.deck.position();
        tracing::info!(index, total, title = self.deck.current().title, "Slide changed");
        self.scroll = 0;
        self.remount_live();
        true
    }

    /// Each showing of a live slide gets a fresh view, like a component
    /// mounting; leaving tears the old one down.
    fn remount_live(&mut self) {
        if let Some(live) = self.live.take() {
            live.unmount();
        }
        if self.deck.current().has_live_demo() {
            self.live = Some(LiveDemo::mount(self.client.clone(), self.bounds));
        }
    }

    /// Vertical offset into the current slide body, in rows.
    #[must_use]
    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self, rows: u16) {
        if self.alert.is_none() {
            self.scroll = self.scroll.saturating_add(rows);
        }
    }

    pub fn scroll_up(&mut self, rows: u16) {
        if self.alert.is_none() {
            self.scroll = self.scroll.saturating_sub(rows);
        }
    }

    /// The renderer knows how tall the body is; it clamps after layout.
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }

    // ------------------------------------------------------------------------
    // Live view
    // ------------------------------------------------------------------------

    /// Step the live view. False when no live view is mounted, an alert is
    /// pending, or the key is already at the boundary.
    pub fn navigate_live(&mut self, direction: NavDirection) -> bool {
        if self.alert.is_some() {
            return false;
        }
        self.live
            .as_mut()
            .is_some_and(|live| live.navigate(direction))
    }

    /// Apply finished reads. Call once per frame.
    pub fn process_fetch_events(&mut self) {
        let Some(live) = self.live.as_mut() else {
            return;
        };
        if let Some(alert) = live.process_completions() {
            self.alert = Some(alert);
        }
    }

    #[must_use]
    pub fn live(&self) -> Option<&LiveDemo> {
        self.live.as_ref()
    }

    #[must_use]
    pub fn live_view(&self) -> Option<&ResourceBoundView> {
        self.live.as_ref().map(LiveDemo::view)
    }

    // ------------------------------------------------------------------------
    // Alert
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }

    // ------------------------------------------------------------------------
    // Misc
    // ------------------------------------------------------------------------

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    #[must_use]
    pub fn info(&self) -> LectureInfo {
        self.info
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    /// Tear down the live view, if mounted.
    pub fn shutdown(&mut self) {
        if let Some(live) = self.live.take() {
            live.unmount();
        }
    }
}
