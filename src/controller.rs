//! Event dispatch for the gallery page.
//!
//! Two independent toggles live here: fetch-busy (idle/loading) and
//! overlay-visible (closed/open). Every UI trigger arrives as an [`Event`].

use std::time::Duration;

use tracing::{debug, error, info};

use crate::cache::RecordCache;
use crate::config::GalleryConfig;
use crate::error::{FetchError, FilterError};
use crate::filter::{filter, DateRange};
use crate::overlay::Dismiss;
use crate::page::{DateInputs, Page, Placeholder};
use crate::render::{render, show_placeholder};
use crate::source::RecordSource;
use crate::types::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(String),
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            _ => Key::Other(name.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FetchClicked,
    FilterClicked { start: Option<String>, end: Option<String> },
    CardClicked(usize),
    CloseClicked,
    BackdropClicked,
    KeyPressed(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading,
}

pub struct Controller<S> {
    source: S,
    cache: RecordCache,
    page: Page,
    range: DateRange,
    fetch_state: FetchState,
    min_loading: Duration,
    trigger_label: String,
    loading_label: String,
}

impl<S: RecordSource> Controller<S> {
    pub fn new(source: S, config: &GalleryConfig) -> Self {
        Self {
            source,
            cache: RecordCache::new(),
            page: Page::new(config.trigger_label.clone()),
            range: DateRange::default(),
            fetch_state: FetchState::Idle,
            min_loading: config.min_loading,
            trigger_label: config.trigger_label.clone(),
            loading_label: config.loading_label.clone(),
        }
    }

    pub fn page(&self) -> &Page { &self.page }
    pub fn cache(&self) -> &RecordCache { &self.cache }
    pub fn fetch_state(&self) -> FetchState { self.fetch_state }
    pub fn range(&self) -> DateRange { self.range }

    pub async fn dispatch(&mut self, event: Event) {
        debug!(?event, "dispatch");
        match event {
            Event::FetchClicked => self.fetch().await,
            Event::FilterClicked { start, end } => self.apply_filter(start, end),
            Event::CardClicked(index) => self.open_card(index),
            Event::CloseClicked => { self.page.overlay.dismiss(Dismiss::CloseButton); }
            Event::BackdropClicked => { self.page.overlay.dismiss(Dismiss::Backdrop); }
            Event::KeyPressed(Key::Escape) => { self.page.overlay.dismiss(Dismiss::Escape); }
            Event::KeyPressed(Key::Other(_)) => {}
        }
    }

    /// Fetch and render, keeping the loading state visible for at least the
    /// configured minimum. Ignored while a fetch is already running.
    pub async fn fetch(&mut self) {
        if !self.begin_fetch() {
            return;
        }
        let (result, ()) = tokio::join!(self.source.fetch_records(), tokio::time::sleep(self.min_loading));
        self.complete_fetch(result);
    }

    /// Enter the loading state. Returns `false` if a fetch is in flight or
    /// the trigger is disabled.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_state == FetchState::Loading || !self.page.trigger.enabled {
            debug!("fetch trigger ignored while loading");
            return false;
        }
        info!("fetch started");
        self.fetch_state = FetchState::Loading;
        self.page.trigger.enabled = false;
        self.page.trigger.label = self.loading_label.clone();
        self.page.busy = true;
        show_placeholder(&mut self.page.grid, Placeholder::Loading);
        true
    }

    /// Leave the loading state. The trigger is restored on every outcome.
    pub fn complete_fetch(&mut self, result: Result<Vec<Record>, FetchError>) {
        match result {
            Ok(records) => {
                info!(count = records.len(), "fetch finished");
                self.cache.replace(records);
                self.show_cached();
            }
            Err(e) => {
                error!(error = %e, "fetch failed");
                show_placeholder(&mut self.page.grid, Placeholder::Error(e.to_string()));
            }
        }
        self.fetch_state = FetchState::Idle;
        self.page.trigger.enabled = true;
        self.page.trigger.label = self.trigger_label.clone();
        self.page.busy = false;
    }

    /// Inputs are kept only when they parse, so they always describe the
    /// range in effect.
    pub fn apply_filter(&mut self, start: Option<String>, end: Option<String>) {
        match DateRange::parse(start.as_deref(), end.as_deref()) {
            Ok(range) => {
                self.range = range;
                self.page.inputs = DateInputs { start, end };
                self.show_cached();
            }
            Err(e) => {
                debug!(error = %e, "rejected date range");
                show_placeholder(&mut self.page.grid, Placeholder::InvalidRange(e.to_string()));
            }
        }
    }

    /// Validate the bounds, then fetch with them applied. A malformed date
    /// fails before any request is made.
    pub async fn fetch_filtered(&mut self, start: Option<String>, end: Option<String>) -> Result<(), FilterError> {
        let range = DateRange::parse(start.as_deref(), end.as_deref())?;
        self.range = range;
        self.page.inputs = DateInputs { start, end };
        self.fetch().await;
        Ok(())
    }

    pub fn open_card(&mut self, index: usize) {
        match self.page.grid.card(index) {
            Some(card) => {
                let record = card.record.clone();
                self.page.overlay.open(&record);
            }
            None => debug!(index, "click on missing card ignored"),
        }
    }

    fn show_cached(&mut self) {
        if !self.cache.is_loaded() {
            show_placeholder(&mut self.page.grid, Placeholder::NoImages);
            return;
        }
        let matching = filter(self.cache.records(), self.range);
        if matching.is_empty() && !self.range.is_unbounded() {
            show_placeholder(&mut self.page.grid, Placeholder::NoMatch);
        } else {
            render(&mut self.page.grid, &matching);
        }
    }
}
