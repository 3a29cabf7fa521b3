use tracing::debug;

use crate::types::Record;

/// Fields displayed while the overlay is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub image_src: String,
    pub title: String,
    pub date: String,
    pub explanation: String,
    pub copyright: Option<String>,
}

/// How the user asked to dismiss the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
    CloseButton,
    Backdrop,
    Escape,
}

/// Modal detail view for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    view: Option<OverlayView>,
    aria_hidden: bool,
}

impl Default for Overlay {
    fn default() -> Self {
        Self { view: None, aria_hidden: true }
    }
}

impl Overlay {
    pub fn open(&mut self, record: &Record) {
        debug!(title = %record.title, date = %record.date, "open overlay");
        self.view = Some(OverlayView {
            image_src: record.detail_src().to_string(),
            title: record.title.clone(),
            date: record.date.clone(),
            explanation: record.explanation.clone(),
            copyright: record.copyright.clone(),
        });
        self.aria_hidden = false;
    }

    /// Hide the overlay and drop the image reference. Returns `false` if it
    /// was already closed.
    pub fn close(&mut self) -> bool {
        if self.view.take().is_none() {
            return false;
        }
        self.aria_hidden = true;
        true
    }

    pub fn dismiss(&mut self, how: Dismiss) -> bool {
        let closed = self.close();
        if closed {
            debug!(?how, "overlay dismissed");
        }
        closed
    }

    pub fn is_open(&self) -> bool { self.view.is_some() }

    pub fn aria_hidden(&self) -> bool { self.aria_hidden }

    pub fn view(&self) -> Option<&OverlayView> { self.view.as_ref() }

    pub fn image_src(&self) -> Option<&str> {
        self.view.as_ref().map(|v| v.image_src.as_str())
    }
}
