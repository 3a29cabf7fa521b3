//! View model of the gallery page.
//!
//! The page holds one value per UI handle (fetch trigger, busy indicator,
//! grid, overlay, date inputs). Controllers mutate it; presenters draw it.

use std::fmt;

use crate::overlay::Overlay;
use crate::types::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTrigger {
    pub label: String,
    pub enabled: bool,
}

/// Message shown in place of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    NoImages,
    NoMatch,
    InvalidRange(String),
    Error(String),
}

impl Placeholder {
    pub fn message(&self) -> String {
        match self {
            Placeholder::Loading => "Loading images...".to_string(),
            Placeholder::NoImages => "No images to display.".to_string(),
            Placeholder::NoMatch => "No images match the selected dates.".to_string(),
            Placeholder::InvalidRange(e) => format!("Invalid date range: {e}"),
            Placeholder::Error(e) => format!("Failed to load images: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub image_src: String,
    pub alt: String,
    pub caption: String,
    pub record: Record,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Grid {
    #[default]
    Empty,
    Cards(Vec<Card>),
    Placeholder(Placeholder),
}

impl Grid {
    pub fn cards(&self) -> &[Card] {
        match self {
            Grid::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn card(&self, index: usize) -> Option<&Card> { self.cards().get(index) }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        match self {
            Grid::Placeholder(p) => Some(p),
            _ => None,
        }
    }
}

/// Last submitted values of the start/end date inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateInputs {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub trigger: FetchTrigger,
    pub busy: bool,
    pub grid: Grid,
    pub overlay: Overlay,
    pub inputs: DateInputs,
}

impl Page {
    pub fn new(trigger_label: impl Into<String>) -> Self {
        Self {
            trigger: FetchTrigger { label: trigger_label.into(), enabled: true },
            busy: false,
            grid: Grid::default(),
            overlay: Overlay::default(),
            inputs: DateInputs::default(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.trigger.enabled { "" } else { " (disabled)" };
        write!(f, "[{}]{}", self.trigger.label, state)?;
        if self.busy {
            write!(f, "  ...")?;
        }
        writeln!(f)?;
        match &self.grid {
            Grid::Empty => {}
            Grid::Placeholder(p) => writeln!(f, "  {}", p.message())?,
            Grid::Cards(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    writeln!(f, "  {:>3}. {}  <{}>", i, card.caption, card.image_src)?;
                }
            }
        }
        if let Some(view) = self.overlay.view() {
            writeln!(f, "+-- {} ({})", view.title, view.date)?;
            writeln!(f, "|   {}", view.image_src)?;
            if let Some(credit) = &view.copyright {
                writeln!(f, "|   (c) {credit}")?;
            }
            for line in view.explanation.lines() {
                writeln!(f, "|   {line}")?;
            }
            writeln!(f, "+-- close | backdrop | key escape")?;
        }
        Ok(())
    }
}
