//! crates/dino_explorer_core/src/view.rs
//!
//! Screen routing for one UI context, plus the content each screen shows.

use crate::catalog::Catalog;
use crate::domain::Dinosaur;
use crate::filter::FilterCriteria;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// The fixed set of screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    Browse,
    Map,
    Quiz,
    Chat,
    Detail,
    Profile,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Home => "HOME",
            Screen::Browse => "BROWSE",
            Screen::Map => "MAP",
            Screen::Quiz => "QUIZ",
            Screen::Chat => "CHAT",
            Screen::Detail => "DETAIL",
            Screen::Profile => "PROFILE",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown screen: '{0}'")]
pub struct UnknownScreen(pub String);

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HOME" => Ok(Screen::Home),
            "BROWSE" => Ok(Screen::Browse),
            "MAP" => Ok(Screen::Map),
            "QUIZ" => Ok(Screen::Quiz),
            "CHAT" => Ok(Screen::Chat),
            "DETAIL" => Ok(Screen::Detail),
            "PROFILE" => Ok(Screen::Profile),
            _ => Err(UnknownScreen(s.to_string())),
        }
    }
}

/// What the active screen should display.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewContent<'a> {
    Home { featured: Option<&'a Dinosaur> },
    Browse { results: Vec<&'a Dinosaur>, filters: &'a FilterCriteria },
    Map { markers: Vec<&'a Dinosaur> },
    Quiz,
    Chat,
    Detail { dinosaur: &'a Dinosaur },
    Profile,
    /// Nothing to render, e.g. Detail with no selected record.
    Empty,
}

/// Current screen, detail target and Browse filters for one UI context.
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    screen: Screen,
    selected: Option<Dinosaur>,
    filters: FilterCriteria,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected(&self) -> Option<&Dinosaur> {
        self.selected.as_ref()
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Sets the detail target and switches to the Detail screen.
    pub fn select_record(&mut self, dinosaur: Dinosaur) {
        self.selected = Some(dinosaur);
        self.screen = Screen::Detail;
    }

    pub fn back_to_browse(&mut self) {
        self.screen = Screen::Browse;
    }

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterCriteria::default();
    }

    /// Resolves the active screen against the catalog.
    pub fn render<'a>(&'a self, catalog: &'a Catalog, today: NaiveDate) -> ViewContent<'a> {
        match self.screen {
            Screen::Home => ViewContent::Home {
                featured: catalog.daily_feature(today),
            },
            Screen::Browse => ViewContent::Browse {
                results: self.filters.apply(catalog.dinosaurs()),
                filters: &self.filters,
            },
            Screen::Map => ViewContent::Map {
                markers: catalog.map_markers().collect(),
            },
            Screen::Quiz => ViewContent::Quiz,
            Screen::Chat => ViewContent::Chat,
            Screen::Detail => match &self.selected {
                Some(dinosaur) => ViewContent::Detail { dinosaur },
                None => ViewContent::Empty,
            },
            Screen::Profile => ViewContent::Profile,
        }
    }
}
