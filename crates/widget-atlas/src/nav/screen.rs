//! Screen identifiers.
//!
//! A `Screen` names one screen of the application together with the payload
//! needed to reach its content. Detail payloads are identities (entry
//! names), not value snapshots: the router re-resolves them against the
//! store, so detail pages always reflect live state and a vanished identity
//! degrades to a not-found placeholder.

use std::fmt;

use crate::catalog::WidgetCategory;

/// A single screen the user can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The searchable catalog overview. Always the bottom of the stack.
    Home,
    /// The favorite entries only.
    Favorites,
    /// The gallery of larger composite examples.
    ExamplesGallery,
    /// All widgets in one category, searchable.
    Category(WidgetCategory),
    /// Detail page for the widget with this name.
    WidgetDetail(String),
    /// Detail page for the gallery example with this name.
    ExampleDetail(String),
}

impl Screen {
    /// The chrome title for this screen.
    pub fn title(&self) -> String {
        match self {
            Screen::Home => "Widget Atlas".to_string(),
            Screen::Favorites => "Favorites".to_string(),
            Screen::ExamplesGallery => "Examples".to_string(),
            Screen::Category(category) => category.title().to_string(),
            Screen::WidgetDetail(name) => name.clone(),
            Screen::ExampleDetail(name) => format!("{name} Example"),
        }
    }

    /// Returns `true` for the screens reachable from top-level navigation
    /// chrome (bottom bar or drawer) rather than from a card tap.
    pub fn is_root(&self) -> bool {
        matches!(
            self,
            Screen::Home | Screen::Favorites | Screen::ExamplesGallery | Screen::Category(_)
        )
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Home => write!(f, "Home"),
            Screen::Favorites => write!(f, "Favorites"),
            Screen::ExamplesGallery => write!(f, "ExamplesGallery"),
            Screen::Category(category) => write!(f, "Category({category})"),
            Screen::WidgetDetail(name) => write!(f, "WidgetDetail({name})"),
            Screen::ExampleDetail(name) => write!(f, "ExampleDetail({name})"),
        }
    }
}
