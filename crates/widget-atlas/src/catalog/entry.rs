//! Catalog entry types.
//!
//! These are the value types the rest of the application moves around: a
//! widget demonstration, its category, and the larger gallery examples.
//! Entries are created once from seed data; only the favorite flag of a
//! [`WidgetEntry`] ever mutates, and that happens inside the store.

use std::fmt;

/// The closed set of categories a widget demonstration belongs to.
///
/// The order of [`WidgetCategory::ALL`] is the order category navigation
/// presents them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetCategory {
    /// Fundamental display primitives (text, buttons, icons).
    Basic,
    /// Arrangement containers (rows, columns, grids).
    Layout,
    /// Interactive input controls (fields, toggles, sliders).
    Input,
    /// Surfaces that frame other content (cards, dialogs).
    Container,
    /// Composite and animated demonstrations.
    Advanced,
}

impl WidgetCategory {
    /// Every category, in presentation order.
    pub const ALL: [WidgetCategory; 5] = [
        WidgetCategory::Basic,
        WidgetCategory::Layout,
        WidgetCategory::Input,
        WidgetCategory::Container,
        WidgetCategory::Advanced,
    ];

    /// The human-readable category title.
    pub fn title(&self) -> &'static str {
        match self {
            WidgetCategory::Basic => "Basic",
            WidgetCategory::Layout => "Layout",
            WidgetCategory::Input => "Input",
            WidgetCategory::Container => "Container",
            WidgetCategory::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for WidgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A single widget demonstration in the catalog.
///
/// The `name` is the entry's identity: unique within the catalog and the
/// key used for favorite toggles and detail navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEntry {
    /// Unique name within the catalog.
    pub name: String,
    /// The category this widget belongs to.
    pub category: WidgetCategory,
    /// Human-readable description shown on cards and detail pages.
    pub description: String,
    /// Copyable code snippet demonstrating the widget.
    pub code_snippet: String,
    /// Whether the user marked this entry as a favorite.
    pub favorite: bool,
}

impl WidgetEntry {
    /// Creates a new, non-favorite entry.
    pub fn new(
        name: impl Into<String>,
        category: WidgetCategory,
        description: impl Into<String>,
        code_snippet: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            description: description.into(),
            code_snippet: code_snippet.into(),
            favorite: false,
        }
    }
}

/// A larger composite example in the gallery.
///
/// Examples reference a conceptual parent widget by name. The reference is
/// a relation, not ownership: a dangling parent simply means the detail
/// page has no related entry to link back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleEntry {
    /// Unique name within the gallery; the key used for detail navigation.
    pub name: String,
    /// Human-readable title shown on gallery cards.
    pub title: String,
    /// Description of what the example demonstrates.
    pub description: String,
    /// Copyable code snippet for the full composite.
    pub code_snippet: String,
    /// Name of the conceptual parent [`WidgetEntry`].
    pub parent_widget: String,
}

impl ExampleEntry {
    /// Creates a new gallery example.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        code_snippet: impl Into<String>,
        parent_widget: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: description.into(),
            code_snippet: code_snippet.into(),
            parent_widget: parent_widget.into(),
        }
    }
}
