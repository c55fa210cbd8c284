//! Filter state for the catalog.
//!
//! `FilterState` holds the current free-text query and the optionally
//! selected category. It is independent of the catalog itself: the derived
//! view combines the two. Setters detect change through the underlying
//! properties and emit `changed` only when something actually changed, so
//! repeated keystrokes with the same text do not trigger recomputation.

use widget_atlas_core::{Property, Signal};

use crate::catalog::{WidgetCategory, WidgetEntry};

/// The current search query and category selection.
pub struct FilterState {
    query: Property<String>,
    category: Property<Option<WidgetCategory>>,
    /// Emitted whenever the query or the selected category changes.
    pub changed: Signal<()>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    /// Creates an empty filter: no query, no category, everything passes.
    pub fn new() -> Self {
        Self {
            query: Property::new(String::new()),
            category: Property::new(None),
            changed: Signal::new(),
        }
    }

    /// The current query text.
    pub fn query(&self) -> String {
        self.query.get()
    }

    /// The currently selected category, if any.
    pub fn category(&self) -> Option<WidgetCategory> {
        self.category.get()
    }

    /// Returns `true` if any criterion is active.
    pub fn is_active(&self) -> bool {
        self.category.get().is_some() || self.query.with(|q| !q.is_empty())
    }

    /// Sets the query text. Returns `true` if the value changed.
    pub fn set_query(&self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.query.set(text.clone()) {
            tracing::trace!(target: "widget_atlas::filter", query = %text, "query changed");
            self.changed.emit(());
            true
        } else {
            false
        }
    }

    /// Sets the selected category; `None` means "all categories".
    /// Returns `true` if the value changed.
    pub fn set_category(&self, category: Option<WidgetCategory>) -> bool {
        if self.category.set(category) {
            tracing::trace!(target: "widget_atlas::filter", category = ?category, "category changed");
            self.changed.emit(());
            true
        } else {
            false
        }
    }

    /// Clears both criteria. Emits `changed` at most once.
    pub fn clear(&self) {
        let query_cleared = self.query.set(String::new());
        let category_cleared = self.category.set(None);
        if query_cleared || category_cleared {
            self.changed.emit(());
        }
    }

    /// The full filter predicate: category equality (when a category is
    /// selected) AND text match (when the query is non-empty). Both filters
    /// are independent, so the order of application does not matter.
    pub fn matches(&self, entry: &WidgetEntry) -> bool {
        if let Some(category) = self.category.get() {
            if entry.category != category {
                return false;
            }
        }
        self.matches_text(entry)
    }

    /// The text criterion alone: case-insensitive substring match of the
    /// query against the entry name or description. An empty query passes
    /// everything.
    pub fn matches_text(&self, entry: &WidgetEntry) -> bool {
        self.query.with(|query| {
            if query.is_empty() {
                return true;
            }
            let needle = query.to_lowercase();
            entry.name.to_lowercase().contains(&needle)
                || entry.description.to_lowercase().contains(&needle)
        })
    }
}
