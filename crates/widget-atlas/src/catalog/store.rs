//! The catalog store.
//!
//! `CatalogStore` owns the canonical widget list and the gallery examples.
//! Widgets are created once from seed data and never deleted; the only
//! mutation for the life of the process is the favorite flag, and it goes
//! through [`CatalogStore::toggle_favorite`] so every change is announced
//! on the store's signals.

use parking_lot::RwLock;

use widget_atlas_core::Signal;

use super::entry::{ExampleEntry, WidgetCategory, WidgetEntry};
use crate::error::{AtlasError, Result};

/// Signals emitted by the catalog store.
///
/// Dependent components (the derived view, favorites screens) connect to
/// these to stay synchronized. A completed favorite toggle has already
/// emitted both `entry_changed` and `favorites_changed` before
/// `toggle_favorite` returns, so readers can never observe the list and the
/// favorites subsequence in a mutually inconsistent state.
#[derive(Debug)]
pub struct CatalogSignals {
    /// Emitted when a single entry changes. Payload: the entry name.
    pub entry_changed: Signal<String>,
    /// Emitted whenever the favorites subsequence may have changed.
    pub favorites_changed: Signal<()>,
    /// Emitted when the whole catalog is replaced.
    pub reset: Signal<()>,
}

impl Default for CatalogSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSignals {
    /// Creates a new set of catalog signals.
    pub fn new() -> Self {
        Self {
            entry_changed: Signal::new(),
            favorites_changed: Signal::new(),
            reset: Signal::new(),
        }
    }
}

/// Owns the widget entries and the gallery examples.
///
/// The widget list preserves seed insertion order; every accessor that
/// returns a sequence preserves that order. Examples are immutable after
/// construction.
#[derive(Debug)]
pub struct CatalogStore {
    widgets: RwLock<Vec<WidgetEntry>>,
    examples: Vec<ExampleEntry>,
    signals: CatalogSignals,
}

impl CatalogStore {
    /// Creates a store from seed data.
    ///
    /// Names are the catalog identity, so duplicates in either list are
    /// rejected with [`AtlasError::DuplicateEntry`] /
    /// [`AtlasError::DuplicateExample`].
    pub fn new(widgets: Vec<WidgetEntry>, examples: Vec<ExampleEntry>) -> Result<Self> {
        if let Some(name) = first_duplicate(widgets.iter().map(|w| w.name.as_str())) {
            return Err(AtlasError::DuplicateEntry { name });
        }
        if let Some(name) = first_duplicate(examples.iter().map(|e| e.name.as_str())) {
            return Err(AtlasError::DuplicateExample { name });
        }

        tracing::debug!(
            target: "widget_atlas::catalog",
            widgets = widgets.len(),
            examples = examples.len(),
            "catalog store created"
        );

        Ok(Self {
            widgets: RwLock::new(widgets),
            examples,
            signals: CatalogSignals::new(),
        })
    }

    /// Creates a store seeded with the built-in catalog content.
    pub fn with_builtin() -> Self {
        // The built-in seed has unique names; a unit test on the seed module
        // keeps that true.
        Self {
            widgets: RwLock::new(super::seed::builtin_widgets()),
            examples: super::seed::builtin_examples(),
            signals: CatalogSignals::new(),
        }
    }

    /// Returns the signals for this store.
    pub fn signals(&self) -> &CatalogSignals {
        &self.signals
    }

    /// Number of widget entries in the catalog.
    pub fn len(&self) -> usize {
        self.widgets.read().len()
    }

    /// Returns `true` if the catalog has no widget entries.
    pub fn is_empty(&self) -> bool {
        self.widgets.read().is_empty()
    }

    /// The current widget entries, in insertion order.
    pub fn list(&self) -> Vec<WidgetEntry> {
        self.widgets.read().clone()
    }

    /// The favorite subsequence of [`list`](Self::list), in the same order.
    ///
    /// Computed from the live list on every call; there is no cache to go
    /// stale.
    pub fn favorites(&self) -> Vec<WidgetEntry> {
        self.widgets
            .read()
            .iter()
            .filter(|w| w.favorite)
            .cloned()
            .collect()
    }

    /// Looks up a widget entry by name.
    pub fn get(&self, name: &str) -> Option<WidgetEntry> {
        self.widgets.read().iter().find(|w| w.name == name).cloned()
    }

    /// The entries in `category`, in insertion order.
    pub fn by_category(&self, category: WidgetCategory) -> Vec<WidgetEntry> {
        self.widgets
            .read()
            .iter()
            .filter(|w| w.category == category)
            .cloned()
            .collect()
    }

    /// Flips the favorite flag of the entry named `name`.
    ///
    /// Returns `true` if an entry was toggled. An unknown name is a
    /// forgiving no-op returning `false`: the operation is only ever
    /// triggered from UI affordances bound to existing entries, so there is
    /// nothing useful to surface as an error. Toggling twice in succession
    /// restores the original flag.
    pub fn toggle_favorite(&self, name: &str) -> bool {
        let toggled = {
            let mut widgets = self.widgets.write();
            match widgets.iter_mut().find(|w| w.name == name) {
                Some(entry) => {
                    entry.favorite = !entry.favorite;
                    Some(entry.favorite)
                }
                None => None,
            }
        };

        match toggled {
            Some(favorite) => {
                tracing::debug!(
                    target: "widget_atlas::catalog",
                    name,
                    favorite,
                    "favorite toggled"
                );
                self.signals.entry_changed.emit(name.to_string());
                self.signals.favorites_changed.emit(());
                true
            }
            None => {
                tracing::trace!(
                    target: "widget_atlas::catalog",
                    name,
                    "favorite toggle ignored, no such entry"
                );
                false
            }
        }
    }

    /// Replaces the whole widget catalog.
    ///
    /// Favorite flags of the new entries are taken as given. Emits `reset`
    /// followed by `favorites_changed`.
    pub fn set_widgets(&self, widgets: Vec<WidgetEntry>) -> Result<()> {
        if let Some(name) = first_duplicate(widgets.iter().map(|w| w.name.as_str())) {
            return Err(AtlasError::DuplicateEntry { name });
        }
        *self.widgets.write() = widgets;
        self.signals.reset.emit(());
        self.signals.favorites_changed.emit(());
        Ok(())
    }

    /// The gallery examples, in seed order.
    pub fn examples(&self) -> &[ExampleEntry] {
        &self.examples
    }

    /// Looks up a gallery example by name.
    pub fn example(&self, name: &str) -> Option<&ExampleEntry> {
        self.examples.iter().find(|e| e.name == name)
    }

    /// The gallery examples whose parent is the widget named `widget_name`.
    pub fn examples_for(&self, widget_name: &str) -> Vec<ExampleEntry> {
        self.examples
            .iter()
            .filter(|e| e.parent_widget == widget_name)
            .cloned()
            .collect()
    }
}

/// Returns the first name that appears more than once, if any.
fn first_duplicate<'a>(names: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut seen = std::collections::HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Some(name.to_string());
        }
    }
    None
}
