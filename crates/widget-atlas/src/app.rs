//! The application state object.
//!
//! `WidgetAtlas` is the explicitly constructed root of the application
//! core. It owns the catalog store, the filter state, the derived view,
//! and the navigation stack, and it is handed to the rendering layer at
//! startup; there is no ambient singleton. The signal wiring between the
//! parts happens once, here, at construction.

use std::sync::Arc;

use crate::catalog::{CatalogStore, ExampleEntry, WidgetCategory, WidgetEntry};
use crate::error::Result;
use crate::filter::FilterState;
use crate::nav::{self, NavigationStack, Screen, ScreenContent};
use crate::view::CatalogView;

/// The assembled application core.
///
/// The rendering layer holds one of these and drives it from user input:
/// search keystrokes and category picks go to the filter, favorite clicks
/// to the catalog, card taps and back presses to the navigation stack.
/// Every mutation has finished propagating to derived state by the time
/// the call returns.
pub struct WidgetAtlas {
    store: Arc<CatalogStore>,
    filter: Arc<FilterState>,
    view: Arc<CatalogView>,
    nav: NavigationStack,
}

impl Default for WidgetAtlas {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetAtlas {
    /// Creates the application state with the built-in catalog.
    pub fn new() -> Self {
        Self::assemble(Arc::new(CatalogStore::with_builtin()))
    }

    /// Creates the application state over custom catalog content.
    pub fn with_catalog(
        widgets: Vec<WidgetEntry>,
        examples: Vec<ExampleEntry>,
    ) -> Result<Self> {
        Ok(Self::assemble(Arc::new(CatalogStore::new(widgets, examples)?)))
    }

    fn assemble(store: Arc<CatalogStore>) -> Self {
        let filter = Arc::new(FilterState::new());
        let view = CatalogView::new(store.clone(), filter.clone());
        tracing::info!(
            target: "widget_atlas",
            widgets = store.len(),
            examples = store.examples().len(),
            "application state assembled"
        );
        Self {
            store,
            filter,
            view,
            nav: NavigationStack::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Component handles
    // -------------------------------------------------------------------------

    /// The catalog store.
    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// The filter state.
    pub fn filter(&self) -> &Arc<FilterState> {
        &self.filter
    }

    /// The derived view.
    pub fn view(&self) -> &Arc<CatalogView> {
        &self.view
    }

    /// The navigation stack.
    pub fn nav(&self) -> &NavigationStack {
        &self.nav
    }

    // -------------------------------------------------------------------------
    // Catalog surface
    // -------------------------------------------------------------------------

    /// The full catalog, in insertion order.
    pub fn list(&self) -> Vec<WidgetEntry> {
        self.store.list()
    }

    /// The favorite subsequence of the catalog.
    pub fn favorites(&self) -> Vec<WidgetEntry> {
        self.store.favorites()
    }

    /// Flips the favorite flag of `name`; unknown names are a no-op.
    pub fn toggle_favorite(&self, name: &str) -> bool {
        self.store.toggle_favorite(name)
    }

    // -------------------------------------------------------------------------
    // Filter surface
    // -------------------------------------------------------------------------

    /// Sets the search query.
    pub fn set_query(&self, text: impl Into<String>) -> bool {
        self.filter.set_query(text)
    }

    /// Sets the category selection; `None` shows all categories.
    pub fn set_category(&self, category: Option<WidgetCategory>) -> bool {
        self.filter.set_category(category)
    }

    /// The derived visible list under the current filter.
    pub fn visible_list(&self) -> Vec<WidgetEntry> {
        self.view.visible()
    }

    // -------------------------------------------------------------------------
    // Navigation surface
    // -------------------------------------------------------------------------

    /// Navigates to `screen` (no-op when already on top).
    pub fn push(&self, screen: Screen) {
        self.nav.push(screen);
    }

    /// Navigates back; refused (returning `false`) on the Home floor.
    pub fn pop(&self) -> bool {
        self.nav.pop()
    }

    /// The currently visible screen.
    pub fn top(&self) -> Screen {
        self.nav.top()
    }

    /// Drawer-style category navigation: aligns the filter's category
    /// selection and pushes the category screen.
    pub fn open_category(&self, category: WidgetCategory) {
        self.filter.set_category(Some(category));
        self.nav.push(Screen::Category(category));
    }

    /// Returns to the Home floor and clears the category selection.
    pub fn go_home(&self) {
        self.filter.set_category(None);
        self.nav.pop_to_root();
    }

    // -------------------------------------------------------------------------
    // Router surface
    // -------------------------------------------------------------------------

    /// The rendering inputs for the current top-of-stack screen.
    pub fn current_content(&self) -> ScreenContent {
        nav::resolve(&self.nav.top(), &self.store, &self.view, &self.filter)
    }
}
