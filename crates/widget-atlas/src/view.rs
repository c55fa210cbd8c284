//! The derived catalog view.
//!
//! `CatalogView` combines the catalog store and the filter state into the
//! list the rendering layer displays. It keeps a row mapping (visible
//! position to source position) rebuilt by a pure pass over the store under
//! the current filter, so the visible list is always an order-preserving
//! subsequence of the source list and is never mutated directly.
//!
//! The view subscribes to the store's and the filter's signals at
//! construction, so recomputation is automatic: toggle a favorite, type a
//! query, or pick a category and the mapping rebuilds before the signal
//! emission returns.

use std::sync::Arc;

use parking_lot::RwLock;

use widget_atlas_core::Signal;

use crate::catalog::{CatalogStore, WidgetEntry};
use crate::filter::FilterState;

/// The filtered, order-preserving view over the catalog.
pub struct CatalogView {
    store: Arc<CatalogStore>,
    filter: Arc<FilterState>,
    /// Visible row index -> source row index.
    mapping: RwLock<Vec<usize>>,
    /// Emitted after the visible list has been recomputed.
    pub changed: Signal<()>,
}

impl CatalogView {
    /// Creates a view over `store` filtered by `filter` and wires the
    /// subscriptions that keep it current.
    ///
    /// The subscriptions hold weak references, so dropping the returned
    /// `Arc` retires the view; stale notifications become no-ops.
    pub fn new(store: Arc<CatalogStore>, filter: Arc<FilterState>) -> Arc<Self> {
        let view = Arc::new(Self {
            store,
            filter,
            mapping: RwLock::new(Vec::new()),
            changed: Signal::new(),
        });
        view.rebuild();

        let weak = Arc::downgrade(&view);
        view.store.signals().entry_changed.connect(move |_| {
            if let Some(view) = weak.upgrade() {
                view.invalidate();
            }
        });

        let weak = Arc::downgrade(&view);
        view.store.signals().reset.connect(move |_| {
            if let Some(view) = weak.upgrade() {
                view.invalidate();
            }
        });

        let weak = Arc::downgrade(&view);
        view.filter.changed.connect(move |_| {
            if let Some(view) = weak.upgrade() {
                view.invalidate();
            }
        });

        view
    }

    /// Number of visible entries.
    pub fn len(&self) -> usize {
        self.mapping.read().len()
    }

    /// Returns `true` if nothing passes the current filter.
    pub fn is_empty(&self) -> bool {
        self.mapping.read().is_empty()
    }

    /// The visible entries, in source order.
    pub fn visible(&self) -> Vec<WidgetEntry> {
        let entries = self.store.list();
        self.mapping
            .read()
            .iter()
            .filter_map(|&source| entries.get(source).cloned())
            .collect()
    }

    /// Maps a visible row to its position in the source list.
    pub fn source_row(&self, visible_row: usize) -> Option<usize> {
        self.mapping.read().get(visible_row).copied()
    }

    /// Rebuilds the mapping and announces the change.
    ///
    /// Called automatically through the signal subscriptions; exposed for
    /// callers that replace state with notifications blocked.
    pub fn invalidate(&self) {
        self.rebuild();
        self.changed.emit(());
    }

    /// One pure pass over the store under the current filter.
    fn rebuild(&self) {
        let entries = self.store.list();
        let mut mapping = self.mapping.write();
        mapping.clear();
        mapping.extend(
            entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| self.filter.matches(entry))
                .map(|(row, _)| row),
        );
        tracing::trace!(
            target: "widget_atlas::view",
            visible = mapping.len(),
            total = entries.len(),
            "view rebuilt"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WidgetCategory;
    use parking_lot::Mutex;

    fn fixture() -> (Arc<CatalogStore>, Arc<FilterState>, Arc<CatalogView>) {
        let store = Arc::new(
            CatalogStore::new(
                vec![
                    WidgetEntry::new("Text", WidgetCategory::Basic, "Displays text", ""),
                    WidgetEntry::new("Button", WidgetCategory::Basic, "Clickable button", ""),
                    WidgetEntry::new("Card", WidgetCategory::Container, "Elevated container", ""),
                    WidgetEntry::new("Slider", WidgetCategory::Input, "Value from a range", ""),
                ],
                Vec::new(),
            )
            .unwrap(),
        );
        let filter = Arc::new(FilterState::new());
        let view = CatalogView::new(store.clone(), filter.clone());
        (store, filter, view)
    }

    fn names(view: &CatalogView) -> Vec<String> {
        view.visible().into_iter().map(|w| w.name).collect()
    }

    #[test]
    fn test_unfiltered_view_shows_everything() {
        let (_store, _filter, view) = fixture();
        assert_eq!(names(&view), vec!["Text", "Button", "Card", "Slider"]);
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_category_filter_recomputes_automatically() {
        let (_store, filter, view) = fixture();
        filter.set_category(Some(WidgetCategory::Basic));
        assert_eq!(names(&view), vec!["Text", "Button"]);
    }

    #[test]
    fn test_query_filter_recomputes_automatically() {
        let (_store, filter, view) = fixture();
        filter.set_query("but");
        assert_eq!(names(&view), vec!["Button"]);

        filter.set_query("");
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_combined_filters() {
        let (_store, filter, view) = fixture();
        filter.set_category(Some(WidgetCategory::Basic));
        filter.set_query("but");
        assert_eq!(names(&view), vec!["Button"]);
    }

    #[test]
    fn test_visible_is_ordered_subsequence_of_list() {
        let (store, filter, view) = fixture();
        filter.set_query("a"); // Card, Slider ("range"), ... matches by name or description

        let list: Vec<_> = store.list().into_iter().map(|w| w.name).collect();
        let visible = names(&view);

        // Every visible name appears in the list, in the same relative order.
        let mut last_position = 0;
        for name in &visible {
            let position = list.iter().position(|n| n == name).unwrap();
            assert!(position >= last_position);
            last_position = position;
        }
    }

    #[test]
    fn test_store_toggle_triggers_recompute_signal() {
        let (store, _filter, view) = fixture();
        let recomputed = Arc::new(Mutex::new(0));

        let recv = recomputed.clone();
        view.changed.connect(move |_| {
            *recv.lock() += 1;
        });

        store.toggle_favorite("Text");
        assert_eq!(*recomputed.lock(), 1);
        // Favorite flags do not affect visibility, but the rebuilt view
        // carries the fresh flag.
        assert!(view.visible()[0].favorite);
    }

    #[test]
    fn test_store_reset_recomputes() {
        let (store, _filter, view) = fixture();
        store
            .set_widgets(vec![WidgetEntry::new(
                "Dialog",
                WidgetCategory::Container,
                "Modal window",
                "",
            )])
            .unwrap();
        assert_eq!(names(&view), vec!["Dialog"]);
    }

    #[test]
    fn test_source_row_maps_through_filter() {
        let (_store, filter, view) = fixture();
        filter.set_category(Some(WidgetCategory::Container));

        assert_eq!(view.len(), 1);
        assert_eq!(view.source_row(0), Some(2)); // Card sits at source row 2
        assert_eq!(view.source_row(1), None);
    }

    #[test]
    fn test_dropped_view_ignores_later_notifications() {
        let (store, filter, view) = fixture();
        drop(view);

        // Slots hold weak references; these must not panic.
        store.toggle_favorite("Text");
        filter.set_query("card");
    }
}
