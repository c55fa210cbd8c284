//! The screen router.
//!
//! Pure dispatch from the current top-of-stack [`Screen`] to the typed
//! rendering inputs for that screen. The router reads the store, the
//! derived view, and the filter; it never mutates any of them. Identity
//! payloads that no longer resolve produce [`ScreenContent::NotFound`]
//! rather than a crash.

use crate::catalog::{CatalogStore, ExampleEntry, WidgetCategory, WidgetEntry};
use crate::filter::FilterState;
use crate::view::CatalogView;

use super::screen::Screen;

/// The rendering inputs for one screen.
///
/// Each variant carries exactly the data that screen displays; the
/// rendering layer matches on this and draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenContent {
    /// The searchable catalog overview: the derived visible list.
    Home {
        /// Entries passing the current filter, in catalog order.
        widgets: Vec<WidgetEntry>,
    },
    /// The favorites screen.
    Favorites {
        /// Favorite entries, in catalog order.
        widgets: Vec<WidgetEntry>,
    },
    /// The examples gallery.
    ExamplesGallery {
        /// All gallery entries, in seed order.
        examples: Vec<ExampleEntry>,
    },
    /// One category, narrowed by the current text query.
    Category {
        /// The selected category.
        category: WidgetCategory,
        /// The category's entries passing the text query.
        widgets: Vec<WidgetEntry>,
    },
    /// A widget detail page.
    WidgetDetail {
        /// The resolved entry, with its live favorite flag.
        widget: WidgetEntry,
        /// Gallery examples whose parent is this widget.
        examples: Vec<ExampleEntry>,
    },
    /// An example detail page.
    ExampleDetail {
        /// The resolved gallery entry.
        example: ExampleEntry,
    },
    /// An identity payload that no longer resolves; the rendering layer
    /// shows a placeholder.
    NotFound {
        /// The identity that failed to resolve.
        name: String,
    },
}

/// Assembles the rendering inputs for `screen`.
pub fn resolve(
    screen: &Screen,
    store: &CatalogStore,
    view: &CatalogView,
    filter: &FilterState,
) -> ScreenContent {
    match screen {
        Screen::Home => ScreenContent::Home {
            widgets: view.visible(),
        },
        Screen::Favorites => ScreenContent::Favorites {
            widgets: store.favorites(),
        },
        Screen::ExamplesGallery => ScreenContent::ExamplesGallery {
            examples: store.examples().to_vec(),
        },
        Screen::Category(category) => ScreenContent::Category {
            category: *category,
            widgets: store
                .by_category(*category)
                .into_iter()
                .filter(|entry| filter.matches_text(entry))
                .collect(),
        },
        Screen::WidgetDetail(name) => match store.get(name) {
            Some(widget) => ScreenContent::WidgetDetail {
                examples: store.examples_for(&widget.name),
                widget,
            },
            None => {
                tracing::debug!(
                    target: "widget_atlas::nav",
                    name,
                    "widget detail did not resolve"
                );
                ScreenContent::NotFound { name: name.clone() }
            }
        },
        Screen::ExampleDetail(name) => match store.example(name) {
            Some(example) => ScreenContent::ExampleDetail {
                example: example.clone(),
            },
            None => {
                tracing::debug!(
                    target: "widget_atlas::nav",
                    name,
                    "example detail did not resolve"
                );
                ScreenContent::NotFound { name: name.clone() }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn fixture() -> (Arc<CatalogStore>, Arc<FilterState>, Arc<CatalogView>) {
        let store = Arc::new(
            CatalogStore::new(
                vec![
                    WidgetEntry::new("Text", WidgetCategory::Basic, "Displays text", ""),
                    WidgetEntry::new("Button", WidgetCategory::Basic, "Clickable button", ""),
                    WidgetEntry::new("TabBar", WidgetCategory::Advanced, "Row of tabs", ""),
                ],
                vec![ExampleEntry::new(
                    "TabBar",
                    "Tab Bar",
                    "Tabbed interface",
                    "TabBar::new()",
                    "TabBar",
                )],
            )
            .unwrap(),
        );
        let filter = Arc::new(FilterState::new());
        let view = CatalogView::new(store.clone(), filter.clone());
        (store, filter, view)
    }

    #[test]
    fn test_home_uses_derived_view() {
        let (store, filter, view) = fixture();
        filter.set_query("tab");

        match resolve(&Screen::Home, &store, &view, &filter) {
            ScreenContent::Home { widgets } => {
                let names: Vec<_> = widgets.into_iter().map(|w| w.name).collect();
                assert_eq!(names, vec!["TabBar"]);
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_favorites_content() {
        let (store, filter, view) = fixture();
        store.toggle_favorite("Button");

        match resolve(&Screen::Favorites, &store, &view, &filter) {
            ScreenContent::Favorites { widgets } => {
                assert_eq!(widgets.len(), 1);
                assert_eq!(widgets[0].name, "Button");
                assert!(widgets[0].favorite);
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_gallery_content() {
        let (store, filter, view) = fixture();
        match resolve(&Screen::ExamplesGallery, &store, &view, &filter) {
            ScreenContent::ExamplesGallery { examples } => {
                assert_eq!(examples.len(), 1);
                assert_eq!(examples[0].title, "Tab Bar");
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_category_respects_text_query_but_not_category_filter() {
        let (store, filter, view) = fixture();
        // A selected category on the filter must not bleed into an
        // explicitly navigated category screen.
        filter.set_category(Some(WidgetCategory::Advanced));
        filter.set_query("button");

        match resolve(&Screen::Category(WidgetCategory::Basic), &store, &view, &filter) {
            ScreenContent::Category { category, widgets } => {
                assert_eq!(category, WidgetCategory::Basic);
                let names: Vec<_> = widgets.into_iter().map(|w| w.name).collect();
                assert_eq!(names, vec!["Button"]);
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_widget_detail_resolves_with_related_examples() {
        let (store, filter, view) = fixture();
        match resolve(&Screen::WidgetDetail("TabBar".into()), &store, &view, &filter) {
            ScreenContent::WidgetDetail { widget, examples } => {
                assert_eq!(widget.name, "TabBar");
                assert_eq!(examples.len(), 1);
                assert_eq!(examples[0].name, "TabBar");
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_stale_identity_resolves_to_not_found() {
        let (store, filter, view) = fixture();
        let content = resolve(
            &Screen::WidgetDetail("Vanished".into()),
            &store,
            &view,
            &filter,
        );
        assert_eq!(content, ScreenContent::NotFound { name: "Vanished".into() });

        let content = resolve(
            &Screen::ExampleDetail("Vanished".into()),
            &store,
            &view,
            &filter,
        );
        assert_eq!(content, ScreenContent::NotFound { name: "Vanished".into() });
    }

    #[test]
    fn test_example_detail_resolves() {
        let (store, filter, view) = fixture();
        match resolve(&Screen::ExampleDetail("TabBar".into()), &store, &view, &filter) {
            ScreenContent::ExampleDetail { example } => {
                assert_eq!(example.parent_widget, "TabBar");
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }
}
