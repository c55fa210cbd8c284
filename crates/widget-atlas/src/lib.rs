//! Widget Atlas - the state core of a widget-catalog application.
//!
//! Widget Atlas presents a searchable, filterable catalog of UI widget
//! demonstrations grouped by category, with favorites, per-widget detail
//! pages, and a gallery of larger composite examples. This crate is the
//! application's core: the rendering layer consumes it through a small
//! in-process API and draws whatever the router hands it.
//!
//! # Components
//!
//! - [`CatalogStore`] - canonical widget list and favorite flags
//! - [`FilterState`] - current search query and category selection
//! - [`CatalogView`] - the derived visible list, recomputed reactively
//! - [`NavigationStack`] - LIFO screen history with a Home floor
//! - [`nav::resolve`] - pure dispatch from the top-of-stack screen to its
//!   rendering inputs
//! - [`WidgetAtlas`] - the owned application-state object wiring it all
//!
//! # Example
//!
//! ```
//! use widget_atlas::{Screen, ScreenContent, WidgetAtlas};
//!
//! let atlas = WidgetAtlas::new();
//!
//! // Search narrows the derived list.
//! atlas.set_query("button");
//! assert!(atlas.visible_list().iter().all(|w| {
//!     w.name.to_lowercase().contains("button")
//!         || w.description.to_lowercase().contains("button")
//! }));
//!
//! // Tap a card, then press back.
//! atlas.push(Screen::WidgetDetail("Button".into()));
//! assert!(matches!(atlas.current_content(), ScreenContent::WidgetDetail { .. }));
//! assert!(atlas.pop());
//! assert_eq!(atlas.top(), Screen::Home);
//! ```

pub mod app;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod nav;
pub mod prelude;
pub mod view;

pub use app::WidgetAtlas;
pub use catalog::{CatalogSignals, CatalogStore, ExampleEntry, WidgetCategory, WidgetEntry};
pub use error::{AtlasError, Result};
pub use filter::FilterState;
pub use nav::{NavigationStack, Screen, ScreenContent};
pub use view::CatalogView;
