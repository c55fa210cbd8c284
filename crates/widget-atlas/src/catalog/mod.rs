//! The widget catalog: entries, store, and built-in content.
//!
//! The catalog is the application's single source of truth for widget
//! demonstrations. [`CatalogStore`] owns the entries and announces every
//! change on its signals; [`seed`] supplies the built-in content; the entry
//! types are plain values the rendering layer can hold freely.

mod entry;
pub mod seed;
mod store;

pub use entry::{ExampleEntry, WidgetCategory, WidgetEntry};
pub use store::{CatalogSignals, CatalogStore};
