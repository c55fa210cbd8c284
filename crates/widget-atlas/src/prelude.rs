//! Prelude module for Widget Atlas.
//!
//! Re-exports the types a rendering layer touches most:
//!
//! ```
//! use widget_atlas::prelude::*;
//!
//! let atlas = WidgetAtlas::new();
//! atlas.push(Screen::Favorites);
//! ```

pub use crate::app::WidgetAtlas;
pub use crate::catalog::{CatalogStore, ExampleEntry, WidgetCategory, WidgetEntry};
pub use crate::error::AtlasError;
pub use crate::filter::FilterState;
pub use crate::nav::{NavigationStack, Screen, ScreenContent};
pub use crate::view::CatalogView;

pub use widget_atlas_core::{Binding, Property, Signal};
