//! Navigation: screen identifiers, the history stack, and the router.
//!
//! The stack owns the "where are we" state; the router turns the current
//! top-of-stack into the typed inputs the rendering layer draws from.

pub mod router;
mod screen;
mod stack;

pub use router::{ScreenContent, resolve};
pub use screen::Screen;
pub use stack::NavigationStack;
