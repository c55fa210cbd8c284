//! Logging facilities for Widget Atlas.
//!
//! Widget Atlas uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the embedding application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!     // Application code...
//! }
//! ```
//!
//! Every subsystem logs under its own target so filter directives can be
//! scoped, e.g. `RUST_LOG=widget_atlas::catalog=debug,widget_atlas=info`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Reactive substrate target.
    pub const CORE: &str = "widget_atlas_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "widget_atlas_core::signal";
    /// Catalog store target.
    pub const CATALOG: &str = "widget_atlas::catalog";
    /// Filter state target.
    pub const FILTER: &str = "widget_atlas::filter";
    /// Derived view target.
    pub const VIEW: &str = "widget_atlas::view";
    /// Navigation stack and router target.
    pub const NAV: &str = "widget_atlas::nav";
}
