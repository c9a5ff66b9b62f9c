//! Terminal client for the meetapp service.
//!
//! Shows the meetapps of a selected month and lets the signed-in user
//! subscribe to or unsubscribe from them. The dashboard controller lives in
//! `meetapp_core`; this crate owns the terminal UI, the HTTP client and the
//! background worker that runs remote calls.

// ============================================================================
// Application shell
// ============================================================================

pub mod app;
pub mod components;
pub mod event;
pub mod keybindings;
pub mod logging;
pub mod screens;
pub mod state;

// ============================================================================
// Remote calls and local files
// ============================================================================

pub mod api;
pub mod data;
pub mod worker;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use logging::init_logging;
