//! Meetapp dashboard domain library
//!
//! This crate holds everything the dashboard screen needs that does not touch
//! the network or the terminal:
//! - Meetapp records as served by the API and their display form
//! - The selected month and its navigation
//! - The dashboard controller, which turns user intents into remote commands
//!   and folds remote results back into screen state
//!
//! I/O is left to the caller. Every operation on [`DashboardState`] returns a
//! [`Command`] describing the remote call to perform, and the outcome is fed
//! back through [`DashboardState::complete_fetch`] or
//! [`DashboardState::complete_subscription`].

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod dashboard;
pub mod error;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use dashboard::{
    Command, DashboardRows, DashboardState, FetchOutcome, FetchTicket, Notice, NoticeKind,
    SubscriptionChange, SubscriptionOutcome,
};
pub use error::DateError;
pub use model::{Meetapp, MeetappId, MeetappRecord, Organizer, SelectedMonth};
