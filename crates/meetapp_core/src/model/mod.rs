//! Meetapp domain types
//!
//! This module contains the records served by the API, their display form,
//! and the month selection that scopes every fetch.

mod ids;
mod meetapp;
mod month;

pub use ids::MeetappId;
pub use meetapp::{Meetapp, MeetappRecord, Organizer, format_meetapp_date};
pub use month::SelectedMonth;
