//! Scenario tests for the dashboard controller
//!
//! Tests are organized by topic:
//! - `navigation` - Month navigation and the fetches it issues
//! - `fetching` - Fetch results, stale responses, and failures
//! - `subscriptions` - Subscribe/unsubscribe round trips


use jiff::Timestamp;
use jiff::civil::{Date, date};
use jiff::tz::TimeZone;
use serde_json::Map;

use crate::dashboard::{Command, DashboardState, FetchTicket};
use crate::model::{MeetappId, MeetappRecord, SelectedMonth};

fn march_2021() -> Date {
    date(2021, 3, 15)
}

fn dashboard_at(day: Date) -> DashboardState {
    DashboardState::new(SelectedMonth::new(day), TimeZone::UTC)
}

fn record(id: u64, date: &str, title: &str) -> MeetappRecord {
    MeetappRecord {
        id: MeetappId(id),
        date: date.parse::<Timestamp>().unwrap(),
        title: title.to_string(),
        description: String::new(),
        location: String::new(),
        past: false,
        user: None,
        extra: Map::new(),
    }
}

fn expect_fetch(command: Command) -> FetchTicket {
    match command {
        Command::Fetch(ticket) => ticket,
        other => panic!("expected a fetch command, got {other:?}"),
    }
}
