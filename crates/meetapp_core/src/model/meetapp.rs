//! Meetapp records and their display form.

use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::MeetappId;

/// Display pattern for an event's date, e.g. "March 15, at 02h30".
const MEETAPP_DATE_FORMAT: &str = "%B %-d, at %Ih%M";

/// Organizer of a meetapp as embedded by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    pub name: String,
}

/// A meetapp exactly as the server returns it.
///
/// Fields the dashboard does not know about are kept in `extra` so nothing
/// the server sends is lost on the way to the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetappRecord {
    pub id: MeetappId,
    pub date: Timestamp,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Whether the event already happened
    #[serde(default)]
    pub past: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Organizer>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A meetapp ready to be listed: the record plus its formatted date.
#[derive(Debug, Clone, PartialEq)]
pub struct Meetapp {
    pub record: MeetappRecord,
    pub formatted_date: String,
}

impl Meetapp {
    /// Build the display form of a record, formatting its date in `tz`.
    pub fn from_record(record: MeetappRecord, tz: &TimeZone) -> Self {
        let formatted_date = format_meetapp_date(record.date, tz);
        Self {
            record,
            formatted_date,
        }
    }

    pub fn id(&self) -> MeetappId {
        self.record.id
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn organizer(&self) -> Option<&str> {
        self.record.user.as_ref().map(|user| user.name.as_str())
    }
}

/// Format an event timestamp for display in the given time zone.
pub fn format_meetapp_date(date: Timestamp, tz: &TimeZone) -> String {
    date.to_zoned(tz.clone())
        .strftime(MEETAPP_DATE_FORMAT)
        .to_string()
}
