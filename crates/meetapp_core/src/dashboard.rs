//! Dashboard controller.
//!
//! [`DashboardState`] owns the selected month and the listed meetapps. User
//! intents return a [`Command`] for the caller to execute against the API;
//! results come back through `complete_fetch` / `complete_subscription`.
//!
//! Every fetch is tagged with a [`FetchTicket`]. Only the most recently
//! issued ticket may replace the list, so a slow response for a month the
//! user already left is dropped instead of overwriting newer data.

use std::fmt::Display;

use jiff::tz::TimeZone;

use crate::error::DateError;
use crate::model::{Meetapp, MeetappId, MeetappRecord, SelectedMonth};

pub const SUBSCRIBED_MESSAGE: &str = "Você se inscreveu neste meetup!";
pub const UNSUBSCRIBED_MESSAGE: &str = "Meetup cancelado com sucesso";
pub const EMPTY_MONTH_MESSAGE: &str = "Não há nenhum meetup para este mês";
pub const SERVER_UNAVAILABLE_MESSAGE: &str = "Conexão com o servidor indisponível";

/// Identifies one fetch request and the month it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub month: SelectedMonth,
}

/// Remote call the caller must perform on behalf of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fetch(FetchTicket),
    Subscribe(MeetappId),
    Unsubscribe(MeetappId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionChange {
    Subscribe,
    Unsubscribe,
}

impl SubscriptionChange {
    pub fn success_message(&self) -> &'static str {
        match self {
            SubscriptionChange::Subscribe => SUBSCRIBED_MESSAGE,
            SubscriptionChange::Unsubscribe => UNSUBSCRIBED_MESSAGE,
        }
    }

    pub fn command(&self, id: MeetappId) -> Command {
        match self {
            SubscriptionChange::Subscribe => Command::Subscribe(id),
            SubscriptionChange::Unsubscribe => Command::Unsubscribe(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(err: impl Display) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// What happened to a fetch result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The list was replaced with `count` meetapps
    Replaced { count: usize },
    /// A newer fetch was issued since; the result was dropped
    Stale,
    /// The fetch failed; the list is unchanged
    Failed(Notice),
}

/// What happened to a subscribe/unsubscribe result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionOutcome {
    /// Re-fetch of the current month, issued only on success
    pub refetch: Option<Command>,
    pub notice: Notice,
}

/// Rows to hand to the list renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardRows<'a> {
    Meetapps(&'a [Meetapp]),
    /// Nothing to list; render a single placeholder row
    Empty,
}

impl DashboardRows<'_> {
    pub fn row_count(&self) -> usize {
        match self {
            DashboardRows::Meetapps(items) => items.len(),
            DashboardRows::Empty => 1,
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, DashboardRows::Empty)
    }
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    month: SelectedMonth,
    meetapps: Vec<Meetapp>,
    time_zone: TimeZone,
    /// Generation of the most recently issued fetch
    generation: u64,
    /// Set while the most recently issued fetch is outstanding
    in_flight: Option<FetchTicket>,
}

impl DashboardState {
    pub fn new(month: SelectedMonth, time_zone: TimeZone) -> Self {
        Self {
            month,
            meetapps: Vec::new(),
            time_zone,
            generation: 0,
            in_flight: None,
        }
    }

    /// Dashboard opened on today's month.
    pub fn today(time_zone: TimeZone) -> Self {
        Self::new(SelectedMonth::today(&time_zone), time_zone)
    }

    pub fn month(&self) -> SelectedMonth {
        self.month
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    pub fn meetapps(&self) -> &[Meetapp] {
        &self.meetapps
    }

    pub fn label(&self) -> String {
        self.month.label()
    }

    pub fn rows(&self) -> DashboardRows<'_> {
        if self.meetapps.is_empty() {
            DashboardRows::Empty
        } else {
            DashboardRows::Meetapps(&self.meetapps)
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Initial fetch for the selected month.
    pub fn mount(&mut self) -> Command {
        self.issue_fetch()
    }

    pub fn prev_month(&mut self) -> Result<Command, DateError> {
        self.shift_month(-1)
    }

    pub fn next_month(&mut self) -> Result<Command, DateError> {
        self.shift_month(1)
    }

    /// Re-fetch the selected month without touching it.
    pub fn refresh(&mut self) -> Command {
        self.issue_fetch()
    }

    pub fn subscribe(&self, id: MeetappId) -> Command {
        SubscriptionChange::Subscribe.command(id)
    }

    pub fn unsubscribe(&self, id: MeetappId) -> Command {
        SubscriptionChange::Unsubscribe.command(id)
    }

    /// Fold a fetch result back into the dashboard.
    pub fn complete_fetch<E: Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<MeetappRecord>, E>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            return FetchOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(records) => {
                let tz = &self.time_zone;
                self.meetapps = records
                    .into_iter()
                    .map(|record| Meetapp::from_record(record, tz))
                    .collect();
                FetchOutcome::Replaced {
                    count: self.meetapps.len(),
                }
            }
            Err(err) => FetchOutcome::Failed(Notice::error(err)),
        }
    }

    /// Fold a subscribe/unsubscribe result back into the dashboard.
    ///
    /// On success the current month is fetched again so server-side changes
    /// show up in the list.
    pub fn complete_subscription<E: Display>(
        &mut self,
        change: SubscriptionChange,
        result: Result<(), E>,
    ) -> SubscriptionOutcome {
        match result {
            Ok(()) => SubscriptionOutcome {
                refetch: Some(self.refresh()),
                notice: Notice::success(change.success_message()),
            },
            Err(err) => SubscriptionOutcome {
                refetch: None,
                notice: Notice::error(err),
            },
        }
    }

    fn shift_month(&mut self, months: i32) -> Result<Command, DateError> {
        self.month = self.month.shift(months)?;
        Ok(self.issue_fetch())
    }

    fn issue_fetch(&mut self) -> Command {
        self.generation += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            month: self.month,
        };
        self.in_flight = Some(ticket);
        Command::Fetch(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn dashboard() -> DashboardState {
        DashboardState::new(SelectedMonth::new(date(2021, 3, 15)), TimeZone::UTC)
    }

    fn ticket_of(command: Command) -> FetchTicket {
        match command {
            Command::Fetch(ticket) => ticket,
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_mount_fetches_selected_month() {
        let mut dash = dashboard();
        let ticket = ticket_of(dash.mount());

        assert_eq!(ticket.month.date(), date(2021, 3, 15));
        assert!(dash.is_loading());
    }

    #[test]
    fn test_refresh_keeps_month_and_bumps_generation() {
        let mut dash = dashboard();
        let first = ticket_of(dash.mount());
        let second = ticket_of(dash.refresh());

        assert_eq!(first.month, second.month);
        assert!(second.generation > first.generation);
    }

    #[test]
    fn test_rows_empty_before_load() {
        let dash = dashboard();
        assert!(dash.rows().is_empty_state());
        assert_eq!(dash.rows().row_count(), 1);
    }

    #[test]
    fn test_subscription_commands() {
        let dash = dashboard();
        assert_eq!(dash.subscribe(MeetappId(3)), Command::Subscribe(MeetappId(3)));
        assert_eq!(
            dash.unsubscribe(MeetappId(3)),
            Command::Unsubscribe(MeetappId(3))
        );
    }

    #[test]
    fn test_success_messages() {
        assert_eq!(
            SubscriptionChange::Subscribe.success_message(),
            "Você se inscreveu neste meetup!"
        );
        assert_eq!(
            SubscriptionChange::Unsubscribe.success_message(),
            "Meetup cancelado com sucesso"
        );
    }

    #[test]
    fn test_out_of_range_shift_keeps_month() {
        let mut dash = DashboardState::new(SelectedMonth::new(date(9999, 12, 1)), TimeZone::UTC);
        assert!(dash.next_month().is_err());
        assert_eq!(dash.month().date(), date(9999, 12, 1));
        assert!(!dash.is_loading());
    }
}
