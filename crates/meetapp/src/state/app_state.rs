use meetapp_core::{
    Command, DashboardState, FetchOutcome, Meetapp, Notice, NoticeKind, SubscriptionChange,
};

use super::TabId;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::worker::ApiResponse;

#[derive(Debug)]
pub struct AppState {
    pub exit: bool,
    pub active_tab: TabId,
    pub dashboard: DashboardState,
    /// Highlighted row in the meetapp list
    pub selected_index: usize,
    /// Last notification shown in the status bar
    pub notice: Option<Notice>,
    /// Commands waiting to be handed to the API worker
    pub pending_commands: Vec<Command>,
    pub keybindings: KeybindingsConfig,
}

impl AppState {
    /// Create the app state and queue the initial fetch.
    pub fn new(dashboard: DashboardState, keybindings: KeybindingsConfig) -> Self {
        let mut state = Self {
            exit: false,
            active_tab: TabId::Meetapps,
            dashboard,
            selected_index: 0,
            notice: None,
            pending_commands: Vec::new(),
            keybindings,
        };
        let mount = state.dashboard.mount();
        state.queue(mount);
        state
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn queue(&mut self, command: Command) {
        self.pending_commands.push(command);
    }

    pub fn take_pending_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending_commands)
    }

    /// Show a notification in the status bar.
    pub fn notify(&mut self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => tracing::info!("{}", notice.text),
            NoticeKind::Error => tracing::error!("{}", notice.text),
        }
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    // ========================================================================
    // Dashboard intents
    // ========================================================================

    /// Move the selected month by one in either direction.
    pub fn change_month(&mut self, forward: bool) {
        let result = if forward {
            self.dashboard.next_month()
        } else {
            self.dashboard.prev_month()
        };

        match result {
            Ok(command) => {
                self.selected_index = 0;
                self.queue(command);
            }
            Err(err) => self.notify(Notice::error(err)),
        }
    }

    pub fn refresh(&mut self) {
        let command = self.dashboard.refresh();
        self.queue(command);
    }

    /// Subscribe to or unsubscribe from the highlighted meetapp.
    pub fn change_selected_subscription(&mut self, change: SubscriptionChange) {
        let Some(id) = self.selected_meetapp().map(Meetapp::id) else {
            return;
        };
        let command = match change {
            SubscriptionChange::Subscribe => self.dashboard.subscribe(id),
            SubscriptionChange::Unsubscribe => self.dashboard.unsubscribe(id),
        };
        self.queue(command);
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn selected_meetapp(&self) -> Option<&Meetapp> {
        self.dashboard.meetapps().get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        let len = self.dashboard.meetapps().len();
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.dashboard.meetapps().len().saturating_sub(1);
    }

    // ========================================================================
    // Worker responses
    // ========================================================================

    /// Fold a worker response into the dashboard.
    pub fn apply_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Fetched { ticket, result } => {
                match self.dashboard.complete_fetch(ticket, result) {
                    FetchOutcome::Replaced { count } => {
                        tracing::debug!(
                            generation = ticket.generation,
                            count,
                            "Meetapp list replaced"
                        );
                        self.selected_index = self.selected_index.min(count.saturating_sub(1));
                    }
                    FetchOutcome::Stale => {
                        tracing::debug!(generation = ticket.generation, "Dropped stale fetch");
                    }
                    FetchOutcome::Failed(notice) => self.notify(notice),
                }
            }
            ApiResponse::Subscription { change, id, result } => {
                let outcome = self.dashboard.complete_subscription(change, result);
                if let Some(refetch) = outcome.refetch {
                    tracing::debug!(meetapp = %id, "Refreshing after subscription change");
                    self.queue(refetch);
                }
                self.notify(outcome.notice);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::TimeZone;
    use meetapp_core::{FetchTicket, MeetappId, MeetappRecord, SelectedMonth};

    use super::*;
    use crate::api::ApiError;

    fn state() -> AppState {
        let dashboard =
            DashboardState::new(SelectedMonth::new(date(2021, 3, 15)), TimeZone::UTC);
        AppState::new(dashboard, KeybindingsConfig::default())
    }

    fn records(n: u64) -> Vec<MeetappRecord> {
        (1..=n)
            .map(|id| {
                serde_json::from_value(serde_json::json!({
                    "id": id,
                    "date": "2021-03-20T18:00:00Z",
                    "title": format!("Meetup {id}"),
                }))
                .unwrap()
            })
            .collect()
    }

    fn only_fetch(commands: Vec<Command>) -> FetchTicket {
        match commands.as_slice() {
            [Command::Fetch(ticket)] => *ticket,
            other => panic!("expected exactly one fetch, got {other:?}"),
        }
    }

    fn loaded_state(n: u64) -> AppState {
        let mut state = state();
        let ticket = only_fetch(state.take_pending_commands());
        state.apply_response(ApiResponse::Fetched {
            ticket,
            result: Ok(records(n)),
        });
        state
    }

    #[test]
    fn test_new_queues_mount_fetch() {
        let mut state = state();
        let ticket = only_fetch(state.take_pending_commands());
        assert_eq!(ticket.month.query_date(), "2021-03-15");
        assert!(state.pending_commands.is_empty());
    }

    #[test]
    fn test_subscribe_success_notifies_and_refetches_once() {
        let mut state = loaded_state(3);
        state.selected_index = 1;

        state.change_selected_subscription(SubscriptionChange::Subscribe);
        assert_eq!(
            state.take_pending_commands(),
            vec![Command::Subscribe(MeetappId(2))]
        );

        state.apply_response(ApiResponse::Subscription {
            change: SubscriptionChange::Subscribe,
            id: MeetappId(2),
            result: Ok(()),
        });

        let ticket = only_fetch(state.take_pending_commands());
        assert_eq!(ticket.month.query_date(), "2021-03-15");
        let notice = state.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, "Você se inscreveu neste meetup!");
    }

    #[test]
    fn test_unsubscribe_failure_shows_server_message() {
        let mut state = loaded_state(1);

        state.apply_response(ApiResponse::Subscription {
            change: SubscriptionChange::Unsubscribe,
            id: MeetappId(1),
            result: Err(ApiError::Server {
                status: 401,
                message: "Token inválido".to_string(),
            }),
        });

        assert!(state.take_pending_commands().is_empty());
        let notice = state.notice.as_ref().unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.text, "Token inválido");
    }

    #[test]
    fn test_failed_refresh_keeps_rows() {
        let mut state = loaded_state(2);
        state.refresh();
        let ticket = only_fetch(state.take_pending_commands());

        state.apply_response(ApiResponse::Fetched {
            ticket,
            result: Err(ApiError::Server {
                status: 500,
                message: "Internal Server Error".to_string(),
            }),
        });

        assert_eq!(state.dashboard.meetapps().len(), 2);
        assert_eq!(state.notice.as_ref().unwrap().text, "Internal Server Error");
    }

    #[test]
    fn test_month_change_resets_selection_and_queues_fetch() {
        let mut state = loaded_state(3);
        state.select_last();
        assert_eq!(state.selected_index, 2);

        state.change_month(true);

        assert_eq!(state.selected_index, 0);
        let ticket = only_fetch(state.take_pending_commands());
        assert_eq!(ticket.month.query_date(), "2021-04-15");
        assert_eq!(state.dashboard.label(), "2021 April");
    }

    #[test]
    fn test_month_change_out_of_range_is_reported() {
        let dashboard =
            DashboardState::new(SelectedMonth::new(date(-9999, 1, 1)), TimeZone::UTC);
        let mut state = AppState::new(dashboard, KeybindingsConfig::default());
        state.take_pending_commands();

        state.change_month(false);

        assert!(state.take_pending_commands().is_empty());
        assert!(state.notice.as_ref().unwrap().is_error());
    }

    #[test]
    fn test_selection_is_clamped_after_shorter_list() {
        let mut state = loaded_state(5);
        state.select_last();
        state.refresh();
        let ticket = only_fetch(state.take_pending_commands());

        state.apply_response(ApiResponse::Fetched {
            ticket,
            result: Ok(records(2)),
        });

        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = loaded_state(2);
        state.select_prev();
        assert_eq!(state.selected_index, 0);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_index, 1);
        state.select_first();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_subscription_without_rows_does_nothing() {
        let mut state = loaded_state(0);
        state.change_selected_subscription(SubscriptionChange::Subscribe);
        assert!(state.take_pending_commands().is_empty());
    }
}
