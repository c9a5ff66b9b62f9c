use crate::components::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;
use meetapp_core::dashboard::EMPTY_MONTH_MESSAGE;
use meetapp_core::{DashboardRows, Meetapp, SubscriptionChange};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub struct DashboardScreen;

impl DashboardScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let arrow = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let mut spans = vec![
            Span::styled("‹  ", arrow),
            Span::styled(
                state.dashboard.label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ›", arrow),
        ];
        if state.dashboard.is_loading() {
            spans.push(Span::styled("  loading…", Style::default().fg(Color::DarkGray)));
        }

        let header = Paragraph::new(Line::from(spans).centered())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, area);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = state.dashboard.rows();
        let items: Vec<ListItem> = match rows {
            DashboardRows::Meetapps(meetapps) => meetapps.iter().map(meetapp_item).collect(),
            DashboardRows::Empty => vec![empty_item()],
        };

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" MEETAPPS "))
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("» ");

        let mut list_state = ListState::default();
        if !rows.is_empty_state() {
            list_state.select(Some(state.selected_index));
        }

        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn meetapp_item(meetapp: &Meetapp) -> ListItem<'static> {
    let record = &meetapp.record;
    let muted = Style::default().fg(Color::Gray);

    let mut title = vec![Span::styled(
        record.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if record.past {
        title.push(Span::styled("  (past)", Style::default().fg(Color::DarkGray)));
    }

    let mut lines = vec![
        Line::from(title),
        Line::from(Span::styled(format!("  {}", meetapp.formatted_date), muted)),
    ];
    if !record.location.is_empty() {
        lines.push(Line::from(Span::styled(format!("  {}", record.location), muted)));
    }
    if let Some(organizer) = meetapp.organizer() {
        lines.push(Line::from(Span::styled(
            format!("  Organizador: {organizer}"),
            muted,
        )));
    }
    lines.push(Line::from(""));

    ListItem::new(lines)
}

fn empty_item() -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("☹  {EMPTY_MONTH_MESSAGE}"),
            Style::default().fg(Color::Gray),
        ))
        .centered(),
    ])
}

impl Component for DashboardScreen {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let nav = &state.keybindings.navigation;
        let dash = &state.keybindings.dashboard;

        if KeybindingsConfig::matches(key, &dash.prev_month) {
            state.change_month(false);
        } else if KeybindingsConfig::matches(key, &dash.next_month) {
            state.change_month(true);
        } else if KeybindingsConfig::matches(key, &dash.refresh) {
            state.refresh();
        } else if KeybindingsConfig::matches(key, &dash.subscribe) {
            state.change_selected_subscription(SubscriptionChange::Subscribe);
        } else if KeybindingsConfig::matches(key, &dash.unsubscribe) {
            state.change_selected_subscription(SubscriptionChange::Unsubscribe);
        } else if KeybindingsConfig::matches(key, &nav.down) {
            state.select_next();
        } else if KeybindingsConfig::matches(key, &nav.up) {
            state.select_prev();
        } else if KeybindingsConfig::matches(key, &nav.first) {
            state.select_first();
        } else if KeybindingsConfig::matches(key, &nav.last) {
            state.select_last();
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Month header
                Constraint::Min(0),    // Meetapp list
            ])
            .split(area);

        self.render_header(frame, chunks[0], state);
        self.render_list(frame, chunks[1], state);
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::TimeZone;
    use meetapp_core::{Command, DashboardState, MeetappId, SelectedMonth};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::event::KeyCode;
    use crate::worker::ApiResponse;

    fn state() -> AppState {
        let dashboard =
            DashboardState::new(SelectedMonth::new(date(2021, 3, 15)), TimeZone::UTC);
        AppState::new(dashboard, KeybindingsConfig::default())
    }

    fn load(state: &mut AppState, json: serde_json::Value) {
        let Some(Command::Fetch(ticket)) = state.take_pending_commands().pop() else {
            panic!("expected a pending fetch");
        };
        state.apply_response(ApiResponse::Fetched {
            ticket,
            result: Ok(serde_json::from_value(json).unwrap()),
        });
    }

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut screen = DashboardScreen::new();
        terminal
            .draw(|frame| screen.render(frame, frame.area(), state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(screen: &mut DashboardScreen, state: &mut AppState, code: KeyCode) -> EventResult {
        screen.handle_key(&AppKeyEvent::plain(code), state)
    }

    #[test]
    fn test_empty_month_renders_placeholder() {
        let mut state = state();
        load(&mut state, serde_json::json!([]));

        let screen = draw(&state);

        assert!(screen.contains("2021 March"));
        assert!(screen.contains("nenhum meetup para este"));
    }

    #[test]
    fn test_loaded_month_renders_items() {
        let mut state = state();
        load(
            &mut state,
            serde_json::json!([
                {
                    "id": 1,
                    "date": "2021-03-15T14:30:00Z",
                    "title": "Rust Meetup",
                    "location": "Centro",
                    "user": { "name": "Ana" }
                },
                { "id": 2, "date": "2021-03-20T09:00:00Z", "title": "Go Meetup" }
            ]),
        );

        let screen = draw(&state);

        assert!(screen.contains("Rust Meetup"));
        assert!(screen.contains("March 15, at 02h30"));
        assert!(screen.contains("Go Meetup"));
        assert!(screen.contains("Organizador: Ana"));
        assert!(!screen.contains("nenhum meetup"));
    }

    #[test]
    fn test_header_shows_loading_while_fetching() {
        let state = state();
        assert!(draw(&state).contains("loading"));
    }

    #[test]
    fn test_keys_drive_dashboard() {
        let mut state = state();
        load(
            &mut state,
            serde_json::json!([
                { "id": 10, "date": "2021-03-15T14:30:00Z" },
                { "id": 42, "date": "2021-03-16T14:30:00Z" }
            ]),
        );
        let mut screen = DashboardScreen::new();

        press(&mut screen, &mut state, KeyCode::Down);
        press(&mut screen, &mut state, KeyCode::Char('s'));
        assert_eq!(
            state.take_pending_commands(),
            vec![Command::Subscribe(MeetappId(42))]
        );

        press(&mut screen, &mut state, KeyCode::Char('u'));
        assert_eq!(
            state.take_pending_commands(),
            vec![Command::Unsubscribe(MeetappId(42))]
        );

        press(&mut screen, &mut state, KeyCode::Right);
        assert_eq!(state.dashboard.label(), "2021 April");
        press(&mut screen, &mut state, KeyCode::Char('h'));
        press(&mut screen, &mut state, KeyCode::Char('h'));
        assert_eq!(state.dashboard.label(), "2021 February");
        assert_eq!(state.take_pending_commands().len(), 3);
    }

    #[test]
    fn test_refresh_key_refetches_same_month() {
        let mut state = state();
        load(&mut state, serde_json::json!([]));
        let mut screen = DashboardScreen::new();

        assert_eq!(
            press(&mut screen, &mut state, KeyCode::Char('r')),
            EventResult::Handled
        );

        match state.take_pending_commands().as_slice() {
            [Command::Fetch(ticket)] => assert_eq!(ticket.month.query_date(), "2021-03-15"),
            other => panic!("unexpected commands: {other:?}"),
        }
    }

    #[test]
    fn test_unbound_key_is_not_handled() {
        let mut state = state();
        let mut screen = DashboardScreen::new();
        assert_eq!(
            press(&mut screen, &mut state, KeyCode::Char('z')),
            EventResult::NotHandled
        );
    }
}
