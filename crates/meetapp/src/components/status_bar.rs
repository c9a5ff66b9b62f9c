use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::{AppState, TabId};
use meetapp_core::NoticeKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    /// Help line built from the active keybindings.
    fn help_text(state: &AppState) -> String {
        let keys = &state.keybindings;
        let quit = first_key(&keys.global.quit);
        match state.active_tab {
            TabId::Meetapps => format!(
                "{}/{}: month | {}/{}: select | {}: subscribe | {}: unsubscribe | {}: refresh | {quit}: quit",
                first_key(&keys.dashboard.prev_month),
                first_key(&keys.dashboard.next_month),
                first_key(&keys.navigation.down),
                first_key(&keys.navigation.up),
                first_key(&keys.dashboard.subscribe),
                first_key(&keys.dashboard.unsubscribe),
                first_key(&keys.dashboard.refresh),
            ),
        }
    }
}

fn first_key(bindings: &[String]) -> &str {
    bindings.first().map_or("-", String::as_str)
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = match &state.notice {
            Some(notice) => {
                let (prefix, color) = match notice.kind {
                    NoticeKind::Success => ("✓ ", Color::Green),
                    NoticeKind::Error => ("Error: ", Color::Red),
                };
                Line::from(vec![
                    Span::styled(prefix, Style::default().fg(color)),
                    Span::raw(notice.text.as_str()),
                ])
            }
            None => Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(Color::DarkGray),
            )),
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
