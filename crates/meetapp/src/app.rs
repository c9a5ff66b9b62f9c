use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::screens::dashboard::DashboardScreen;
use crate::state::{AppState, TabId};
use crate::worker::ApiWorker;
use meetapp_core::Notice;
use meetapp_core::dashboard::SERVER_UNAVAILABLE_MESSAGE;

/// How long to wait for input before checking the worker again
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    dashboard_screen: DashboardScreen,
    worker: ApiWorker,
}

impl App {
    pub fn new(state: AppState, worker: ApiWorker) -> Self {
        Self {
            state,
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            dashboard_screen: DashboardScreen::new(),
            worker,
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            self.sync_worker();
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        self.worker.shutdown();
        Ok(())
    }

    /// Fold finished API calls into the state and hand queued commands to
    /// the worker.
    fn sync_worker(&mut self) {
        while let Some(response) = self.worker.try_recv() {
            self.state.apply_response(response);
        }

        for command in self.state.take_pending_commands() {
            if !self.worker.send(command) {
                self.state.notify(Notice::error(SERVER_UNAVAILABLE_MESSAGE));
                break;
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Meetapps => self.dashboard_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(&AppKeyEvent::from(key_event))
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key: &AppKeyEvent) {
        // Global key bindings
        let global = &self.state.keybindings.global;
        if KeybindingsConfig::matches(key, &global.quit) {
            self.state.exit = true;
            return;
        }
        if KeybindingsConfig::matches(key, &global.cancel) {
            self.state.clear_notice();
            return;
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        match self.state.active_tab {
            TabId::Meetapps => self.dashboard_screen.handle_key(key, &mut self.state),
        };
    }
}
