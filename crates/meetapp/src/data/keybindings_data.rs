//! Keybindings configuration data structures.
//!
//! Defines the structure for customizable keyboard shortcuts that can be
//! serialized to/from `~/.meetapp/keybindings.yaml`.

use serde::{Deserialize, Serialize};

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Global keybindings (work everywhere)
    pub global: GlobalBindings,
    /// List navigation
    pub navigation: NavigationBindings,
    /// Dashboard actions
    pub dashboard: DashboardBindings,
}

/// Global keybindings that work everywhere in the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
    pub cancel: Vec<String>,
    pub tab_1: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "ctrl+c".into()],
            cancel: vec!["esc".into()],
            tab_1: vec!["1".into()],
        }
    }
}

/// Navigation keybindings for moving through the meetapp list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub first: Vec<String>,
    pub last: Vec<String>,
}

impl Default for NavigationBindings {
    fn default() -> Self {
        Self {
            up: vec!["k".into(), "up".into()],
            down: vec!["j".into(), "down".into()],
            first: vec!["home".into()],
            last: vec!["end".into()],
        }
    }
}

/// Keybindings for the dashboard screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardBindings {
    pub prev_month: Vec<String>,
    pub next_month: Vec<String>,
    pub refresh: Vec<String>,
    pub subscribe: Vec<String>,
    pub unsubscribe: Vec<String>,
}

impl Default for DashboardBindings {
    fn default() -> Self {
        Self {
            prev_month: vec!["h".into(), "left".into()],
            next_month: vec!["l".into(), "right".into()],
            refresh: vec!["r".into()],
            subscribe: vec!["s".into(), "enter".into()],
            unsubscribe: vec!["u".into()],
        }
    }
}
