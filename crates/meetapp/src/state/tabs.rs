//! Tab identifiers for the TUI application, with the metadata the tab bar
//! renders for each one.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Meetapps,
}

impl TabId {
    pub const ALL: [TabId; 1] = [TabId::Meetapps];

    /// Label shown in the tab bar
    pub fn name(&self) -> &'static str {
        match self {
            TabId::Meetapps => "MeetApps",
        }
    }

    /// Icon name shown next to the label
    pub fn icon(&self) -> &'static str {
        match self {
            TabId::Meetapps => "list",
        }
    }

    /// Glyph rendered for the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            TabId::Meetapps => "☰",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Meetapps => 0,
        }
    }
}
