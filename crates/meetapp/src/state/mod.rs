mod app_state;
mod tabs;

pub use app_state::*;
pub use tabs::*;
