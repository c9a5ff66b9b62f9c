//! On-disk configuration for the meetapp client.
//!
//! Directory structure:
//! ~/.meetapp/
//!   config.yaml          # API endpoint, token, time zone
//!   keybindings.yaml     # Optional keybinding overrides
//!   meetapp.log          # Rotated log file

pub mod config_data;
pub mod keybindings_data;
pub mod storage;
