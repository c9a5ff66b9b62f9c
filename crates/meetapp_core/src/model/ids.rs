//! Unique identifiers for meetapp entities

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a meetapp
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MeetappId(pub u64);

impl fmt::Display for MeetappId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
