//! Remote meetapp API.
//!
//! [`MeetappApi`] is the capability the dashboard's commands are executed
//! against. [`HttpApi`] talks to the real service; tests substitute their own
//! implementation.

mod http;

use meetapp_core::{MeetappId, MeetappRecord, SelectedMonth};

pub use http::HttpApi;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("invalid response payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Operations the dashboard needs from the meetapp service.
pub trait MeetappApi: Send {
    /// `GET meetapps?date=<ISO date>`
    fn list_meetapps(&self, month: &SelectedMonth) -> Result<Vec<MeetappRecord>, ApiError>;

    /// `POST subscriptions/<id>`
    fn subscribe(&self, id: MeetappId) -> Result<(), ApiError>;

    /// `DELETE subscriptions/<id>`
    fn unsubscribe(&self, id: MeetappId) -> Result<(), ApiError>;
}
