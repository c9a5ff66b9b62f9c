use std::time::Duration;

use meetapp_core::{MeetappId, MeetappRecord, SelectedMonth};
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, InvalidHeaderValue};
use serde_json::Value;

use super::{ApiError, MeetappApi};
use crate::data::config_data::ApiConfig;

/// Blocking HTTP implementation of [`MeetappApi`].
///
/// Calls are made from the background worker thread, never from the UI loop.
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = config.token.as_deref() {
            headers.insert(AUTHORIZATION, bearer(token)?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Send a request and return its body, mapping non-2xx statuses to
    /// [`ApiError::Server`].
    fn send(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let message = server_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
            });
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}

impl MeetappApi for HttpApi {
    fn list_meetapps(&self, month: &SelectedMonth) -> Result<Vec<MeetappRecord>, ApiError> {
        let request = self
            .request(Method::GET, "meetapps")
            .query(&[("date", month.query_date())]);
        let body = self.send(request)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn subscribe(&self, id: MeetappId) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, &format!("subscriptions/{id}")))?;
        Ok(())
    }

    fn unsubscribe(&self, id: MeetappId) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &format!("subscriptions/{id}")))?;
        Ok(())
    }
}

fn bearer(token: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Extract the `{"error": "..."}` message the service sends with failures.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}
