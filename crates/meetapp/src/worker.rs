//! Background worker for running API calls without blocking the UI.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use meetapp_core::{Command, FetchTicket, MeetappId, MeetappRecord, SubscriptionChange};

use crate::api::{ApiError, MeetappApi};

/// Request sent to the background worker
#[derive(Debug)]
pub enum ApiRequest {
    /// Execute one dashboard command
    Execute(Command),
    /// Graceful shutdown
    Shutdown,
}

/// Response from the background worker
#[derive(Debug)]
pub enum ApiResponse {
    /// A fetch finished; carries the ticket it was issued with
    Fetched {
        ticket: FetchTicket,
        result: Result<Vec<MeetappRecord>, ApiError>,
    },
    /// A subscribe or unsubscribe call finished
    Subscription {
        change: SubscriptionChange,
        id: MeetappId,
        result: Result<(), ApiError>,
    },
}

/// Background worker that runs API calls on a separate thread.
///
/// Subscription changes are served in the order they were sent. A fetch
/// that is still queued when a newer one arrives is skipped.
pub struct ApiWorker {
    request_tx: Sender<ApiRequest>,
    response_rx: Receiver<ApiResponse>,
    thread: Option<JoinHandle<()>>,
}

impl ApiWorker {
    /// Spawn the worker thread around an API implementation.
    pub fn spawn<A: MeetappApi + 'static>(api: A) -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        let ctx = WorkerContext { api, response_tx };
        let thread = thread::spawn(move || {
            ctx.run(request_rx);
        });

        Self {
            request_tx,
            response_rx,
            thread: Some(thread),
        }
    }

    /// Queue a command. Returns false if the worker thread is gone.
    pub fn send(&self, command: Command) -> bool {
        self.request_tx.send(ApiRequest::Execute(command)).is_ok()
    }

    /// Try to receive a response (non-blocking)
    pub fn try_recv(&self) -> Option<ApiResponse> {
        self.response_rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next response
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ApiResponse> {
        match self.response_rx.recv_timeout(timeout) {
            Ok(response) => Some(response),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Shutdown the worker thread
    pub fn shutdown(&self) {
        let _ = self.request_tx.send(ApiRequest::Shutdown);
    }
}

impl Drop for ApiWorker {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// State owned by the background worker thread.
struct WorkerContext<A> {
    api: A,
    response_tx: Sender<ApiResponse>,
}

impl<A: MeetappApi> WorkerContext<A> {
    fn run(&self, request_rx: Receiver<ApiRequest>) {
        let mut backlog = VecDeque::new();
        loop {
            if backlog.is_empty() {
                match request_rx.recv() {
                    Ok(ApiRequest::Execute(command)) => coalesce(&mut backlog, command),
                    Ok(ApiRequest::Shutdown) | Err(_) => break,
                }
            }

            // Pick up everything sent while the last call was running.
            let mut shutdown = false;
            while let Ok(request) = request_rx.try_recv() {
                match request {
                    ApiRequest::Execute(command) => coalesce(&mut backlog, command),
                    ApiRequest::Shutdown => {
                        shutdown = true;
                        break;
                    }
                }
            }
            if shutdown {
                break;
            }

            let Some(command) = backlog.pop_front() else {
                continue;
            };
            let response = self.execute(command);
            if self.response_tx.send(response).is_err() {
                break;
            }
        }
        tracing::debug!(skipped = backlog.len(), "API worker stopped");
    }

    fn execute(&self, command: Command) -> ApiResponse {
        match command {
            Command::Fetch(ticket) => {
                tracing::debug!(
                    generation = ticket.generation,
                    date = %ticket.month.query_date(),
                    "Fetching meetapps"
                );
                let result = self.api.list_meetapps(&ticket.month);
                if let Err(err) = &result {
                    tracing::warn!(generation = ticket.generation, "Fetch failed: {err}");
                }
                ApiResponse::Fetched { ticket, result }
            }
            Command::Subscribe(id) => self.change_subscription(SubscriptionChange::Subscribe, id),
            Command::Unsubscribe(id) => {
                self.change_subscription(SubscriptionChange::Unsubscribe, id)
            }
        }
    }

    fn change_subscription(&self, change: SubscriptionChange, id: MeetappId) -> ApiResponse {
        tracing::info!(meetapp = %id, ?change, "Changing subscription");
        let result = match change {
            SubscriptionChange::Subscribe => self.api.subscribe(id),
            SubscriptionChange::Unsubscribe => self.api.unsubscribe(id),
        };
        if let Err(err) = &result {
            tracing::warn!(meetapp = %id, ?change, "Subscription change failed: {err}");
        }
        ApiResponse::Subscription { change, id, result }
    }
}

/// Queue a command, keeping at most one fetch.
///
/// Only the latest fetch ticket can be applied, so a newer fetch replaces any
/// fetch still waiting. Subscription changes keep their order.
fn coalesce(backlog: &mut VecDeque<Command>, command: Command) {
    if let Command::Fetch(ticket) = command {
        backlog.retain(|queued| {
            let superseded = matches!(queued, Command::Fetch(_));
            if superseded {
                tracing::debug!(generation = ticket.generation, "Superseded a queued fetch");
            }
            !superseded
        });
    }
    backlog.push_back(command);
}
