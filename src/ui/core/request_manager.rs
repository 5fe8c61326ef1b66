use std::collections::HashMap;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::actions::Action;
use crate::api::{ApiClient, ApiError, RegisterRequest};
use crate::constants::ERROR_USER_CREATE_FALLBACK;

/// Owns every in-flight API request and reports outcomes back through the
/// action channel. Detail fetches are keyed by row so each row can be
/// cancelled on its own when its overlay is dismissed.
pub struct RequestManager {
    detail_fetches: HashMap<i64, JoinHandle<()>>,
    list_fetch: Option<JoinHandle<()>>,
    registration: Option<JoinHandle<()>>,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl RequestManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                detail_fetches: HashMap::new(),
                list_fetch: None,
                registration: None,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Fetch the detail for a single row. A second request for the same row
    /// while one is still running is ignored.
    pub fn spawn_detail_fetch(&mut self, client: ApiClient, task_id: i64) {
        if let Some(handle) = self.detail_fetches.get(&task_id) {
            if !handle.is_finished() {
                return;
            }
        }

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            match client.fetch_task(task_id).await {
                Ok(task) => {
                    let _ = action_sender.send(Action::TaskDetailLoaded { id: task_id, task });
                }
                Err(e) => {
                    let _ = action_sender.send(Action::TaskDetailFailed {
                        id: task_id,
                        message: e.user_message(),
                    });
                }
            }
        });

        self.detail_fetches.insert(task_id, handle);
    }

    /// Abort the fetch for one row, if any is still running.
    pub fn cancel_detail_fetch(&mut self, task_id: i64) {
        if let Some(handle) = self.detail_fetches.remove(&task_id) {
            handle.abort();
        }
    }

    pub fn spawn_list_fetch(&mut self, client: ApiClient) {
        if let Some(handle) = &self.list_fetch {
            if !handle.is_finished() {
                return;
            }
        }

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            match client.list_tasks().await {
                Ok(tasks) => {
                    let _ = action_sender.send(Action::TasksLoaded(tasks));
                }
                Err(e) => {
                    let _ = action_sender.send(Action::TasksLoadFailed(e.user_message()));
                }
            }
        });

        self.list_fetch = Some(handle);
    }

    pub fn spawn_registration(&mut self, client: ApiClient, request: RegisterRequest) {
        if let Some(handle) = &self.registration {
            if !handle.is_finished() {
                return;
            }
        }

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            match client.register_user(&request).await {
                Ok(()) => {
                    log::info!("User '{}' registered", request.username);
                    let _ = action_sender.send(Action::RegistrationSucceeded);
                }
                Err(e) => {
                    // Server validation messages go to the form verbatim;
                    // anything without one gets the generic retry prompt.
                    let message = match &e {
                        ApiError::Status {
                            server_message: true,
                            ..
                        } => e.user_message(),
                        _ => ERROR_USER_CREATE_FALLBACK.to_string(),
                    };
                    let _ = action_sender.send(Action::RegistrationFailed(message));
                }
            }
        });

        self.registration = Some(handle);
    }

    /// Drop handles for requests that finished on their own.
    pub fn cleanup_finished(&mut self) {
        self.detail_fetches.retain(|_, handle| !handle.is_finished());

        if self.list_fetch.as_ref().is_some_and(JoinHandle::is_finished) {
            self.list_fetch = None;
        }
        if self.registration.as_ref().is_some_and(JoinHandle::is_finished) {
            self.registration = None;
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.detail_fetches.drain() {
            handle.abort();
        }
        if let Some(handle) = self.list_fetch.take() {
            handle.abort();
        }
        if let Some(handle) = self.registration.take() {
            handle.abort();
        }
    }
}

impl Drop for RequestManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
