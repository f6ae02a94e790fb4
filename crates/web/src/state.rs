use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;
use payments::DarajaClient;
use storage::Database;
use storage::dto::boardroom::BoardroomMessageResponse;
use tokio::sync::broadcast;

use crate::middleware::auth::ApiKeys;

/// Fan-out channel feeding the boardroom live stream. Lagging subscribers
/// simply miss messages; history is always available from the REST endpoint.
#[derive(Clone)]
pub struct BoardroomChannel {
    sender: broadcast::Sender<BoardroomMessageResponse>,
}

impl BoardroomChannel {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, message: BoardroomMessageResponse) {
        // Err only means nobody is listening right now.
        let _ = self.sender.send(message);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BoardroomMessageResponse> {
        self.sender.subscribe()
    }
}

/// Daraja client plus the inter-call delay used when paying out a batch.
#[derive(Clone)]
pub struct PayoutDispatcher {
    pub client: Arc<DarajaClient>,
    pub delay: Duration,
}

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub api_keys: ApiKeys,
    pub boardroom: BoardroomChannel,
    pub payouts: PayoutDispatcher,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for ApiKeys {
    fn from_ref(state: &AppState) -> Self {
        state.api_keys.clone()
    }
}

impl FromRef<AppState> for BoardroomChannel {
    fn from_ref(state: &AppState) -> Self {
        state.boardroom.clone()
    }
}

impl FromRef<AppState> for PayoutDispatcher {
    fn from_ref(state: &AppState) -> Self {
        state.payouts.clone()
    }
}
