use tokio::sync::broadcast;

use crate::{db::DbPool, watcher::StatusEvent};

const STATUS_BUS_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    events: broadcast::Sender<StatusEvent>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let (events, _) = broadcast::channel(STATUS_BUS_CAPACITY);
        Self { pool, events }
    }

    pub fn subscribe_status(&self) -> broadcast::Receiver<StatusEvent> {
        self.events.subscribe()
    }

    /// Best-effort fan-out; an error only means nobody is listening.
    pub fn publish_status(&self, event: StatusEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!(order_id = %event.order_id, "status event had no subscribers");
        }
    }
}
