use tokio::sync::RwLock;

/// Process-wide active-client selection.
///
/// The back office operates on one client at a time; the selection is shared
/// application state injected via `web::Data` with explicit accessors, never a
/// module-level singleton.
#[derive(Debug, Default)]
pub struct ActiveClientSession {
    selected: RwLock<Option<String>>,
}

impl ActiveClientSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current selection; `None` clears it.
    pub async fn select(&self, client_id: Option<String>) {
        *self.selected.write().await = client_id;
    }

    /// Currently selected client id, if any.
    pub async fn selected(&self) -> Option<String> {
        self.selected.read().await.clone()
    }
}
