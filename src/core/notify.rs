use std::sync::Mutex;

/// Notification collaborator standing in for the UI toast mechanism.
///
/// Services push human-readable pt-BR messages here in addition to returning
/// them in responses; a real deployment would bridge this to the frontend.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default notifier, backed by structured logging.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!(kind = "success", "{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!(kind = "warning", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(kind = "error", "{}", message);
    }
}

/// Records every notification; used by tests to assert on emitted messages.
#[derive(Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<(NotificationKind, String)>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(NotificationKind, String)> {
        self.messages.lock().expect("notifier lock poisoned").clone()
    }

    fn push(&self, kind: NotificationKind, message: &str) {
        self.messages
            .lock()
            .expect("notifier lock poisoned")
            .push((kind, message.to_string()));
    }
}

impl Notifier for MemoryNotifier {
    fn success(&self, message: &str) {
        self.push(NotificationKind::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(NotificationKind::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(NotificationKind::Error, message);
    }
}
