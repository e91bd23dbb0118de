/// Disruptive, user-visible notifications (the failure of an explicit request, a started run).
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Routes alerts into the log. Used when no interactive surface is attached.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!(alert = message, "user notification");
    }
}
