use advisor_core::notify::Notifier;

/// Terminal stand-in for a blocking alert dialog.
#[derive(Debug, Clone, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }
}
