use bank::notify::Notifier;

/// Prints a transient status message the way the UI would toast it.
pub fn show(message: &str) {
    println!("{message}");
}

pub struct Toast;

impl Notifier for Toast {
    fn notify(&self, message: &str) {
        show(message);
    }
}
