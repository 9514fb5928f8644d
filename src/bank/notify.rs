/// Sink for transient, human-readable status messages.
///
/// The UI shows each message for a few seconds (a toast); the ledger never
/// depends on a response.
pub trait Notifier {
    fn notify(&self, message: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Notifier;

    use std::{cell::RefCell, rc::Rc};

    /// Captures every message so tests can assert on what the user was told.
    #[derive(Default)]
    pub struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn messages(&self) -> Vec<String> {
            self.messages.borrow().clone()
        }

        pub fn last(&self) -> Option<String> {
            self.messages.borrow().last().cloned()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    impl Notifier for Rc<RecordingNotifier> {
        fn notify(&self, message: &str) {
            self.as_ref().notify(message);
        }
    }
}
