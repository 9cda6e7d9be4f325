// src/notify.rs
// =============================================================================
// User feedback (errors, confirmations) goes through the Notifier trait.
//
// The conversion pipeline only knows about the trait. The CLI plugs in a
// TerminalNotifier that prints to stderr, so stdout stays clean for --json.
// =============================================================================

use std::time::Duration;
use tracing::debug;

/// How long a notification stays visible when the caller does not say
pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// The flavor of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Something that can show a short message to the user
pub trait Notifier: Send + Sync {
    fn show(&self, message: &str, kind: NotificationKind, duration: Duration);
}

/// Prints notifications to stderr
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn show(&self, message: &str, kind: NotificationKind, duration: Duration) {
        // A terminal line cannot expire, the duration is only informative here
        debug!(?kind, ?duration, "notification");

        match kind {
            NotificationKind::Success => eprintln!("✅ {}", message),
            NotificationKind::Error => eprintln!("❌ {}", message),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Remembers every notification, for assertions in tests
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub shown: Mutex<Vec<(String, NotificationKind)>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<(String, NotificationKind)> {
            self.shown.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn show(&self, message: &str, kind: NotificationKind, _duration: Duration) {
            self.shown.lock().unwrap().push((message.to_string(), kind));
        }
    }
}
