// src/session.rs
// =============================================================================
// State of an interactive session: the last conversion and whether embed
// snippets are shown.
//
// Lines are handled one at a time, so there is never more than one commit
// lookup in flight.
//
// Rust concepts:
// - Generics: run_lines accepts any AsyncBufRead (stdin, or a byte slice in tests)
// - Closures: the caller decides how to print each event via FnMut
// =============================================================================

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::convert::{convert, Conversion};
use crate::github::CommitResolver;
use crate::notify::{NotificationKind, Notifier, DEFAULT_DURATION};

/// What happened after handling one line of input
#[derive(Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A URL was converted and is now the current result
    Converted,
    /// The line was rejected (already reported through the notifier)
    Rejected,
    /// The embed panel was toggled; holds the new visibility
    EmbedToggled(bool),
    /// The current result was cleared
    Reset,
    /// The user asked to leave
    Quit,
}

#[derive(Debug, Default)]
pub struct Session {
    /// Whether embed snippets are printed along with the links
    pub embed_shown: bool,
    /// The most recent successful conversion
    pub current: Option<Conversion>,
}

impl Session {
    pub fn new(embed_shown: bool) -> Self {
        Self {
            embed_shown,
            current: None,
        }
    }

    // Handles one line: either a ':' command or a URL to convert
    pub async fn handle_line(
        &mut self,
        line: &str,
        resolver: Option<&dyn CommitResolver>,
        notifier: &dyn Notifier,
    ) -> SessionEvent {
        match line.trim() {
            ":quit" | ":q" => SessionEvent::Quit,
            ":embed" => {
                self.embed_shown = !self.embed_shown;
                SessionEvent::EmbedToggled(self.embed_shown)
            }
            ":reset" => {
                self.current = None;
                notifier.show(
                    "Form has been reset",
                    NotificationKind::Success,
                    DEFAULT_DURATION,
                );
                SessionEvent::Reset
            }
            input => match convert(input, resolver, notifier).await {
                Ok(conversion) => {
                    self.current = Some(conversion);
                    SessionEvent::Converted
                }
                Err(_) => SessionEvent::Rejected,
            },
        }
    }

    // Reads lines from `reader` until EOF or ':quit'
    //
    // Lines are split on raw '\n' bytes, so one line that is not valid UTF-8
    // is reported and skipped instead of ending the session.
    // `on_event` is called after every handled line (printing lives in main.rs).
    pub async fn run_lines<R, F>(
        &mut self,
        reader: R,
        resolver: Option<&dyn CommitResolver>,
        notifier: &dyn Notifier,
        mut on_event: F,
    ) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        F: FnMut(&Session, &SessionEvent),
    {
        let mut segments = reader.split(b'\n');

        while let Some(bytes) = segments.next_segment().await? {
            let line = match String::from_utf8(bytes) {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "skipping input line");
                    notifier.show(
                        "Input is not valid UTF-8",
                        NotificationKind::Error,
                        DEFAULT_DURATION,
                    );
                    on_event(self, &SessionEvent::Rejected);
                    continue;
                }
            };

            let event = self.handle_line(&line, resolver, notifier).await;
            on_event(self, &event);

            if event == SessionEvent::Quit {
                break;
            }
        }

        Ok(())
    }
}
