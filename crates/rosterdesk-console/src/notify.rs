/*
[INPUT]:  Operation outcomes from screen state machines
[OUTPUT]: Transient user-facing notifications with tick decay
[POS]:    Notification surface shared by both screens
[UPDATE]: When changing severities or display lifetime
*/

use rosterdesk_adapter::ConsoleError;

/// Ticks a notification stays visible (6s at the 250ms UI tick).
const NOTIFICATION_TICKS: u8 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Single notification slot per screen.
///
/// Overlapping operations race last-write-wins on the slot; only the most
/// recent outcome is shown.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    current: Option<(Notification, u8)>,
}

impl NotificationSlot {
    pub fn set(&mut self, notification: Notification) {
        self.current = Some((notification, NOTIFICATION_TICKS));
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(notification, _)| notification)
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Called on every UI tick; hides the notification once its time is up.
    pub fn tick(&mut self) {
        if let Some((_, ticks)) = self.current.as_mut() {
            if *ticks > 0 {
                *ticks -= 1;
            } else {
                self.current = None;
            }
        }
    }
}

/// Formats a failed operation the way the backend reported it:
/// `Error {status}: {status text}` for API rejections, `Error: {cause}` for
/// everything else.
pub fn failure_text(err: &ConsoleError) -> String {
    match err {
        ConsoleError::Api {
            status,
            status_text,
        } => format!("Error {status}: {status_text}"),
        other => format!("Error: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_is_last_write_wins() {
        let mut slot = NotificationSlot::default();
        slot.set(Notification::info("Saving ..."));
        slot.set(Notification::error("Error 500: Internal Server Error"));

        let current = slot.current().unwrap();
        assert_eq!(current.severity, Severity::Error);
    }

    #[test]
    fn slot_decays_after_ticks() {
        let mut slot = NotificationSlot::default();
        slot.set(Notification::success("Data loaded."));

        for _ in 0..=NOTIFICATION_TICKS {
            assert!(slot.current().is_some());
            slot.tick();
        }
        assert!(slot.current().is_none());
    }

    #[test]
    fn api_failures_surface_status_verbatim() {
        let err = ConsoleError::Api {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(failure_text(&err), "Error 404: Not Found");
    }
}
