//! Toast notification state.
//!
//! A new notification replaces the current one instantly and restarts the
//! hide timer. The `seq` counter is the restart mechanism: the toast
//! component schedules a hide keyed by the sequence at show time, and a
//! stale timer whose sequence no longer matches does nothing.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// How long a toast stays visible.
pub const DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    /// Modifier class on the toast container.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notification notification--success",
            Self::Error => "notification notification--error",
        }
    }
}

/// At most one notification exists; showing another overwrites it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub message: String,
    pub kind: NotificationKind,
    pub visible: bool,
    /// Bumped on every `show`; hide timers compare against it.
    pub seq: u64,
}

impl NotificationState {
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        self.seq += 1;
    }

    /// Hide only if no newer `show` has happened since `seq` was taken.
    pub fn hide_if_current(&mut self, seq: u64) {
        if self.seq == seq {
            self.visible = false;
        }
    }
}
