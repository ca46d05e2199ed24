//! Transient notification shown after actions such as deleting a job.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    /// Identifies this toast so a stale dismiss timer cannot hide a newer one.
    pub seq: u64,
}

/// At most one toast is visible; a new one replaces the old.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<Toast>,
    next_seq: u64,
}

impl ToastState {
    /// Show a toast and return its sequence number for later dismissal.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.current = Some(Toast { kind, message: message.into(), seq });
        seq
    }

    /// Hide the toast only if it is still the one identified by `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|t| t.seq == seq) {
            self.current = None;
        }
    }
}
