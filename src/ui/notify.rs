use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    created: Instant,
}

/// Queue of transient toasts with a shared time-to-live.
///
/// Toasts expire on [`prune`](Self::prune), driven by the runtime tick, so
/// a stalled event loop never drops one mid-display.
#[derive(Debug)]
pub struct Notifications {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(text.into(), ToastKind::Success);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(text.into(), ToastKind::Error);
    }

    fn push(&mut self, text: String, kind: ToastKind) {
        self.toasts.push_back(Toast {
            text,
            kind,
            created: Instant::now(),
        });
    }

    /// Drop expired toasts.
    pub fn prune(&mut self) {
        let ttl = self.ttl;
        self.toasts.retain(|toast| toast.created.elapsed() < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
