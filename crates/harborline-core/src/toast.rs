//! Transient toast notifications.
//!
//! Each pushed toast owns a small timer task: it stays visible for the
//! display duration, switches to its fade-out phase, and is detached once
//! the fade completes. Toasts never wait on each other.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// How long a toast stays fully visible
pub const DEFAULT_TOAST_DISPLAY: Duration = Duration::from_millis(3000);

/// Length of the fade-out animation before removal
pub const DEFAULT_TOAST_FADE: Duration = Duration::from_millis(300);

/// Kind of a toast, which decides its accent and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Something worked
    #[default]
    Success,
    /// Something failed
    Error,
}

impl ToastKind {
    /// CSS modifier class for this kind
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    /// Phosphor icon class shown next to the message
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "ph-check-circle",
            ToastKind::Error => "ph-warning-circle",
        }
    }
}

/// Identifier of a toast, unique within its queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Raw numeric value, suitable as a render key
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Lifecycle phase of a toast still attached to the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Fully shown
    Visible,
    /// Playing the fade-out animation
    Fading,
}

/// A single notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    message: String,
    kind: ToastKind,
    phase: ToastPhase,
}

impl Toast {
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Full class list, e.g. `toast error fading`
    pub fn class(&self) -> String {
        match self.phase {
            ToastPhase::Visible => format!("toast {}", self.kind.class()),
            ToastPhase::Fading => format!("toast {} fading", self.kind.class()),
        }
    }
}

/// Display and fade durations for toasts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    pub display: Duration,
    pub fade: Duration,
}

impl ToastTiming {
    /// Total time from push to removal
    pub fn lifetime(&self) -> Duration {
        self.display + self.fade
    }
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            display: DEFAULT_TOAST_DISPLAY,
            fade: DEFAULT_TOAST_FADE,
        }
    }
}

/// The notification container and the toasts currently attached to it.
///
/// The container is attached on the first push and then stays for the
/// lifetime of the page, even when it holds no toasts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSurface {
    attached: bool,
    toasts: Vec<Toast>,
}

impl ToastSurface {
    /// Whether the container has been attached to the page
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Attached toasts, oldest first
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Look up an attached toast
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    fn set_phase(&mut self, id: ToastId, phase: ToastPhase) -> bool {
        match self.toasts.iter_mut().find(|toast| toast.id == id) {
            Some(toast) => {
                toast.phase = phase;
                true
            }
            None => false,
        }
    }

    fn detach(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}

/// Fire-and-forget notification queue.
///
/// Cloning yields another handle to the same surface. Removal timers run
/// on the tokio runtime, so `push` must be called from within one.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    surface: Arc<watch::Sender<ToastSurface>>,
    next_id: Arc<AtomicU64>,
    timing: ToastTiming,
}

impl ToastQueue {
    pub fn new(timing: ToastTiming) -> Self {
        let (tx, _rx) = watch::channel(ToastSurface::default());
        Self {
            surface: Arc::new(tx),
            next_id: Arc::new(AtomicU64::new(0)),
            timing,
        }
    }

    pub fn timing(&self) -> ToastTiming {
        self.timing
    }

    /// Show `message` and schedule its removal. Returns immediately.
    pub fn push(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = ToastId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let toast = Toast {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Visible,
        };
        tracing::debug!(id = id.value(), kind = kind.class(), "Toast shown");

        self.surface.send_modify(|surface| {
            surface.attached = true;
            surface.toasts.push(toast);
        });

        let surface = Arc::clone(&self.surface);
        let timing = self.timing;
        tokio::spawn(async move {
            tokio::time::sleep(timing.display).await;
            surface.send_if_modified(|surface| surface.set_phase(id, ToastPhase::Fading));

            tokio::time::sleep(timing.fade).await;
            surface.send_if_modified(|surface| surface.detach(id));
            tracing::trace!(id = id.value(), "Toast removed");
        });

        id
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.push(message, ToastKind::Error)
    }

    /// Current state of the surface
    pub fn snapshot(&self) -> ToastSurface {
        self.surface.borrow().clone()
    }

    /// Receive a notification whenever toasts are added, fade, or leave
    pub fn subscribe(&self) -> watch::Receiver<ToastSurface> {
        self.surface.subscribe()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(ToastTiming::default())
    }
}
