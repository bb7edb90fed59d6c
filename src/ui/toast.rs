//! Transient notification store.
//!
//! The UI layer owns one [`ToastStore`] and hands clones of it to whatever
//! needs to post feedback. Toasts with a positive duration expire on a tokio
//! timer; the rest stay until dismissed or cleared.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        };
        f.write_str(label)
    }
}

/// Per-kind lifetime used when a toast does not set its own duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDefaults {
    pub success: Duration,
    pub error: Duration,
    pub warning: Duration,
    pub info: Duration,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            success: Duration::from_millis(3000),
            error: Duration::from_millis(8000),
            warning: Duration::from_millis(5000),
            info: Duration::from_millis(4000),
        }
    }
}

impl ToastDefaults {
    pub fn for_kind(&self, kind: ToastKind) -> Duration {
        match kind {
            ToastKind::Success => self.success,
            ToastKind::Error => self.error,
            ToastKind::Warning => self.warning,
            ToastKind::Info => self.info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastId(String);

impl ToastId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    pub duration_ms: u64,
    pub auto_close: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ToastOptions {
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    pub duration: Option<Duration>,
    pub auto_close: bool,
}

impl ToastOptions {
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: None,
            duration: None,
            auto_close: true,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// A zero duration keeps the toast until it is dismissed.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn persistent(mut self) -> Self {
        self.auto_close = false;
        self
    }
}

#[derive(Default)]
struct Inner {
    toasts: Mutex<Vec<Toast>>,
    timers: Mutex<HashMap<ToastId, JoinHandle<()>>>,
    next_id: AtomicU64,
    defaults: ToastDefaults,
}

impl Inner {
    fn toasts(&self) -> MutexGuard<'_, Vec<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn timers(&self) -> MutexGuard<'_, HashMap<ToastId, JoinHandle<()>>> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn remove(&self, id: &ToastId) -> bool {
        let mut toasts = self.toasts();
        match toasts.iter().position(|toast| &toast.id == id) {
            Some(index) => {
                toasts.remove(index);
                true
            }
            None => false,
        }
    }

    fn abort_all_timers(&self) {
        for (_, handle) in self.timers().drain() {
            handle.abort();
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.abort_all_timers();
    }
}

/// Shared handle to one list of toasts. Clones see the same list.
#[derive(Clone, Default)]
pub struct ToastStore {
    inner: Arc<Inner>,
}

impl fmt::Debug for ToastStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastStore")
            .field("toasts", &self.inner.toasts().len())
            .field("defaults", &self.inner.defaults)
            .finish()
    }
}

impl ToastStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: ToastDefaults) -> Self {
        Self {
            inner: Arc::new(Inner {
                toasts: Mutex::new(Vec::new()),
                timers: Mutex::new(HashMap::new()),
                next_id: AtomicU64::new(0),
                defaults,
            }),
        }
    }

    pub fn defaults(&self) -> ToastDefaults {
        self.inner.defaults
    }

    pub fn show(&self, options: ToastOptions) -> ToastId {
        let seq = self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let id = ToastId(format!("toast-{}", seq));
        let duration = options
            .duration
            .unwrap_or_else(|| self.inner.defaults.for_kind(options.kind));

        let toast = Toast {
            id: id.clone(),
            kind: options.kind,
            title: options.title,
            message: options.message,
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            auto_close: options.auto_close,
            created_at: Utc::now(),
        };
        tracing::debug!("Showing {} toast {}: {}", toast.kind, id, toast.title);
        self.inner.toasts().push(toast);

        if options.auto_close && !duration.is_zero() {
            self.schedule_expiry(id.clone(), duration);
        }

        id
    }

    fn schedule_expiry(&self, id: ToastId, after: Duration) {
        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!("No tokio runtime, toast {} will not expire on its own", id);
            return;
        };

        let store: Weak<Inner> = Arc::downgrade(&self.inner);
        let timer_id = id.clone();

        // Hold the timer map while spawning so the task cannot finish before
        // its handle is recorded.
        let mut timers = self.inner.timers();
        let handle = runtime.spawn(async move {
            tokio::time::sleep(after).await;
            if let Some(inner) = store.upgrade() {
                inner.timers().remove(&timer_id);
                if inner.remove(&timer_id) {
                    tracing::debug!("Toast {} expired", timer_id);
                }
            }
        });
        timers.insert(id, handle);
    }

    pub fn success(&self, title: impl Into<String>, message: Option<String>) -> ToastId {
        self.show_kind(ToastKind::Success, title, message)
    }

    pub fn error(&self, title: impl Into<String>, message: Option<String>) -> ToastId {
        self.show_kind(ToastKind::Error, title, message)
    }

    pub fn warning(&self, title: impl Into<String>, message: Option<String>) -> ToastId {
        self.show_kind(ToastKind::Warning, title, message)
    }

    pub fn info(&self, title: impl Into<String>, message: Option<String>) -> ToastId {
        self.show_kind(ToastKind::Info, title, message)
    }

    fn show_kind(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        message: Option<String>,
    ) -> ToastId {
        let mut options = ToastOptions::new(kind, title);
        options.message = message;
        self.show(options)
    }

    /// Removes a toast. Returns false when it was already gone.
    pub fn dismiss(&self, id: &ToastId) -> bool {
        if let Some(handle) = self.inner.timers().remove(id) {
            handle.abort();
        }
        self.inner.remove(id)
    }

    pub fn clear(&self) {
        self.inner.abort_all_timers();
        self.inner.toasts().clear();
    }

    /// Clears this store and stops its timers. Other clones keep working
    /// but start from an empty list.
    pub fn dispose(self) {
        self.clear();
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.inner.toasts().clone()
    }

    pub fn get(&self, id: &ToastId) -> Option<Toast> {
        self.inner.toasts().iter().find(|toast| &toast.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.toasts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.toasts().is_empty()
    }
}
