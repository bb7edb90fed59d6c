use crate::ui::toast::{Toast, ToastKind};

fn icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✅",
        ToastKind::Error => "❌",
        ToastKind::Warning => "⚠️",
        ToastKind::Info => "💡",
    }
}

/// One-line terminal rendering of a toast.
pub fn format_toast(toast: &Toast) -> String {
    match &toast.message {
        Some(message) if !message.is_empty() => {
            format!("{} {}: {}", icon(toast.kind), toast.title, message)
        }
        _ => format!("{} {}", icon(toast.kind), toast.title),
    }
}

/// Writes every live toast to stderr, oldest first.
pub fn flush_to_stderr(toasts: &[Toast]) {
    for toast in toasts {
        eprintln!("{}", format_toast(toast));
    }
}
