// UI-side collaborators: the notification store and terminal rendering of it.

pub mod render;
pub mod toast;

pub use toast::{Toast, ToastDefaults, ToastId, ToastKind, ToastOptions, ToastStore};
