//! User-facing notifications.
//!
//! [`Notifier`] is the seam the widget raises feedback through. The
//! [`NotificationCenter`] is the in-memory list of visible toasts that a
//! toast container renders.
//!
//! Notifications never auto-dismiss unless [`ToastOptions::auto_close`]
//! is set.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

// =============================================================================
// Severity & Options
// =============================================================================

/// Visual urgency of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    #[default]
    Error,
    Warning,
    Info,
    Default,
}

impl Severity {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "toast-success",
            Severity::Error => "toast-error",
            Severity::Warning => "toast-warning",
            Severity::Info => "toast-info",
            Severity::Default => "toast-default",
        }
    }

    /// Short label shown in the toast header.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
            Severity::Default => "Notice",
        }
    }

    /// Console log level used when the notification is raised.
    pub fn log_level(&self) -> log::Level {
        match self {
            Severity::Error => log::Level::Error,
            Severity::Warning => log::Level::Warn,
            _ => log::Level::Info,
        }
    }
}

/// Where the toast stack is anchored on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    /// Inline CSS placing a fixed container at this position.
    pub fn css(&self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top: 1rem; left: 1rem;",
            ToastPosition::TopCenter => "top: 1rem; left: 50%; transform: translateX(-50%);",
            ToastPosition::TopRight => "top: 1rem; right: 1rem;",
            ToastPosition::BottomLeft => "bottom: 1rem; left: 1rem;",
            ToastPosition::BottomCenter => "bottom: 1rem; left: 50%; transform: translateX(-50%);",
            ToastPosition::BottomRight => "bottom: 1rem; right: 1rem;",
        }
    }
}

/// Presentation options applied to every notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToastOptions {
    /// Dismiss automatically after this delay. `None` keeps the toast
    /// until the user closes it.
    pub auto_close: Option<Duration>,
    pub position: ToastPosition,
}

// =============================================================================
// Notifications
// =============================================================================

/// Identifies a raised notification, e.g. to dismiss it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationHandle(u64);

impl NotificationHandle {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// A single visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub handle: NotificationHandle,
    pub message: String,
    pub severity: Severity,
}

/// Raises user-facing notifications. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity) -> NotificationHandle;

    /// Shorthand for the default severity.
    fn error(&self, message: &str) -> NotificationHandle {
        self.notify(message, Severity::Error)
    }
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, message: &str, severity: Severity) -> NotificationHandle {
        (**self).notify(message, severity)
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str, severity: Severity) -> NotificationHandle {
        (**self).notify(message, severity)
    }
}

// =============================================================================
// Notification Center
// =============================================================================

/// Ordered list of visible notifications, oldest first.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
    next_handle: u64,
    options: ToastOptions,
}

impl NotificationCenter {
    pub fn new(options: ToastOptions) -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 0,
            options,
        }
    }

    pub fn options(&self) -> ToastOptions {
        self.options
    }

    /// Add a notification and return its handle.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> NotificationHandle {
        let handle = NotificationHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Notification {
            handle,
            message: message.into(),
            severity,
        });
        handle
    }

    /// Remove a notification. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, handle: NotificationHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.handle != handle);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of notifications with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|n| n.severity == severity).count()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.entries.last()
    }
}

impl Notifier for RefCell<NotificationCenter> {
    fn notify(&self, message: &str, severity: Severity) -> NotificationHandle {
        log::log!(severity.log_level(), "{}", message);
        self.borrow_mut().push(message, severity)
    }
}
