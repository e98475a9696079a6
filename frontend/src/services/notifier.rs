//! Toast notifier backed by a reactive notification center.

use std::cell::RefCell;
use std::rc::Rc;

use excel_processor::{
    Notification, NotificationCenter, NotificationHandle, Notifier, Severity, ToastOptions,
};
use gloo_timers::callback::Timeout;
use leptos::*;

/// Shared handle to the visible toasts.
///
/// Cloned into every component that raises or renders notifications.
#[derive(Clone)]
pub struct ToastNotifier {
    center: Rc<RefCell<NotificationCenter>>,
    changed: Trigger,
}

impl ToastNotifier {
    pub fn new(options: ToastOptions) -> Self {
        Self {
            center: Rc::new(RefCell::new(NotificationCenter::new(options))),
            changed: create_trigger(),
        }
    }

    pub fn options(&self) -> ToastOptions {
        self.center.borrow().options()
    }

    /// Snapshot of visible toasts. Tracks changes when read in a view.
    pub fn visible(&self) -> Vec<Notification> {
        self.changed.track();
        self.center.borrow().iter().cloned().collect()
    }

    pub fn dismiss(&self, handle: NotificationHandle) {
        let removed = self.center.borrow_mut().dismiss(handle);
        if removed {
            self.changed.notify();
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, severity: Severity) -> NotificationHandle {
        let handle = self.center.notify(message, severity);
        self.changed.notify();

        if let Some(delay) = self.options().auto_close {
            let notifier = self.clone();
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || notifier.dismiss(handle)).forget();
        }

        handle
    }
}
