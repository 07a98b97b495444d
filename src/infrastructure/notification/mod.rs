// src/infrastructure/notification/mod.rs
// Notification surfaces

use std::sync::Mutex;

use crate::domain::service::Notifier;

/// Prints feedback to the terminal and mirrors it to the log
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify_success(&self, message: &str) {
        log::info!("{}", message);
        println!("✔ {}", message);
    }

    fn notify_failure(&self, message: &str) {
        log::warn!("{}", message);
        eprintln!("✘ {}", message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Keeps notifications in memory until a host drains them
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything recorded so far, oldest first
    pub fn take(&self) -> Vec<Notification> {
        match self.notifications.lock() {
            Ok(mut notifications) => std::mem::take(&mut *notifications),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    fn push(&self, kind: NotificationKind, message: &str) {
        let notification = Notification {
            kind,
            message: message.to_string(),
        };
        match self.notifications.lock() {
            Ok(mut notifications) => notifications.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}

impl Notifier for MemoryNotifier {
    fn notify_success(&self, message: &str) {
        self.push(NotificationKind::Success, message);
    }

    fn notify_failure(&self, message: &str) {
        self.push(NotificationKind::Failure, message);
    }
}
