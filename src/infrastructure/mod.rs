// src/infrastructure/mod.rs
pub mod notification;
pub mod ticket_hub;

pub use notification::{ConsoleNotifier, MemoryNotifier, Notification, NotificationKind};
pub use ticket_hub::HyperTicketHubRepository;
