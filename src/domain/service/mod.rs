// src/domain/service/mod.rs
// Domain service interfaces

/// Surface that shows transient purchase feedback to the user
pub trait Notifier {
    fn notify_success(&self, message: &str);

    fn notify_failure(&self, message: &str);
}
