pub mod log_notifier;
pub mod smtp_notifier;
