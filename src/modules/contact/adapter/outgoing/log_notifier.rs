use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::modules::contact::application::ports::outgoing::contact_notifier::{
    ContactNotifier, NotifyError,
};

/// Fallback notifier used when no SMTP relay is configured: submissions are
/// written to the log instead of silently dropped.
pub struct LogContactNotifier;

#[async_trait]
impl ContactNotifier for LogContactNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        info!(
            from = %submission.email,
            name = %submission.name,
            subject = %submission.subject_line(),
            "contact submission (no SMTP relay configured): {}",
            submission.message
        );
        Ok(())
    }
}
