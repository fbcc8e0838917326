use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use email_address::EmailAddress;
use tracing::{error, info};

use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactError, ContactUseCase, SubmitContactData,
};
use crate::modules::contact::application::ports::outgoing::contact_notifier::ContactNotifier;

pub struct ContactService {
    notifier: Arc<dyn ContactNotifier>,
}

impl ContactService {
    pub fn new(notifier: Arc<dyn ContactNotifier>) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl ContactUseCase for ContactService {
    async fn submit(&self, data: SubmitContactData) -> Result<(), ContactError> {
        if data.name.trim().is_empty() {
            return Err(ContactError::Validation("name"));
        }
        if data.message.trim().is_empty() {
            return Err(ContactError::Validation("message"));
        }
        if !EmailAddress::is_valid(data.email.trim()) {
            return Err(ContactError::Validation("email"));
        }

        let submission = ContactSubmission {
            name: data.name.trim().to_string(),
            email: data.email.trim().to_string(),
            subject: data.subject,
            message: data.message,
            received_at: Utc::now(),
        };

        match self.notifier.notify(&submission).await {
            Ok(()) => {
                info!(from = %submission.email, "contact submission delivered");
                Ok(())
            }
            Err(e) => {
                error!("contact notification failed: {}", e);
                Err(ContactError::DeliveryFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::ports::outgoing::contact_notifier::NotifyError;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct CaptureNotifier {
        sent: Mutex<Vec<ContactSubmission>>,
        fail: bool,
    }

    #[async_trait]
    impl ContactNotifier for CaptureNotifier {
        async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
            if self.fail {
                return Err(NotifyError::Delivery("smtp down".to_string()));
            }
            self.sent.lock().push(submission.clone());
            Ok(())
        }
    }

    fn valid_data() -> SubmitContactData {
        SubmitContactData {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            subject: Some("Hi".to_string()),
            message: "I would like to talk.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_submission_is_delivered() {
        let notifier = Arc::new(CaptureNotifier::default());
        let svc = ContactService::new(notifier.clone());

        svc.submit(valid_data()).await.unwrap();

        let sent = notifier.sent.lock();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected_before_delivery() {
        let notifier = Arc::new(CaptureNotifier::default());
        let svc = ContactService::new(notifier.clone());

        let mut no_name = valid_data();
        no_name.name = "  ".to_string();
        assert_eq!(
            svc.submit(no_name).await.unwrap_err(),
            ContactError::Validation("name")
        );

        let mut no_message = valid_data();
        no_message.message = String::new();
        assert_eq!(
            svc.submit(no_message).await.unwrap_err(),
            ContactError::Validation("message")
        );

        assert!(notifier.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected() {
        let svc = ContactService::new(Arc::new(CaptureNotifier::default()));

        for email in ["notanemail", "missing@", "@nodomain.com", ""] {
            let mut data = valid_data();
            data.email = email.to_string();
            assert_eq!(
                svc.submit(data).await.unwrap_err(),
                ContactError::Validation("email"),
                "accepted: {}",
                email
            );
        }
    }

    #[tokio::test]
    async fn test_notifier_failure_surfaces_as_delivery_error() {
        let svc = ContactService::new(Arc::new(CaptureNotifier {
            fail: true,
            ..Default::default()
        }));

        assert_eq!(
            svc.submit(valid_data()).await.unwrap_err(),
            ContactError::DeliveryFailed
        );
    }

    #[tokio::test]
    async fn test_whitespace_is_trimmed_from_name_and_email() {
        let notifier = Arc::new(CaptureNotifier::default());
        let svc = ContactService::new(notifier.clone());

        let mut data = valid_data();
        data.name = "  Jane  ".to_string();
        data.email = " jane@example.com ".to_string();
        svc.submit(data).await.unwrap();

        let sent = notifier.sent.lock();
        assert_eq!(sent[0].name, "Jane");
        assert_eq!(sent[0].email, "jane@example.com");
    }
}
