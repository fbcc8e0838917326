use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::modules::contact::application::domain::entities::ContactSubmission;
use crate::modules::contact::application::ports::outgoing::contact_notifier::{
    ContactNotifier, NotifyError,
};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

/// Delivers contact submissions as plain-text mail to the site owner.
pub struct SmtpContactNotifier {
    mailer: Box<dyn Mailer>,
    from_email: String,
    owner_email: String,
}

impl SmtpContactNotifier {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str, owner_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
            owner_email: owner_email.to_string(),
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
        owner_email: &str,
    ) -> Result<Self, NotifyError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| NotifyError::Delivery(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(
            Box::new(transport),
            from_email,
            owner_email,
        ))
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str, owner_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email, owner_email)
    }

    fn body_for(submission: &ContactSubmission) -> String {
        format!(
            "From: {} <{}>\nReceived: {}\n\n{}",
            submission.name,
            submission.email,
            submission.received_at.to_rfc3339(),
            submission.message
        )
    }
}

#[async_trait]
impl ContactNotifier for SmtpContactNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        let email = Message::builder()
            .from(
                self.from_email
                    .parse()
                    .map_err(|e| NotifyError::Delivery(format!("{:?}", e)))?,
            )
            .reply_to(
                submission
                    .email
                    .parse()
                    .map_err(|e| NotifyError::Delivery(format!("{:?}", e)))?,
            )
            .to(self
                .owner_email
                .parse()
                .map_err(|e| NotifyError::Delivery(format!("{:?}", e)))?)
            .subject(submission.subject_line())
            .header(ContentType::TEXT_PLAIN)
            .body(Self::body_for(submission))
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        self.mailer
            .send(email)
            .await
            .map_err(NotifyError::Delivery)
    }
}
