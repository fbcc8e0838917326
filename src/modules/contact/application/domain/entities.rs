use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A visitor's message from the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn subject_line(&self) -> String {
        match &self.subject {
            Some(s) if !s.trim().is_empty() => format!("Portfolio contact: {}", s),
            _ => format!("Portfolio contact from {}", self.name),
        }
    }
}
