use crate::domain::model::{ContactReceipt, ContactSubmission};
use crate::domain::ports::ContentProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_email, validate_required_input};
use chrono::{DateTime, Duration, Utc};

pub const SERVICE_OPTIONS: [&str; 7] = [
    "Sustainable Collection Development",
    "ESG & Circular Design Strategy",
    "AI & Digital Fashion Solutions",
    "Research & Innovation Consulting",
    "Strategic Advisory",
    "Speaking Engagement",
    "Other",
];

pub const TIMELINE_OPTIONS: [&str; 5] = [
    "Immediate (within 1 month)",
    "Short-term (1-3 months)",
    "Medium-term (3-6 months)",
    "Long-term (6+ months)",
    "Flexible/To be discussed",
];

/// How long the "message sent" acknowledgement stays up.
pub const ACKNOWLEDGEMENT_SECS: i64 = 5;

/// Raw form input. Empty strings stand for untouched fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub service: String,
    pub message: String,
    pub timeline: String,
}

impl ContactFields {
    pub fn is_empty(&self) -> bool {
        *self == ContactFields::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitting,
    Submitted {
        receipt: ContactReceipt,
        at: DateTime<Utc>,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: ContactFields,
    status: FormStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            status: FormStatus::Editing,
        }
    }

    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            fields,
            status: FormStatus::Editing,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.status, FormStatus::Submitted { .. })
    }

    /// Checks required fields (name, email, service, message) and builds the
    /// request body. Optional fields left blank are omitted.
    pub fn validate(&self) -> Result<ContactSubmission> {
        let f = &self.fields;
        validate_required_input("name", "Name", &f.name)?;
        validate_required_input("email", "Email", &f.email)?;
        validate_email("email", &f.email)?;
        validate_required_input("service", "Service", &f.service)?;
        validate_required_input("message", "Message", &f.message)?;

        Ok(ContactSubmission {
            name: f.name.trim().to_string(),
            email: f.email.trim().to_string(),
            company: optional(&f.company),
            role: optional(&f.role),
            service: f.service.trim().to_string(),
            message: f.message.trim().to_string(),
            timeline: optional(&f.timeline),
        })
    }

    pub async fn submit(&mut self, provider: &dyn ContentProvider) -> Result<ContactReceipt> {
        self.submit_at(provider, Utc::now()).await
    }

    /// Any failure, including validation, keeps the input and replaces the
    /// previous status with `Failed`; success clears the input.
    pub async fn submit_at(
        &mut self,
        provider: &dyn ContentProvider,
        now: DateTime<Utc>,
    ) -> Result<ContactReceipt> {
        let submission = match self.validate() {
            Ok(submission) => submission,
            Err(e) => {
                self.status = FormStatus::Failed {
                    message: e.user_friendly_message(),
                };
                return Err(e);
            }
        };

        self.status = FormStatus::Submitting;
        tracing::debug!("submitting contact form via {} provider", provider.source_name());

        match provider.submit_contact(&submission).await {
            Ok(receipt) => {
                tracing::info!("contact submission accepted: {}", receipt.submission_id);
                self.fields = ContactFields::default();
                self.status = FormStatus::Submitted {
                    receipt: receipt.clone(),
                    at: now,
                };
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!("contact submission failed: {}", e);
                self.status = FormStatus::Failed {
                    message: e.user_friendly_message(),
                };
                Err(e)
            }
        }
    }

    /// Drops the acknowledgement once its window has passed. Returns whether
    /// the status changed.
    pub fn expire_acknowledgement(&mut self, now: DateTime<Utc>) -> bool {
        if let FormStatus::Submitted { at, .. } = &self.status {
            if now - *at >= Duration::seconds(ACKNOWLEDGEMENT_SECS) {
                self.status = FormStatus::Editing;
                return true;
            }
        }
        false
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
