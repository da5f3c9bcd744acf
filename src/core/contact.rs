//! Contact form state and the email-relay request body.

use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("a message is already being sent")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Sent,
    Failed,
    Invalid(ContactError),
}

impl SubmitStatus {
    pub fn message(&self) -> String {
        match self {
            SubmitStatus::Sent => "Message sent successfully!".to_string(),
            SubmitStatus::Failed => "Failed to send message. Please try again.".to_string(),
            SubmitStatus::Invalid(err) => err.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    payload: ContactPayload,
    submitting: bool,
    status: Option<SubmitStatus>,
}

impl ContactForm {
    pub fn payload(&self) -> &ContactPayload {
        &self.payload
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<&SubmitStatus> {
        self.status.as_ref()
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "SENDING..."
        } else {
            "SEND MESSAGE"
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.payload.name = value,
            Field::Email => self.payload.email = value,
            Field::Message => self.payload.message = value,
        }
    }

    /// Validate and mark the form as sending. Returns the payload to relay.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, ContactError> {
        if self.submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        if let Err(err) = validate(&self.payload) {
            self.status = Some(SubmitStatus::Invalid(err.clone()));
            return Err(err);
        }
        self.submitting = true;
        self.status = None;
        Ok(self.payload.clone())
    }

    /// Record the relay outcome. Fields are only cleared on success.
    pub fn finish_submit(&mut self, result: Result<(), SendError>) -> &SubmitStatus {
        self.submitting = false;
        let status = match result {
            Ok(()) => {
                log::info!("[contact] message sent");
                self.payload = ContactPayload::default();
                SubmitStatus::Sent
            }
            Err(err) => {
                log::error!("[contact] send failed: {}", err);
                SubmitStatus::Failed
            }
        };
        self.status.insert(status)
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

pub fn validate(payload: &ContactPayload) -> Result<(), ContactError> {
    if payload.name.trim().is_empty() {
        return Err(ContactError::MissingField("name"));
    }
    if payload.email.trim().is_empty() {
        return Err(ContactError::MissingField("email"));
    }
    if payload.message.trim().is_empty() {
        return Err(ContactError::MissingField("message"));
    }
    if !looks_like_email(payload.email.trim()) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(())
}

/// `local@domain.tld` with no whitespace.
pub fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Email relay account (EmailJS REST API).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailRelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for EmailRelayConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: "service_3pjafyh".to_string(),
            template_id: "template_8717rqo".to_string(),
            public_key: "YUu5oiMyx834ATfmr".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactPayload,
}

impl EmailRelayConfig {
    pub fn request<'a>(&'a self, payload: &'a ContactPayload) -> RelayRequest<'a> {
        RelayRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: payload,
        }
    }
}
