// Contact form model. Submissions are validated here and handed to a
// [`ContactSink`]; the only sink shipped records them in the log.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please tell us your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please share a memory or tribute.")]
    MissingMessage,
    #[error("Submission failed: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

/// `local@domain` with both halves non-empty, one `@`, no whitespace.
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Destination for submissions that already passed [`ContactSubmission::validate`].
pub trait ContactSink {
    fn submit(&mut self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

/// Accepts every submission and records its arrival at `info` level.
/// Names and addresses stay out of the log.
#[derive(Debug, Default)]
pub struct LoggingSink {
    accepted: usize,
}

impl LoggingSink {
    pub fn accepted(&self) -> usize {
        self.accepted
    }
}

impl ContactSink for LoggingSink {
    fn submit(&mut self, submission: &ContactSubmission) -> Result<(), ContactError> {
        self.accepted += 1;
        log::info!(
            "[contact] tribute #{} received ({} chars)",
            self.accepted,
            submission.message.chars().count()
        );
        Ok(())
    }
}

/// Validate then forward; the caller shows the returned text as form status.
pub fn submit_with<S: ContactSink>(
    sink: &mut S,
    submission: &ContactSubmission,
) -> Result<&'static str, ContactError> {
    submission.validate()?;
    sink.submit(submission)?;
    Ok("Thank you. Your contribution has been received.")
}
