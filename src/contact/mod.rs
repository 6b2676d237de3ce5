//! Contact form component
//!
//! [`ContactForm`] owns the field values and a [`FormStatus`]. A submission
//! is validated, sent once through a [`ContactTransport`], and either clears
//! the form (success) or leaves the values in place with a static error
//! message (failure). There is no retry.
//!
//! ```
//! use quanta_tools::contact::{ContactForm, ContactSubmission, ContactTransport, FormStatus};
//!
//! struct Accept;
//! impl ContactTransport for Accept {
//!     fn send(&self, _: &ContactSubmission) -> quanta_tools::Result<()> { Ok(()) }
//! }
//!
//! let mut form = ContactForm::new();
//! form.set_name("Ada").unwrap();
//! form.set_email("ada@example.com").unwrap();
//! form.set_message("Hello").unwrap();
//! form.submit(&Accept).unwrap();
//! assert_eq!(form.status(), &FormStatus::Submitted);
//! assert!(form.fields().name.is_empty());
//! ```

pub mod transport;

use std::fmt;
use std::str::FromStr;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use transport::{ContactTransport, HttpTransport, ENDPOINT_PATH};

/// Address offered when a submission fails
pub const FALLBACK_EMAIL: &str = "info@qsub.net";

/// Message shown after a failed submission
pub const FAILURE_MESSAGE: &str =
    "Failed to send message. Please try again or email us directly at info@qsub.net";

/// Subjects offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Subject {
    #[default]
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
    #[serde(rename = "Investment Inquiry")]
    InvestmentInquiry,
    #[serde(rename = "Partnership Opportunity")]
    PartnershipOpportunity,
    #[serde(rename = "Technical Questions")]
    TechnicalQuestions,
    #[serde(rename = "Mining/Validation")]
    MiningValidation,
    #[serde(rename = "Press/Media")]
    PressMedia,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::GeneralInquiry,
        Subject::InvestmentInquiry,
        Subject::PartnershipOpportunity,
        Subject::TechnicalQuestions,
        Subject::MiningValidation,
        Subject::PressMedia,
    ];

    /// Value submitted to the endpoint
    pub fn as_str(self) -> &'static str {
        match self {
            Subject::GeneralInquiry => "General Inquiry",
            Subject::InvestmentInquiry => "Investment Inquiry",
            Subject::PartnershipOpportunity => "Partnership Opportunity",
            Subject::TechnicalQuestions => "Technical Questions",
            Subject::MiningValidation => "Mining/Validation",
            Subject::PressMedia => "Press/Media",
        }
    }

    /// Text shown in the subject picker
    pub fn label(self) -> &'static str {
        match self {
            Subject::MiningValidation => "Mining / Validation",
            Subject::PressMedia => "Press / Media",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.as_str() == s)
            .ok_or_else(|| Error::ValidationError {
                field: "subject",
                reason: format!("'{}' is not one of the offered subjects", s),
            })
    }
}

/// The JSON body posted to the contact endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Subject,
    pub message: String,
}

impl ContactSubmission {
    /// Client-side constraints: required fields are non-empty and the email
    /// has the `local@domain` shape.
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        if !looks_like_email(&self.email) {
            return Err(Error::ValidationError {
                field: "email",
                reason: format!("'{}' is not an email address", self.email),
            });
        }
        require("message", &self.message)?;
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::ValidationError {
            field,
            reason: "this field is required".to_string(),
        });
    }
    Ok(())
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    /// A request is outstanding; doubles as the re-submission guard
    Submitting,
    Submitted,
    /// The last attempt failed; fields stay editable
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Contact form state
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: ContactSubmission,
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
            fields: ContactSubmission::default(),
            status: FormStatus::Editing,
        }
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Whether the submit button is disabled
    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Message to show above the fields, if any
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    fn ensure_editable(&self) -> Result<()> {
        match self.status {
            FormStatus::Editing | FormStatus::Error(_) => Ok(()),
            FormStatus::Submitting => Err(Error::InvalidState("a submission is in progress".into())),
            FormStatus::Submitted => Err(Error::InvalidState("the form has been submitted".into())),
        }
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;
        self.fields.name = value.into();
        Ok(())
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;
        self.fields.email = value.into();
        Ok(())
    }

    pub fn set_subject(&mut self, subject: Subject) -> Result<()> {
        self.ensure_editable()?;
        self.fields.subject = subject;
        Ok(())
    }

    pub fn set_message(&mut self, value: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;
        self.fields.message = value.into();
        Ok(())
    }

    /// Apply a raw input value to `field`, as an input event would. Subject
    /// values outside [`Subject::ALL`] are rejected and leave the form as is.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<()> {
        match field {
            Field::Name => self.set_name(value),
            Field::Email => self.set_email(value),
            Field::Subject => {
                let subject = value.parse()?;
                self.set_subject(subject)
            }
            Field::Message => self.set_message(value),
        }
    }

    /// Validate and enter `Submitting`. Returns the payload to send.
    ///
    /// Fails without changing the status when a request is already
    /// outstanding or a constraint is violated; no request may be sent then.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission> {
        match self.status {
            FormStatus::Editing | FormStatus::Error(_) => {}
            FormStatus::Submitting => {
                return Err(Error::InvalidState("a submission is already in flight".into()))
            }
            FormStatus::Submitted => {
                return Err(Error::InvalidState("the form has already been submitted".into()))
            }
        }
        self.fields.validate()?;
        self.status = FormStatus::Submitting;
        Ok(self.fields.clone())
    }

    /// Record the outcome of the request started by [`begin_submit`].
    ///
    /// [`begin_submit`]: ContactForm::begin_submit
    pub fn finish_submit(&mut self, outcome: Result<()>) -> Result<()> {
        if self.status != FormStatus::Submitting {
            return Err(Error::InvalidState("no submission is in flight".into()));
        }
        match outcome {
            Ok(()) => {
                info!("Contact form submitted: {} - {}", self.fields.email, self.fields.subject);
                self.fields = ContactSubmission::default();
                self.status = FormStatus::Submitted;
            }
            Err(e) => {
                warn!("Contact form submission failed: {}", e);
                self.status = FormStatus::Error(FAILURE_MESSAGE.to_string());
            }
        }
        Ok(())
    }

    /// Validate, send once through `transport` and record the outcome.
    ///
    /// Returns `Err` only when the submission was blocked before sending.
    /// A failed send is reported through [`FormStatus::Error`].
    pub fn submit(&mut self, transport: &dyn ContactTransport) -> Result<()> {
        let payload = self.begin_submit()?;
        debug!("posting contact submission for {}", payload.email);
        let outcome = transport.send(&payload);
        self.finish_submit(outcome)
    }

    /// "Send another message": leave the confirmation for an empty form
    pub fn send_another(&mut self) -> Result<()> {
        if self.status != FormStatus::Submitted {
            return Err(Error::InvalidState("nothing has been submitted yet".into()));
        }
        self.status = FormStatus::Editing;
        Ok(())
    }
}
