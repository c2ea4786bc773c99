//! The contact form: validation, drafts and simulated submission.

use std::fmt;
use std::result;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::SnapshotStore;
use crate::ContactOptions;

mod draft;
pub use draft::ContactDrafts;

/// Confirmation shown once a submission goes through.
pub const SUBMITTED_MESSAGE: &str =
    "Thank you for your message! We'll get back to you within 24 hours.";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("phone pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Checks a phone number after stripping dashes, whitespace and parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
        .collect();
    PHONE.is_match(&digits)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::Phone)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please keep your message under {max} characters")]
    TooLong { max: usize },
}

/// Every failing field of a form, in field order.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub Vec<(ContactField, FieldError)>);

impl ValidationErrors {
    pub fn get(&self, field: ContactField) -> Option<&FieldError> {
        self.0
            .iter()
            .find_map(|(failed, err)| (*failed == field).then_some(err))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

type Result<T> = result::Result<T, Error>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Checks one field, as on blur.
    pub fn validate_field(
        &self,
        field: ContactField,
        options: &ContactOptions,
    ) -> result::Result<(), FieldError> {
        let value = self.value(field).trim();
        if value.is_empty() {
            return if field.is_required() {
                Err(FieldError::Required)
            } else {
                Ok(())
            };
        }

        match field {
            ContactField::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
            ContactField::Phone if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
            ContactField::Message if value.chars().count() > options.max_message_length => {
                Err(FieldError::TooLong {
                    max: options.max_message_length,
                })
            }
            _ => Ok(()),
        }
    }

    /// Checks every field and reports all failures at once.
    pub fn validate(&self, options: &ContactOptions) -> result::Result<(), ValidationErrors> {
        let failed: Vec<_> = ContactField::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field, options).err().map(|err| (field, err)))
            .collect();

        if failed.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(failed))
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Critical,
}

/// The message box's "N characters remaining" readout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CharacterCounter {
    /// Negative once the message is over the limit.
    pub remaining: i64,
    pub level: CounterLevel,
}

impl CharacterCounter {
    pub fn for_message(message: &str, max_length: usize) -> Self {
        let used = i64::try_from(message.chars().count()).unwrap_or(i64::MAX);
        let max = i64::try_from(max_length).unwrap_or(i64::MAX);
        let remaining = max.saturating_sub(used);
        let level = match remaining {
            r if r < 50 => CounterLevel::Critical,
            r if r < 100 => CounterLevel::Warning,
            _ => CounterLevel::Normal,
        };
        Self { remaining, level }
    }
}

impl fmt::Display for CharacterCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} characters remaining", self.remaining)
    }
}

/// Accepts contact form submissions.
///
/// There is no backend: a valid submission waits out the configured delay,
/// discards the saved draft and reports success.
#[derive(Debug)]
pub struct ContactService<S: SnapshotStore> {
    drafts: ContactDrafts<S>,
    options: ContactOptions,
}

impl<S: SnapshotStore> ContactService<S> {
    pub fn new(store: Arc<S>, options: ContactOptions) -> Self {
        Self {
            drafts: ContactDrafts::new(store, options),
            options,
        }
    }

    pub fn drafts(&self) -> &ContactDrafts<S> {
        &self.drafts
    }

    pub fn options(&self) -> &ContactOptions {
        &self.options
    }

    pub fn counter(&self, form: &ContactForm) -> CharacterCounter {
        CharacterCounter::for_message(&form.message, self.options.max_message_length)
    }

    #[tracing::instrument(name = "submitting contact form", skip(self, form))]
    pub async fn submit(&self, form: &ContactForm) -> Result<&'static str> {
        form.validate(&self.options).map_err(|err| {
            tracing::debug!(err = %err, "contact form rejected");
            err
        })?;

        tokio::time::sleep(self.options.submit_delay).await;
        self.drafts.discard();
        tracing::info!("contact form submitted");
        Ok(SUBMITTED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 (98) 765-43210".to_string(),
            subject: "Ring sizing".to_string(),
            message: "Can the solitaire be resized?".to_string(),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("9876543210"));
        assert!(!is_valid_phone("0123456"));
        assert!(!is_valid_phone("12345678901234567"));
        assert!(!is_valid_phone("call me"));
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(&ContactOptions::default()), Ok(()));
    }

    #[test]
    fn test_reports_every_failing_field() {
        let form = ContactForm {
            email: "not-an-email".to_string(),
            phone: "abc".to_string(),
            message: "   ".to_string(),
            ..valid_form()
        };
        let errors = form.validate(&ContactOptions::default()).unwrap_err();

        assert_eq!(errors.0.len(), 3);
        assert_eq!(errors.get(ContactField::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(errors.get(ContactField::Phone), Some(&FieldError::InvalidPhone));
        assert_eq!(errors.get(ContactField::Message), Some(&FieldError::Required));
        assert_eq!(errors.get(ContactField::Name), None);
        assert_eq!(FieldError::Required.to_string(), "This field is required");
    }

    #[test]
    fn test_phone_is_optional() {
        let form = ContactForm {
            phone: String::new(),
            ..valid_form()
        };
        assert_eq!(form.validate_field(ContactField::Phone, &ContactOptions::default()), Ok(()));
    }

    #[test]
    fn test_message_length_limit() {
        let options = ContactOptions::build().max_message_length(10);
        let form = ContactForm {
            message: "x".repeat(11),
            ..valid_form()
        };
        assert_eq!(
            form.validate_field(ContactField::Message, &options),
            Err(FieldError::TooLong { max: 10 })
        );
    }

    #[test]
    fn test_character_counter_levels() {
        let counter = CharacterCounter::for_message("hello", 1000);
        assert_eq!(counter.remaining, 995);
        assert_eq!(counter.level, CounterLevel::Normal);
        assert_eq!(counter.to_string(), "995 characters remaining");

        assert_eq!(
            CharacterCounter::for_message(&"x".repeat(920), 1000).level,
            CounterLevel::Warning
        );
        assert_eq!(
            CharacterCounter::for_message(&"x".repeat(960), 1000).level,
            CounterLevel::Critical
        );
        assert_eq!(CharacterCounter::for_message(&"x".repeat(1002), 1000).remaining, -2);
    }
}
