use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Contact,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContactField::Name => "name",
            ContactField::Contact => "email or phone",
            ContactField::Message => "message",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("Please fill in your {0}")]
    MissingField(ContactField),
}

/// What the form currently holds, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub contact: String,
    pub message: String,
}

/// A draft whose required fields are all present, trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub contact: String,
    pub message: String,
}

impl ContactDraft {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Contact => self.contact = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<ContactSubmission, ContactFormError> {
        let required = |field: ContactField, value: &str| {
            let value = value.trim();
            if value.is_empty() {
                Err(ContactFormError::MissingField(field))
            } else {
                Ok(value.to_string())
            }
        };

        Ok(ContactSubmission {
            name: required(ContactField::Name, &self.name)?,
            contact: required(ContactField::Contact, &self.contact)?,
            message: required(ContactField::Message, &self.message)?,
        })
    }

    /// Validates and hands the submission to `deliver` exactly once.
    /// Nothing is delivered when a field is missing.
    pub fn submit<F>(&self, deliver: F) -> Result<(), ContactFormError>
    where
        F: FnOnce(ContactSubmission),
    {
        let submission = self.validate()?;
        deliver(submission);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Asha".to_string(),
            contact: "+91 98000 00000".to_string(),
            message: "Parcel from Pune to Mumbai tomorrow".to_string(),
        }
    }

    #[test]
    fn blocks_submission_when_any_field_is_empty() {
        for field in [ContactField::Name, ContactField::Contact, ContactField::Message] {
            let mut draft = filled();
            draft.set(field, "   ".to_string());
            let mut delivered = Vec::new();
            let result = draft.submit(|s| delivered.push(s));
            assert_eq!(result, Err(ContactFormError::MissingField(field)));
            assert!(delivered.is_empty());
        }
    }

    #[test]
    fn complete_draft_delivers_exactly_once() {
        let mut delivered = Vec::new();
        filled().submit(|s| delivered.push(s)).unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].name, "Asha");
    }

    #[test]
    fn reports_first_missing_field() {
        let draft = ContactDraft::default();
        assert_eq!(
            draft.validate(),
            Err(ContactFormError::MissingField(ContactField::Name))
        );
        assert_eq!(
            ContactFormError::MissingField(ContactField::Contact).to_string(),
            "Please fill in your email or phone"
        );
    }

    #[test]
    fn submission_is_trimmed() {
        let mut draft = filled();
        draft.set(ContactField::Name, "  Asha  ".to_string());
        assert_eq!(draft.validate().unwrap().name, "Asha");
    }
}
