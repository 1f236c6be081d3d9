use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::toast::Toast;

/// Identifies the offending input in [`FormError::MissingField`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation failures for the contact form.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("missing required field: {0}")]
    MissingField(Field),
    #[error("invalid email address")]
    InvalidEmail,
}

impl FormError {
    /// The user-facing toast for this failure.
    pub fn toast(&self) -> Toast {
        match self {
            Self::MissingField(_) => Toast::error("Please fill in all fields"),
            Self::InvalidEmail => Toast::error("Please enter a valid email address"),
        }
    }
}

/// Escapes markup-significant characters so user-supplied text can be
/// inserted into rendered output, and trims surrounding whitespace.
///
/// `& < > " '` are replaced with their character references; the output
/// contains none of them literally.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.trim().chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Structural email check: local part and domain split by a single `@`, a
/// `.` somewhere inside the domain, and no whitespace anywhere.
fn email_looks_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .split_once('.')
        .is_some_and(|(host, rest)| !host.is_empty() && !rest.is_empty())
}

/// Raw contact-form input as captured from the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated form whose fields have passed [`sanitize`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SanitizedForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitizes every field, then checks them in a fixed order: the first
    /// field left empty after trimming wins, then the email shape.
    pub fn validate(&self) -> Result<SanitizedForm, FormError> {
        let name = sanitize(&self.name);
        let email = sanitize(&self.email);
        let subject = sanitize(&self.subject);
        let message = sanitize(&self.message);

        for (field, value) in [
            (Field::Name, &name),
            (Field::Email, &email),
            (Field::Subject, &subject),
            (Field::Message, &message),
        ] {
            if value.is_empty() {
                return Err(FormError::MissingField(field));
            }
        }

        if !email_looks_valid(&email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(SanitizedForm {
            name,
            email,
            subject,
            message,
        })
    }

    /// Simulated submission; no network call is made.
    ///
    /// Success clears the form and yields the success toast; failure keeps
    /// the input in place for correction.
    pub fn submit(&mut self) -> Result<Toast, FormError> {
        self.validate()?;
        *self = Self::default();
        Ok(Toast::success("Message sent successfully!"))
    }
}
