//! Contact form validation and `mailto:` link construction.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page has no backend: a valid submission is turned into a `mailto:` URI
//! and handed to the visitor's mail client. Delivery is out of our hands, so
//! the confirmation text repeats the subject and message for copy/paste.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ContactConfig;

/// `local@domain.tld`, no whitespace, exactly one `@`.
static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
    Ok(re) => Some(re),
    Err(err) => {
        log::error!("email pattern failed to compile: {err}");
        None
    }
});

/// Why a submission was refused. The display text is shown to the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Veuillez remplir tous les champs obligatoires (*)")]
    MissingFields,
    #[error("Veuillez entrer une adresse email valide")]
    InvalidEmail,
}

/// Raw field values as read from the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated, trimmed submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

impl ContactFields {
    /// Trim every field, default an empty subject and check required fields.
    ///
    /// # Errors
    ///
    /// [`ContactError::MissingFields`] if name, email or message is blank;
    /// [`ContactError::InvalidEmail`] if the address is not `x@y.z`-shaped.
    pub fn validate(&self, default_subject: &str) -> Result<ContactMessage, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        let subject = match self.subject.trim() {
            "" => default_subject,
            subject => subject,
        };

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(ContactMessage {
            name: name.to_owned(),
            email: email.to_owned(),
            subject: subject.to_owned(),
            message: message.to_owned(),
        })
    }
}

impl ContactMessage {
    /// Plain-text mail body.
    pub fn body(&self) -> String {
        format!(
            "Bonjour Max,\n\n\
             Je vous contacte depuis votre portfolio.\n\n\
             Nom: {}\n\
             Email: {}\n\n\
             Message:\n{}\n\n\
             ---\nCe message a été envoyé depuis le formulaire de contact de votre portfolio.",
            self.name, self.email, self.message
        )
    }

    /// `mailto:` URI with percent-encoded subject and body.
    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body())
        )
    }

    /// Alert shown after handing off to the mail client.
    pub fn confirmation(&self, recipient: &str) -> String {
        format!(
            "Votre client email devrait s'ouvrir. Si ce n'est pas le cas, envoyez votre message directement à {recipient}\n\n\
             Sujet: {}\n\n\
             Message: {}",
            self.subject, self.message
        )
    }
}

/// Outcome of a submit event, ready for the DOM layer to act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Show this alert and keep the form as is.
    Rejected(ContactError),
    /// Navigate to `mailto`, then show `confirmation` and reset the form.
    Accepted { mailto: String, confirmation: String },
}

/// Validate `fields` and build everything the submit handler needs.
pub fn submit(fields: &ContactFields, config: &ContactConfig) -> Submission {
    match fields.validate(&config.default_subject) {
        Ok(message) => Submission::Accepted {
            mailto: message.mailto(&config.recipient),
            confirmation: message.confirmation(&config.recipient),
        },
        Err(err) => Submission::Rejected(err),
    }
}
