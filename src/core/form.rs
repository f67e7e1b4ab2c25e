use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// A contact message that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// All three fields must be non-empty; content is not otherwise checked.
pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<ContactMessage, FormError> {
    for (field, value) in [("name", name), ("email", email), ("message", message)] {
        if value.is_empty() {
            return Err(FormError::MissingField(field));
        }
    }
    Ok(ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

/// Whether a floating label stays raised after its input loses focus.
#[inline]
pub fn label_stays_raised(value: &str) -> bool {
    !value.is_empty()
}
