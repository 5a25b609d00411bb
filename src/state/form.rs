//! Contact form validation.
//!
//! DESIGN
//! ======
//! One validator is the single source of truth: blur validation and
//! submission both call [`validate_field`], so the submit path can never
//! accept a value the per-field check would flag (the email syntax check
//! included).

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// The four named contact form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Raw field values as currently entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }
}

/// Per-field inline error messages; `None` renders no error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Subject => self.subject,
            Field::Message => self.message,
        }
    }

    pub fn set(&mut self, field: Field, error: Option<&'static str>) {
        match field {
            Field::Name => self.name = error,
            Field::Email => self.email = error,
            Field::Subject => self.subject = error,
            Field::Message => self.message = error,
        }
    }

    /// Clear one field's error (optimistic clearing on input).
    pub fn clear(&mut self, field: Field) {
        self.set(field, None);
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

/// Validate one field value. All fields are required; the email field
/// additionally must pass [`is_valid_email`].
#[must_use]
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some(REQUIRED_MESSAGE);
    }
    if field == Field::Email && !is_valid_email(value) {
        return Some(INVALID_EMAIL_MESSAGE);
    }
    None
}

/// Validate every field with the same per-field rules used on blur.
#[must_use]
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
        errors.set(field, validate_field(field, form.value(field)));
    }
    errors
}

/// `local@domain.tld`-shaped check: no embedded whitespace, exactly one
/// `@`, and at least one `.` after the `@` with non-empty segments on
/// both sides.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
