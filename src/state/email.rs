use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// The HTML "valid e-mail address" production, i.e. what `<input type="email">`
/// accepts.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Please enter your email address.")]
    Empty,
    #[error("That doesn't look like an email address.")]
    Invalid,
}

pub fn validate(raw: &str) -> Result<String, EmailError> {
    let address = raw.trim();
    if address.is_empty() {
        return Err(EmailError::Empty);
    }
    if !EMAIL_PATTERN.is_match(address) {
        return Err(EmailError::Invalid);
    }
    Ok(address.to_string())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    /// Validated and handed to the waitlist; input is locked.
    Submitting,
    /// Confirmation replaces the form entirely.
    Confirmed,
    /// Back to editing with a message to show under the field.
    Rejected(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailForm {
    value: String,
    status: FormStatus,
}

impl Default for EmailForm {
    fn default() -> Self {
        EmailForm { value: String::new(), status: FormStatus::Editing }
    }
}

impl EmailForm {
    pub fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == FormStatus::Confirmed
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn message(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Rejected(message) => Some(message),
            _ => None,
        }
    }

    pub fn input(&mut self, value: String) {
        if matches!(self.status, FormStatus::Submitting | FormStatus::Confirmed) {
            return;
        }
        self.value = value;
        self.status = FormStatus::Editing;
    }

    /// Validates the current value. On success the form locks and the
    /// address to deliver is returned. An empty field changes nothing.
    pub fn submit(&mut self) -> Option<String> {
        if matches!(self.status, FormStatus::Submitting | FormStatus::Confirmed) {
            return None;
        }
        match validate(&self.value) {
            Ok(address) => {
                self.status = FormStatus::Submitting;
                Some(address)
            }
            Err(EmailError::Empty) => None,
            Err(err) => {
                self.status = FormStatus::Rejected(err.to_string());
                None
            }
        }
    }

    /// Applies the delivery outcome of a previous `submit`.
    pub fn resolve<E: std::fmt::Display>(&mut self, outcome: Result<(), E>) {
        if !self.is_submitting() {
            return;
        }
        self.status = match outcome {
            Ok(()) => FormStatus::Confirmed,
            Err(err) => FormStatus::Rejected(format!("We couldn't add you just now ({}). Please try again.", err)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert_eq!(validate("  ada@example.com "), Ok("ada@example.com".to_string()));
        assert!(validate("first.last+tag@sub.example.co").is_ok());
        assert!(validate("user@localhost").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert_eq!(validate(""), Err(EmailError::Empty));
        assert_eq!(validate("   "), Err(EmailError::Empty));
        for bad in ["plainaddress", "@example.com", "a@", "a@-bad.com", "a b@example.com", "a@exa mple.com", "a@b..com"] {
            assert_eq!(validate(bad), Err(EmailError::Invalid), "{bad} should be rejected");
        }
    }

    #[test]
    fn empty_submission_does_nothing() {
        let mut form = EmailForm::default();
        assert_eq!(form.submit(), None);
        assert_eq!(form.status(), &FormStatus::Editing);
        assert!(!form.is_confirmed());
    }

    #[test]
    fn valid_submission_confirms_and_replaces_input() {
        let mut form = EmailForm::default();
        form.input("ada@example.com".into());
        assert_eq!(form.submit(), Some("ada@example.com".to_string()));
        assert!(form.is_submitting());

        form.resolve::<EmailError>(Ok(()));
        assert!(form.is_confirmed());

        // Once confirmed the field is gone; nothing can be typed or resubmitted.
        form.input("other@example.com".into());
        assert_eq!(form.value(), "ada@example.com");
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn invalid_submission_explains_and_keeps_value() {
        let mut form = EmailForm::default();
        form.input("not-an-email".into());
        assert_eq!(form.submit(), None);
        assert_eq!(form.message(), Some("That doesn't look like an email address."));
        assert_eq!(form.value(), "not-an-email");

        form.input("fixed@example.com".into());
        assert_eq!(form.message(), None);
    }

    #[test]
    fn failed_delivery_returns_to_editing() {
        let mut form = EmailForm::default();
        form.input("ada@example.com".into());
        form.submit();
        form.resolve(Err("status 503"));

        assert!(!form.is_confirmed());
        assert!(form.message().unwrap().contains("status 503"));
        assert_eq!(form.submit(), Some("ada@example.com".to_string()));
    }

    #[test]
    fn stray_outcomes_are_ignored() {
        let mut form = EmailForm::default();
        form.resolve::<EmailError>(Ok(()));
        assert_eq!(form.status(), &FormStatus::Editing);
    }
}
