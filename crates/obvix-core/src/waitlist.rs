//! Waitlist form state and the submission boundary.
//!
//! The page only records interest; where addresses end up is decided by
//! whichever [`WaitlistBackend`] the front-end plugs in.

use crate::constants::EMAIL_MAX_LEN;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WaitlistError {
    #[error("email address is empty")]
    Empty,
    #[error("email address is too long")]
    TooLong,
    #[error("`{0}` is not a valid email address")]
    Invalid(String),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("already on the waitlist")]
    AlreadySubmitted,
    #[error("waitlist backend failed: {0}")]
    Backend(String),
}

/// A trimmed address with a local part, a single `@` and a dotted domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(input: &str) -> Result<Self, WaitlistError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(WaitlistError::Empty);
        }
        if s.len() > EMAIL_MAX_LEN {
            return Err(WaitlistError::TooLong);
        }
        let invalid = || WaitlistError::Invalid(s.to_string());
        let (local, domain) = s.split_once('@').ok_or_else(invalid)?;
        if local.is_empty()
            || domain.contains('@')
            || s.chars().any(char::is_whitespace)
            || !domain.contains('.')
            || domain.starts_with('.')
            || domain.ends_with('.')
        {
            return Err(invalid());
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where accepted addresses are sent.
pub trait WaitlistBackend {
    fn submit(&mut self, email: &EmailAddress) -> Result<(), WaitlistError>;
}

/// Records the address in the log and nothing else.
#[derive(Debug, Default)]
pub struct LogOnlyBackend;

impl WaitlistBackend for LogOnlyBackend {
    fn submit(&mut self, email: &EmailAddress) -> Result<(), WaitlistError> {
        log::info!("[waitlist] signup {}", email);
        Ok(())
    }
}

/// `loading` is set between begin and finish; `submitted` flips once and
/// stays set for the page session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    loading: bool,
    submitted: bool,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn begin_submit(&mut self, input: &str) -> Result<EmailAddress, WaitlistError> {
        if self.submitted {
            return Err(WaitlistError::AlreadySubmitted);
        }
        if self.loading {
            return Err(WaitlistError::InFlight);
        }
        let email = EmailAddress::parse(input)?;
        self.loading = true;
        Ok(email)
    }

    pub fn finish_submit(&mut self, result: Result<(), WaitlistError>) -> Result<(), WaitlistError> {
        self.loading = false;
        match result {
            Ok(()) => {
                self.submitted = true;
                Ok(())
            }
            Err(e) => {
                log::warn!("[waitlist] submission failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn submit_with<B: WaitlistBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        input: &str,
    ) -> Result<(), WaitlistError> {
        let email = self.begin_submit(input)?;
        let result = backend.submit(&email);
        self.finish_submit(result)
    }
}
