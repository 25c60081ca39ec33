use thiserror::Error;

const ACCEPTED_EMAIL: &str = "rafif.faisal@pwc.com";
const ACCEPTED_PASSWORD: &str = "010202Feb";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthError {
    #[error("Incorrect email or password. Please try again.")]
    InvalidCredentials,
}

/// The single compiled-in credential pair guarding the card.
///
/// Not a security boundary: there is no hashing, rate limiting or lockout,
/// and every attempt is judged on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CredentialGate;

impl CredentialGate {
    /// Check an email/password pair.
    ///
    /// The email is compared case-insensitively, the password exactly.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when either part does not match.
    pub fn check(self, email: &str, password: &str) -> Result<(), AuthError> {
        if email.to_lowercase() == ACCEPTED_EMAIL && password == ACCEPTED_PASSWORD {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
