use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum AuthenticationError {
    #[error("Authorization header missing.")]
    MissingCredential,

    #[error("Invalid authentication scheme. Must be 'Bearer <token>'.")]
    MalformedCredential,

    #[error("Authentication scheme must be Bearer.")]
    UnsupportedScheme,

    #[error("Invalid or expired authentication token.")]
    InvalidOrExpiredToken,

    #[error("Server could not process token verification.")]
    VerificationUnavailable,
}
