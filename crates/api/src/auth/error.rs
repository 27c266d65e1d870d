use axum::http::StatusCode;

/// Why a request was refused before reaching its handler.
///
/// Messages are safe to return to clients: none of them echo token contents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization header is expected")]
    MissingHeader,

    #[error("Authorization header must be in the form 'Bearer <token>'")]
    MalformedHeader,

    #[error("Unable to parse or verify authentication token")]
    InvalidToken,

    #[error("Incorrect claims. Please check the audience and issuer")]
    InvalidClaims,

    #[error("Token expired")]
    TokenExpired,

    #[error("Permissions not included in token")]
    PermissionsMissing,

    #[error("Permission '{required}' is required")]
    PermissionDenied { required: &'static str },
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::PermissionsMissing | AuthError::PermissionDenied { .. } => {
                StatusCode::FORBIDDEN
            }
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// Machine-readable code placed in the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "MISSING_HEADER",
            AuthError::MalformedHeader => "MALFORMED_HEADER",
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::InvalidClaims => "INVALID_CLAIMS",
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::PermissionsMissing => "PERMISSIONS_MISSING",
            AuthError::PermissionDenied { .. } => "PERMISSION_DENIED",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidIssuer
            | ErrorKind::InvalidAudience
            | ErrorKind::InvalidSubject
            | ErrorKind::ImmatureSignature
            | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims,
            _ => AuthError::InvalidToken,
        }
    }
}
