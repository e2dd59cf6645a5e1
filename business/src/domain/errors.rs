/// Remote product service errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    #[error("service.unreachable")]
    Unreachable,
    #[error("service.http_status")]
    HttpStatus(u16),
    #[error("service.invalid_payload")]
    InvalidPayload,
}

impl ServiceError {
    pub fn unreachable() -> Self {
        ServiceError::Unreachable
    }
    pub fn http_status(status: u16) -> Self {
        ServiceError::HttpStatus(status)
    }
    pub fn invalid_payload() -> Self {
        ServiceError::InvalidPayload
    }

    /// Status code reported by the remote service, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::HttpStatus(status) => Some(*status),
            _ => None,
        }
    }
}
