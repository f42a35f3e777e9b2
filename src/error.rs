use crate::response::Response;
use thiserror::Error;

/// Result type alias for paygate operations
pub type Result<T> = std::result::Result<T, PaygateError>;

/// Comprehensive error types for gateway operations
#[derive(Debug, Error)]
pub enum PaygateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("XML decode error: {0}")]
    Decode(#[from] quick_xml::de::DeError),

    #[error("XML write error: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    #[error("Response body is not valid UTF-8: {0}")]
    BodyNotUtf8(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    InvalidResponse(Box<InvalidResponse>),
}

impl PaygateError {
    /// Create a new invalid response error, taking ownership of the
    /// response that could not be interpreted
    pub fn invalid_response(response: Response) -> Self {
        Self::InvalidResponse(Box::new(InvalidResponse { response }))
    }

    /// Capability check: does this error carry a gateway status code?
    pub fn as_api_error(&self) -> Option<&dyn ApiError> {
        match self {
            Self::Gateway(e) => Some(e),
            _ => None,
        }
    }

    /// Capability check: does this error retain the originating response?
    pub fn as_response_error(&self) -> Option<&dyn ResponseError> {
        match self {
            Self::InvalidResponse(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// Errors that carry the HTTP status code of the exchange that produced them
pub trait ApiError: std::error::Error {
    fn status_code(&self) -> u16;
}

/// Errors that retain the response that could not be interpreted
pub trait ResponseError: std::error::Error {
    fn response(&self) -> &Response;
}

/// Business error reported by the gateway, or the status-text fallback
/// for a non-2xx exchange with no structured payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
    pub status: u16,
}

impl GatewayError {
    pub fn new<S: Into<String>>(message: S, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

impl ApiError for GatewayError {
    fn status_code(&self) -> u16 {
        self.status
    }
}

/// Classification failure: the response matched none of the expected
/// shapes. Keeps the offending response around for diagnostics.
#[derive(Debug, Error)]
#[error("gateway returned invalid response ({})", .response.status())]
pub struct InvalidResponse {
    pub(crate) response: Response,
}

impl ResponseError for InvalidResponse {
    fn response(&self) -> &Response {
        &self.response
    }
}
