use std::error::Error;

#[derive(Debug)]
pub enum InferenceClientError {
    /// The server answered with a non-success status code.
    RequestFailure(u16),
    /// Transport, body read or decode failure, passed through as-is.
    Unclassified(Box<dyn Error + Send + Sync>),
}

impl InferenceClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            InferenceClientError::RequestFailure(status) => Some(*status),
            InferenceClientError::Unclassified(_) => None,
        }
    }
}

impl std::fmt::Display for InferenceClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InferenceClientError::RequestFailure(status) => write!(f, "HTTP error! status: {status}"),
            InferenceClientError::Unclassified(e) => write!(f, "{e}"),
        }
    }
}

impl Error for InferenceClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InferenceClientError::RequestFailure(_) => None,
            InferenceClientError::Unclassified(e) => Some(&**e),
        }
    }
}

impl From<reqwest::Error> for InferenceClientError {
    fn from(err: reqwest::Error) -> Self { InferenceClientError::Unclassified(Box::new(err)) }
}

impl From<serde_json::Error> for InferenceClientError {
    fn from(err: serde_json::Error) -> Self { InferenceClientError::Unclassified(Box::new(err)) }
}
