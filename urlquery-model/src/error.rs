use reqwest::StatusCode;
use thiserror::Error;

/// Local parameter error raised while shaping a request. A request that
/// failed validation is never handed to the transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{param} can only be in {allowed}")]
    Unsupported {
        param: &'static str,
        value: String,
        allowed: String,
    },

    #[error("unable to convert time to timestamp: {input}")]
    Timestamp { input: String },

    #[error("flag can only be <= 15")]
    FlagOutOfRange { flag: u8 },
}

impl ValidationError {
    pub fn unsupported(param: &'static str, value: &str, allowed: &[&str]) -> Self {
        ValidationError::Unsupported {
            param,
            value: value.to_owned(),
            allowed: allowed.join(", "),
        }
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serializing JSON error: {0}")]
    SerializingJson(#[source] serde_json::Error),

    #[error("deserializing JSON error: {error} for payload: {payload}")]
    DeserializingJson { error: String, payload: String },

    #[error("error parsing Url: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("HTTP request timed out")]
    HttpTimeout(reqwest::Error),

    /// REST http response error
    #[error("HTTP response (status={0}) error: {1}")]
    HttpResponse(StatusCode, String),

    /// Error payload returned by the service itself.
    #[error("urlquery API error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        match error {
            error if error.is_timeout() => ClientError::HttpTimeout(error),
            error => ClientError::Http(error),
        }
    }
}
