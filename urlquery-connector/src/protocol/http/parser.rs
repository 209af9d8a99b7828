use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use urlquery_model::error::ClientError;

/// Interprets HTTP response bodies for the API being interacted with.
///
/// Bodies are parsed in two stages: the procedure's typed `Response` first,
/// then the service's own error payload. Anything that matches neither is
/// surfaced as a deserialisation error carrying the offending payload.
pub trait HttpParser {
    type ApiError: DeserializeOwned;
    type OutputError: From<ClientError>;

    /// Map the service's deserialised error payload to the output error.
    fn parse_api_error(&self, status: StatusCode, api_error: Self::ApiError) -> Self::OutputError;

    fn parse<Response>(
        &self,
        status: StatusCode,
        payload: &[u8],
    ) -> Result<Response, Self::OutputError>
    where
        Response: DeserializeOwned,
    {
        if status.is_success() {
            let parse_error = match serde_json::from_slice::<Response>(payload) {
                Ok(response) => return Ok(response),
                Err(error) => error,
            };

            // A 2xx body that is not the typed response is usually the
            // service reporting a problem inside a successful transport
            // exchange, eg. insufficient permissions for the key.
            if let Ok(api_error) = serde_json::from_slice::<Self::ApiError>(payload) {
                return Err(self.parse_api_error(status, api_error));
            }

            let payload = String::from_utf8_lossy(payload).into_owned();
            debug!(%status, %payload, "response body matched neither Response nor ApiError");
            Err(Self::OutputError::from(ClientError::DeserializingJson {
                error: parse_error.to_string(),
                payload,
            }))
        } else {
            if let Ok(api_error) = serde_json::from_slice::<Self::ApiError>(payload) {
                return Err(self.parse_api_error(status, api_error));
            }

            Err(Self::OutputError::from(ClientError::HttpResponse(
                status,
                String::from_utf8_lossy(payload).into_owned(),
            )))
        }
    }
}

/// Error payload shape the urlquery service answers with.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct RemoteError {
    pub error: String,
}

/// Standard [`HttpParser`] for the urlquery JSON API.
#[derive(Debug, Copy, Clone, Default)]
pub struct UrlQueryParser;

impl HttpParser for UrlQueryParser {
    type ApiError = RemoteError;
    type OutputError = ClientError;

    fn parse_api_error(&self, status: StatusCode, api_error: Self::ApiError) -> Self::OutputError {
        if status.is_success() {
            ClientError::Api(api_error.error)
        } else {
            ClientError::HttpResponse(status, api_error.error)
        }
    }
}
