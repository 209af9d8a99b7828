use std::time::Duration;

use tracing::debug;
use url::Url;
use urlquery_model::error::ClientError;

use crate::protocol::http::parser::HttpParser;

use super::request::{ApiRequest, Directives, Envelope};

pub const DEFAULT_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Low-level client executing [`ApiRequest`]s against a single endpoint.
///
/// Every procedure travels the same way: the request is wrapped in an
/// [`Envelope`], serialised to JSON and POSTed to the configured Url; the
/// response body is handed to the configured [`HttpParser`]. One-shot
/// semantics, no retries.
#[derive(Debug, Clone)]
pub struct RestClient<Parser> {
    http_client: reqwest::Client,
    base_url: Url,
    parser: Parser,
}

impl<Parser> RestClient<Parser>
where
    Parser: HttpParser,
{
    pub fn new(base_url: Url, parser: Parser) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            parser,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute the provided [`ApiRequest`] with the cross-cutting
    /// [`Directives`] attached, returning the parsed response.
    pub async fn execute<Request>(
        &self,
        request: Request,
        directives: Directives<'_>,
    ) -> Result<Request::Response, Parser::OutputError>
    where
        Request: ApiRequest,
    {
        let envelope = Envelope::new(&request, directives);
        let body = serde_json::to_string(&envelope)
            .map_err(|error| Parser::OutputError::from(ClientError::SerializingJson(error)))?;

        debug!(
            method = Request::METHOD,
            url = %self.base_url,
            gzip = envelope.gzip.unwrap_or(false),
            "dispatching urlquery request"
        );

        let response = self
            .http_client
            .post(self.base_url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|error| Parser::OutputError::from(ClientError::from(error)))?;

        let status = response.status();
        let payload = response
            .bytes()
            .await
            .map_err(|error| Parser::OutputError::from(ClientError::from(error)))?;

        debug!(
            method = Request::METHOD,
            %status,
            payload_len = payload.len(),
            "received urlquery response"
        );

        self.parser.parse::<Request::Response>(status, &payload)
    }
}
