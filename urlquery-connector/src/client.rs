use url::Url;
use urlquery_model::enums::{
    AccessLevel, Confidence, FeedType, Interval, Priority, ResultType, SearchType, UrlMatching,
};
use urlquery_model::error::ClientError;
use urlquery_model::feed::UrlFeed;
use urlquery_model::report::{BasicReport, ReportList};
use urlquery_model::submission::QueueStatus;

use crate::api::feed::{FlaggedUrlsRequest, UrlFeedRequest};
use crate::api::queue::{QueueStatusRequest, UserAgentListRequest};
use crate::api::report::{ReportListRequest, ReportRequest};
use crate::api::search::{ReputationRequest, SearchRequest};
use crate::api::submit::{MassSubmitRequest, SubmitRequest};
use crate::protocol::http::parser::UrlQueryParser;
use crate::protocol::http::rest::client::RestClient;
use crate::protocol::http::rest::request::{ApiRequest, Directives};

pub const DEFAULT_BASE_URL: &str = "https://uqapi.net/v3/json";

/// Per-call overrides for the cross-cutting request directives. The
/// defaults defer to the client configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallOptions<'a> {
    /// Ask the service to gzip the response body for this call.
    pub gzip: bool,
    /// API key overriding the client default for this call.
    pub apikey: Option<&'a str>,
}

/// Client for the urlquery JSON API.
///
/// Most procedures are usable without a key but only return public data;
/// non-public or private reports and the urlfeed need one. Configuration
/// is immutable after construction, so one client can be shared freely
/// across tasks.
#[derive(Debug, Clone)]
pub struct UrlQuery {
    rest: RestClient<UrlQueryParser>,
    apikey: Option<String>,
    gzip_default: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UrlQueryBuilder {
    base_url: Option<String>,
    apikey: Option<String>,
    gzip_default: bool,
}

impl UrlQueryBuilder {
    /// Endpoint to POST requests to. Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// API key attached to every call unless overridden per call.
    pub fn apikey(mut self, apikey: impl Into<String>) -> Self {
        self.apikey = Some(apikey.into());
        self
    }

    /// Ask the service to gzip every response body.
    pub fn gzip_default(mut self, gzip_default: bool) -> Self {
        self.gzip_default = gzip_default;
        self
    }

    pub fn build(self) -> Result<UrlQuery, ClientError> {
        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        Ok(UrlQuery {
            rest: RestClient::new(base_url, UrlQueryParser)?,
            apikey: self.apikey,
            gzip_default: self.gzip_default,
        })
    }
}

impl UrlQuery {
    pub fn builder() -> UrlQueryBuilder {
        UrlQueryBuilder::default()
    }

    /// Client against the default endpoint, without a key.
    pub fn new() -> Result<Self, ClientError> {
        Self::builder().build()
    }

    pub fn base_url(&self) -> &Url {
        self.rest.base_url()
    }

    /// Merge the per-call overrides with the client defaults. The call
    /// key wins over the configured one; an empty key is omitted from the
    /// wire entirely.
    fn directives<'a>(&'a self, options: CallOptions<'a>) -> Directives<'a> {
        Directives {
            gzip: self.gzip_default || options.gzip,
            key: options
                .apikey
                .or(self.apikey.as_deref())
                .filter(|key| !key.is_empty()),
        }
    }

    /// Execute a pre-built [`ApiRequest`]. The procedure methods below are
    /// shorthands for the common parameter sets; requests carrying the
    /// rarer switches can be built directly and run through this.
    pub async fn execute<Request>(
        &self,
        request: Request,
        options: CallOptions<'_>,
    ) -> Result<Request::Response, ClientError>
    where
        Request: ApiRequest,
    {
        self.rest.execute(request, self.directives(options)).await
    }

    /// One slice of the main URL feed. Needs a key; the feed will not
    /// contain URLs submitted with that same key.
    pub async fn urlfeed(
        &self,
        feed: FeedType,
        interval: Interval,
        timestamp: Option<&str>,
        options: CallOptions<'_>,
    ) -> Result<UrlFeed, ClientError> {
        let request = UrlFeedRequest::new(feed, interval, timestamp)?;
        self.execute(request, options).await
    }

    /// Search the report database. `from`/`to` default to the last 30
    /// days.
    #[allow(clippy::too_many_arguments)]
    pub async fn search(
        &self,
        q: impl Into<String>,
        search_type: SearchType,
        result_type: ResultType,
        url_matching: UrlMatching,
        from: Option<&str>,
        to: Option<&str>,
        options: CallOptions<'_>,
    ) -> Result<serde_json::Value, ClientError> {
        let request =
            SearchRequest::new(q, search_type, result_type, url_matching, from, to)?;
        self.execute(request, options).await
    }

    /// Queue a URL for analysis.
    pub async fn submit(
        &self,
        url: impl Into<String>,
        priority: Priority,
        access_level: AccessLevel,
        options: CallOptions<'_>,
    ) -> Result<QueueStatus, ClientError> {
        let request = SubmitRequest::new(url, priority, access_level);
        self.execute(request, options).await
    }

    /// Queue a batch of URLs sharing one set of settings.
    pub async fn mass_submit(
        &self,
        urls: Vec<String>,
        priority: Priority,
        access_level: AccessLevel,
        options: CallOptions<'_>,
    ) -> Result<Vec<QueueStatus>, ClientError> {
        let request = MassSubmitRequest::new(urls, priority, access_level);
        self.execute(request, options).await
    }

    /// Extract the data for one report. `flag` is the report-section
    /// bitmask; values above 15 fail validation without touching the
    /// network.
    pub async fn report(
        &self,
        report_id: impl Into<String>,
        flag: u8,
        recent_limit: u32,
        options: CallOptions<'_>,
    ) -> Result<BasicReport, ClientError> {
        let request = ReportRequest::new(report_id, flag)?.recent_limit(recent_limit);
        self.execute(request, options).await
    }

    /// Reports created from the given timestamp, most recent first.
    pub async fn report_list(
        &self,
        timestamp: Option<&str>,
        limit: Option<u32>,
        options: CallOptions<'_>,
    ) -> Result<ReportList, ClientError> {
        let request = ReportListRequest::new(timestamp, limit)?;
        self.execute(request, options).await
    }

    /// Poll the state of a queued submission.
    pub async fn queue_status(
        &self,
        queue_id: impl Into<String>,
        options: CallOptions<'_>,
    ) -> Result<QueueStatus, ClientError> {
        let request = QueueStatusRequest::new(queue_id);
        self.execute(request, options).await
    }

    /// The accepted user agent strings.
    pub async fn user_agent_list(
        &self,
        options: CallOptions<'_>,
    ) -> Result<Vec<String>, ClientError> {
        self.execute(UserAgentListRequest::default(), options).await
    }

    /// Look a domain or IP up in the reputation list of URLs detected
    /// over the last month.
    pub async fn reputation(
        &self,
        q: impl Into<String>,
        options: CallOptions<'_>,
    ) -> Result<serde_json::Value, ClientError> {
        self.execute(ReputationRequest::new(q), options).await
    }

    /// The flagged URL list, filtered by confidence level.
    pub async fn flagged_urls(
        &self,
        interval: Interval,
        timestamp: Option<&str>,
        confidence: Confidence,
        options: CallOptions<'_>,
    ) -> Result<serde_json::Value, ClientError> {
        let request = FlaggedUrlsRequest::new(interval, timestamp, confidence)?;
        self.execute(request, options).await
    }
}
