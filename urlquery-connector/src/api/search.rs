use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use urlquery_model::deserialization::se_datetime_utc_as_epoch_s;
use urlquery_model::enums::{ResultType, SearchType, UrlMatching};
use urlquery_model::error::ValidationError;

use crate::protocol::http::rest::request::{is_false, ApiRequest};
use crate::time::parse_timestamp;

/// Default width of the search window when no lower bound is given.
const DEFAULT_SEARCH_WINDOW_DAYS: i64 = 30;

/// `search`: query the report database.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct SearchRequest {
    q: String,
    search_type: SearchType,
    result_type: ResultType,
    url_matching: UrlMatching,
    #[serde(serialize_with = "se_datetime_utc_as_epoch_s")]
    from: DateTime<Utc>,
    #[serde(serialize_with = "se_datetime_utc_as_epoch_s")]
    to: DateTime<Utc>,
    #[serde(skip_serializing_if = "is_false")]
    deep: bool,
}

impl SearchRequest {
    /// The upper bound defaults to the current time; the lower bound
    /// defaults to 30 days before the upper bound.
    pub fn new(
        q: impl Into<String>,
        search_type: SearchType,
        result_type: ResultType,
        url_matching: UrlMatching,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Self::with_now(q, search_type, result_type, url_matching, from, to, Utc::now())
    }

    pub(crate) fn with_now(
        q: impl Into<String>,
        search_type: SearchType,
        result_type: ResultType,
        url_matching: UrlMatching,
        from: Option<&str>,
        to: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let to = match to {
            Some(input) => parse_timestamp(input)?,
            None => now,
        };
        let from = match from {
            Some(input) => parse_timestamp(input)?,
            None => to - Duration::days(DEFAULT_SEARCH_WINDOW_DAYS),
        };

        Ok(Self {
            q: q.into(),
            search_type,
            result_type,
            url_matching,
            from,
            to,
            deep: false,
        })
    }

    /// Search all URLs, not just submitted ones. Resource intensive.
    pub fn deep(mut self) -> Self {
        self.deep = true;
        self
    }
}

impl ApiRequest for SearchRequest {
    type Response = serde_json::Value;
    const METHOD: &'static str = "search";
}

/// `reputation`: look a domain or IP up in the reputation list of URLs
/// detected over the last month.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ReputationRequest {
    q: String,
}

impl ReputationRequest {
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: q.into() }
    }
}

impl ApiRequest for ReputationRequest {
    type Response = serde_json::Value;
    const METHOD: &'static str = "reputation";
}
