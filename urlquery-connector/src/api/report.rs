use chrono::{DateTime, Utc};
use serde::Serialize;
use urlquery_model::deserialization::se_datetime_utc_as_epoch_s;
use urlquery_model::error::ValidationError;
use urlquery_model::report::{BasicReport, ReportFlags, ReportList};

use crate::protocol::http::rest::request::{is_false, ApiRequest};
use crate::time::parse_timestamp;

pub const DEFAULT_REPORT_LIST_LIMIT: u32 = 50;

/// `report`: extract the data for one report. How much is included depends
/// on the flag bitmask and the permissions of the API key.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ReportRequest {
    report_id: String,
    flag: ReportFlags,
    recent_limit: u32,
    #[serde(skip_serializing_if = "is_false")]
    include_screenshot: bool,
    #[serde(skip_serializing_if = "is_false")]
    include_domain_graph: bool,
}

impl ReportRequest {
    /// `flag` combines the [`ReportFlags`] bits; any value above 15 is
    /// rejected before the request is built.
    pub fn new(report_id: impl Into<String>, flag: u8) -> Result<Self, ValidationError> {
        Ok(Self {
            report_id: report_id.into(),
            flag: ReportFlags::try_from(flag)?,
            recent_limit: 0,
            include_screenshot: false,
            include_domain_graph: false,
        })
    }

    /// Number of recent reports from the same ASN / IP / domain to include.
    pub fn recent_limit(mut self, recent_limit: u32) -> Self {
        self.recent_limit = recent_limit;
        self
    }

    /// Include a base64 screenshot (with its mime type) in the report.
    pub fn include_screenshot(mut self) -> Self {
        self.include_screenshot = true;
        self
    }

    /// Include a base64 domain graph (with its mime type) in the report.
    pub fn include_domain_graph(mut self) -> Self {
        self.include_domain_graph = true;
        self
    }
}

impl ApiRequest for ReportRequest {
    type Response = BasicReport;
    const METHOD: &'static str = "report";
}

/// `report_list`: reports created from a given timestamp, along with basic
/// information like alert counts and the submitted URL.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ReportListRequest {
    #[serde(serialize_with = "se_datetime_utc_as_epoch_s")]
    timestamp: DateTime<Utc>,
    limit: u32,
}

impl ReportListRequest {
    /// An absent timestamp lists the most recent reports; an absent limit
    /// defaults to 50.
    pub fn new(timestamp: Option<&str>, limit: Option<u32>) -> Result<Self, ValidationError> {
        Self::with_now(timestamp, limit, Utc::now())
    }

    pub(crate) fn with_now(
        timestamp: Option<&str>,
        limit: Option<u32>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let timestamp = match timestamp {
            Some(input) => parse_timestamp(input)?,
            None => now,
        };

        Ok(Self {
            timestamp,
            limit: limit.unwrap_or(DEFAULT_REPORT_LIST_LIMIT),
        })
    }
}

impl ApiRequest for ReportListRequest {
    type Response = ReportList;
    const METHOD: &'static str = "report_list";
}
