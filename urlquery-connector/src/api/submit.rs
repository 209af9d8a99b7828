use serde::Serialize;
use urlquery_model::enums::{AccessLevel, Priority};
use urlquery_model::submission::QueueStatus;

use crate::protocol::http::rest::request::{is_false, ApiRequest};

/// `submit`: queue a URL for analysis.
///
/// Setting an invalid user agent results in a random one getting selected
/// by the service; see `user_agent_list` for the accepted strings.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct SubmitRequest {
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    useragent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    referer: Option<String>,
    priority: Priority,
    access_level: AccessLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    submit_vt: bool,
    #[serde(skip_serializing_if = "is_false")]
    save_only_alerted: bool,
}

impl SubmitRequest {
    pub fn new(url: impl Into<String>, priority: Priority, access_level: AccessLevel) -> Self {
        Self {
            url: url.into(),
            useragent: None,
            referer: None,
            priority,
            access_level,
            callback_url: None,
            submit_vt: false,
            save_only_alerted: false,
        }
    }

    /// User-Agent applied while visiting the URL.
    pub fn useragent(mut self, useragent: impl Into<String>) -> Self {
        self.useragent = Some(useragent.into());
        self
    }

    /// Referer applied to the first visited URL.
    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    /// Results are POSTed back to this URL once processing has completed.
    /// Requires an API key.
    pub fn callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    /// Submit unknown files to VirusTotal for analysis.
    pub fn submit_vt(mut self) -> Self {
        self.submit_vt = true;
        self
    }

    /// Keep only reports which contain alerts. Meant for mass testing of
    /// unvetted URLs.
    pub fn save_only_alerted(mut self) -> Self {
        self.save_only_alerted = true;
        self
    }
}

impl ApiRequest for SubmitRequest {
    type Response = QueueStatus;
    const METHOD: &'static str = "submit";
}

/// `mass_submit`: queue a batch of URLs sharing one set of settings.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct MassSubmitRequest {
    urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    useragent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    referer: Option<String>,
    priority: Priority,
    access_level: AccessLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<String>,
}

impl MassSubmitRequest {
    pub fn new(
        urls: Vec<String>,
        priority: Priority,
        access_level: AccessLevel,
    ) -> Self {
        Self {
            urls,
            useragent: None,
            referer: None,
            priority,
            access_level,
            callback_url: None,
        }
    }

    pub fn useragent(mut self, useragent: impl Into<String>) -> Self {
        self.useragent = Some(useragent.into());
        self
    }

    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    pub fn callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }
}

impl ApiRequest for MassSubmitRequest {
    type Response = Vec<QueueStatus>;
    const METHOD: &'static str = "mass_submit";
}
