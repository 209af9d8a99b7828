use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Size of the time window used to bucket feed queries.
///
/// * `hour` -- splits the day into 24 slices which each go from 00-59 of
///   every hour, for example: 10:00-10:59.
/// * `day` -- covers all URLs from a given date.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    Hour,
    Day,
}

impl Interval {
    pub const ALLOWED: &'static [&'static str] = &["hour", "day"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Hour => "hour",
            Interval::Day => "day",
        }
    }

    /// Length of one slice of this interval.
    pub fn duration(&self) -> chrono::Duration {
        match self {
            Interval::Hour => chrono::Duration::hours(1),
            Interval::Day => chrono::Duration::days(1),
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(Interval::Hour),
            "day" => Ok(Interval::Day),
            other => Err(ValidationError::unsupported("interval", other, Self::ALLOWED)),
        }
    }
}

/// Which of the service's URL feeds to read.
///
/// * `unfiltered` -- all URLs received by the service.
/// * `flagged` -- URLs flagged by detection, access is restricted.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedType {
    Unfiltered,
    Flagged,
}

impl FeedType {
    pub const ALLOWED: &'static [&'static str] = &["unfiltered", "flagged"];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedType::Unfiltered => "unfiltered",
            FeedType::Flagged => "flagged",
        }
    }
}

impl Display for FeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FeedType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unfiltered" => Ok(FeedType::Unfiltered),
            "flagged" => Ok(FeedType::Flagged),
            other => Err(ValidationError::unsupported("feed", other, Self::ALLOWED)),
        }
    }
}

/// Submission-queue scheduling hint for a submitted URL.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Big unfiltered feeds, may take hours and may be filtered out.
    Urlfeed,
    /// Vetted or filtered feeds.
    Low,
    /// Normal submissions.
    Medium,
    /// Highest priority.
    High,
}

impl Priority {
    pub const ALLOWED: &'static [&'static str] = &["urlfeed", "low", "medium", "high"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urlfeed => "urlfeed",
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "urlfeed" => Ok(Priority::Urlfeed),
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(ValidationError::unsupported("priority", other, Self::ALLOWED)),
        }
    }
}

/// Visibility scope of a submitted URL's report.
///
/// * `public` -- publicly available on the site.
/// * `nonpublic` -- shared with other security organisations or researchers.
/// * `private` -- only the submitting key has access.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Public,
    Nonpublic,
    Private,
}

impl AccessLevel {
    pub const ALLOWED: &'static [&'static str] = &["public", "nonpublic", "private"];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Public => "public",
            AccessLevel::Nonpublic => "nonpublic",
            AccessLevel::Private => "private",
        }
    }
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(AccessLevel::Public),
            "nonpublic" => Ok(AccessLevel::Nonpublic),
            "private" => Ok(AccessLevel::Private),
            other => Err(ValidationError::unsupported("access_level", other, Self::ALLOWED)),
        }
    }
}

/// What the search query is matched against.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Substring match against URLs, IP-aware.
    String,
    /// Regexp pattern match within URLs. Use with moderation.
    Regexp,
    /// Match specific IDS alerts.
    IdsAlert,
    /// Match urlquery alerts.
    UrlqueryAlert,
    /// SHA256 of a JavaScript included in report details.
    JsScriptHash,
}

impl SearchType {
    pub const ALLOWED: &'static [&'static str] =
        &["string", "regexp", "ids_alert", "urlquery_alert", "js_script_hash"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::String => "string",
            SearchType::Regexp => "regexp",
            SearchType::IdsAlert => "ids_alert",
            SearchType::UrlqueryAlert => "urlquery_alert",
            SearchType::JsScriptHash => "js_script_hash",
        }
    }
}

impl Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(SearchType::String),
            "regexp" => Ok(SearchType::Regexp),
            "ids_alert" => Ok(SearchType::IdsAlert),
            "urlquery_alert" => Ok(SearchType::UrlqueryAlert),
            "js_script_hash" => Ok(SearchType::JsScriptHash),
            other => Err(ValidationError::unsupported("search_type", other, Self::ALLOWED)),
        }
    }
}

/// Shape of the search result set.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    Reports,
    UrlList,
}

impl ResultType {
    pub const ALLOWED: &'static [&'static str] = &["reports", "url_list"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Reports => "reports",
            ResultType::UrlList => "url_list",
        }
    }
}

impl Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResultType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reports" => Ok(ResultType::Reports),
            "url_list" => Ok(ResultType::UrlList),
            other => Err(ValidationError::unsupported("result_type", other, Self::ALLOWED)),
        }
    }
}

/// Part of a URL that string and regexp searches pattern-match against.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlMatching {
    UrlHost,
    UrlPath,
}

impl UrlMatching {
    pub const ALLOWED: &'static [&'static str] = &["url_host", "url_path"];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrlMatching::UrlHost => "url_host",
            UrlMatching::UrlPath => "url_path",
        }
    }
}

impl Display for UrlMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UrlMatching {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url_host" => Ok(UrlMatching::UrlHost),
            "url_path" => Ok(UrlMatching::UrlPath),
            other => Err(ValidationError::unsupported("url_matching", other, Self::ALLOWED)),
        }
    }
}

/// Confidence level attached to flagged URLs, serialised as its numeric
/// value. Each flagged URL carries a level where the highest generally
/// means a live exploit kit was detected.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Confidence {
    /// IDS alerts triggered.
    Low,
    /// Suspicious URL patterns or alerts detected.
    Medium,
    /// Generally a live exploit kit.
    High,
}

impl Confidence {
    pub const ALLOWED: &'static [&'static str] = &["0", "1", "2"];

    pub fn as_u8(&self) -> u8 {
        match self {
            Confidence::Low => 0,
            Confidence::Medium => 1,
            Confidence::High => 2,
        }
    }
}

impl From<Confidence> for u8 {
    fn from(confidence: Confidence) -> Self {
        confidence.as_u8()
    }
}

impl TryFrom<u8> for Confidence {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Confidence::Low),
            1 => Ok(Confidence::Medium),
            2 => Ok(Confidence::High),
            other => Err(ValidationError::unsupported(
                "confidence",
                &other.to_string(),
                Self::ALLOWED,
            )),
        }
    }
}

impl Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
