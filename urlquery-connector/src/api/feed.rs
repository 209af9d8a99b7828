use chrono::{DateTime, Utc};
use serde::Serialize;
use urlquery_model::deserialization::se_datetime_utc_as_epoch_s;
use urlquery_model::enums::{Confidence, FeedType, Interval};
use urlquery_model::error::ValidationError;
use urlquery_model::feed::UrlFeed;

use crate::protocol::http::rest::request::ApiRequest;
use crate::time::parse_timestamp;

/// `urlfeed`: one slice of the main URL feed.
///
/// Any timestamp within a slice selects that slice; boundaries are
/// half-open, so an instant exactly on a boundary belongs to the slice it
/// starts. The timestamp is forwarded unrounded.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct UrlFeedRequest {
    feed: FeedType,
    interval: Interval,
    #[serde(serialize_with = "se_datetime_utc_as_epoch_s")]
    timestamp: DateTime<Utc>,
}

impl UrlFeedRequest {
    /// An absent timestamp selects the most recently completed slice: the
    /// current time shifted back by one interval unit.
    pub fn new(
        feed: FeedType,
        interval: Interval,
        timestamp: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Self::with_now(feed, interval, timestamp, Utc::now())
    }

    pub(crate) fn with_now(
        feed: FeedType,
        interval: Interval,
        timestamp: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let timestamp = match timestamp {
            Some(input) => parse_timestamp(input)?,
            None => now - interval.duration(),
        };

        Ok(Self {
            feed,
            interval,
            timestamp,
        })
    }
}

impl ApiRequest for UrlFeedRequest {
    type Response = UrlFeed;
    const METHOD: &'static str = "urlfeed";
}

/// `urlquery_get_flagged_urls`: the URL list carrying a reputation, filtered
/// by confidence level.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct FlaggedUrlsRequest {
    interval: Interval,
    #[serde(serialize_with = "se_datetime_utc_as_epoch_s")]
    timestamp: DateTime<Utc>,
    confidence: Confidence,
}

impl FlaggedUrlsRequest {
    /// An absent timestamp selects the slice containing the current time.
    pub fn new(
        interval: Interval,
        timestamp: Option<&str>,
        confidence: Confidence,
    ) -> Result<Self, ValidationError> {
        Self::with_now(interval, timestamp, confidence, Utc::now())
    }

    pub(crate) fn with_now(
        interval: Interval,
        timestamp: Option<&str>,
        confidence: Confidence,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let timestamp = match timestamp {
            Some(input) => parse_timestamp(input)?,
            None => now,
        };

        Ok(Self {
            interval,
            timestamp,
            confidence,
        })
    }
}

impl ApiRequest for FlaggedUrlsRequest {
    type Response = serde_json::Value;
    const METHOD: &'static str = "urlquery_get_flagged_urls";
}
