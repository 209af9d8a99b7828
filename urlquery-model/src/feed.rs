use serde::{Deserialize, Serialize};

/// URLFEED response object: one slice of the main URL feed.
///
/// The URL objects inside the feed are service-defined and carried through
/// without local schema validation.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct UrlFeed {
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub feed: Vec<serde_json::Value>,
}
