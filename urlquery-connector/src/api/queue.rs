use serde::Serialize;
use urlquery_model::submission::QueueStatus;

use crate::protocol::http::rest::request::ApiRequest;

/// `queue_status`: poll the state of a queued submission.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct QueueStatusRequest {
    queue_id: String,
}

impl QueueStatusRequest {
    pub fn new(queue_id: impl Into<String>) -> Self {
        Self {
            queue_id: queue_id.into(),
        }
    }
}

impl ApiRequest for QueueStatusRequest {
    type Response = QueueStatus;
    const METHOD: &'static str = "queue_status";
}

/// `user_agent_list`: the accepted user agent strings. These change over
/// time; pick one from the returned list.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct UserAgentListRequest {}

impl ApiRequest for UserAgentListRequest {
    type Response = Vec<String>;
    const METHOD: &'static str = "user_agent_list";
}
