use serde::{Deserialize, Serialize};

use crate::deserialization::de_opt_string_or_int;
use crate::enums::Priority;

/// Processing state of a queued submission. Normal processing time for a
/// URL is about one minute.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueState {
    Queued,
    Processing,
    Done,
}

/// QUEUE_STATUS response object returned by `submit`, `mass_submit` and
/// `queue_status`.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct QueueStatus {
    pub status: QueueState,
    pub queue_id: String,
    /// Included once `status` is `done`.
    #[serde(default, deserialize_with = "de_opt_string_or_int")]
    pub report_id: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub url: Option<serde_json::Value>,
    #[serde(default)]
    pub settings: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_de_queue_status() {
        struct TestCase {
            input: &'static str,
            expected: QueueStatus,
        }

        let cases = vec![
            TestCase {
                // TC0: freshly queued, minimal fields
                input: r#"{"status": "queued", "queue_id": "abc"}"#,
                expected: QueueStatus {
                    status: QueueState::Queued,
                    queue_id: "abc".to_string(),
                    report_id: None,
                    priority: None,
                    url: None,
                    settings: None,
                },
            },
            TestCase {
                // TC1: done, report_id arrives as an integer
                input: r#"
                    {
                        "status": "done",
                        "queue_id": "abc",
                        "report_id": 1234,
                        "priority": "low"
                    }
                "#,
                expected: QueueStatus {
                    status: QueueState::Done,
                    queue_id: "abc".to_string(),
                    report_id: Some("1234".to_string()),
                    priority: Some(Priority::Low),
                    url: None,
                    settings: None,
                },
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = serde_json::from_str::<QueueStatus>(test.input).unwrap();
            assert_eq!(actual, test.expected, "TC{} failed", index);
        }
    }
}
