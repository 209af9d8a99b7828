use std::fmt::{self, Display};
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::deserialization::de_string_or_int;
use crate::error::ValidationError;

/// Bitmask selecting which sub-sections a report lookup includes. Bits
/// combine with `|`; the full report is [`ReportFlags::ALL`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize)]
pub struct ReportFlags(u8);

impl ReportFlags {
    /// Basic report only.
    pub const BASIC: ReportFlags = ReportFlags(0);
    /// Include settings.
    pub const SETTINGS: ReportFlags = ReportFlags(1);
    /// Include alerts (IDS and urlquery alerts).
    pub const ALERTS: ReportFlags = ReportFlags(2);
    /// Include recent reports from the same domain/IP/ASN.
    pub const RECENT: ReportFlags = ReportFlags(4);
    /// Include report details (JavaScripts, HTTP transactions etc.).
    pub const DETAILS: ReportFlags = ReportFlags(8);
    /// All report data.
    pub const ALL: ReportFlags = ReportFlags(15);

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, other: ReportFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ReportFlags {
    type Output = ReportFlags;

    fn bitor(self, rhs: ReportFlags) -> Self::Output {
        ReportFlags(self.0 | rhs.0)
    }
}

impl TryFrom<u8> for ReportFlags {
    type Error = ValidationError;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        if flag > 15 {
            return Err(ValidationError::FlagOutOfRange { flag });
        }
        Ok(ReportFlags(flag))
    }
}

impl Display for ReportFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// BASICREPORT response object. The URL, SETTINGS and binary-blob
/// sub-objects are service-defined and carried through unvalidated.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct BasicReport {
    #[serde(deserialize_with = "de_string_or_int")]
    pub report_id: String,
    /// Date formatted string.
    pub date: String,
    #[serde(default)]
    pub url: Option<serde_json::Value>,
    #[serde(default)]
    pub settings: Option<serde_json::Value>,
    /// Total urlquery alerts.
    #[serde(default)]
    pub urlquery_alert_count: u32,
    /// Total IDS alerts.
    #[serde(default)]
    pub ids_alert_count: u32,
    /// Total blacklist alerts.
    #[serde(default)]
    pub blacklist_alert_count: u32,
    #[serde(default)]
    pub screenshot: Option<serde_json::Value>,
    #[serde(default)]
    pub domain_graph: Option<serde_json::Value>,
}

/// Reports created from a given timestamp, most recent first.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
pub struct ReportList {
    #[serde(default)]
    pub reports: Vec<BasicReport>,
}
