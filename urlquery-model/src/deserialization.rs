use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize a `DateTime<Utc>` as Unix epoch seconds, the wire encoding
/// for every timestamp field the service accepts.
pub fn se_datetime_utc_as_epoch_s<S>(
    datetime: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(datetime.timestamp())
}

/// Identifiers such as `report_id` may arrive as a JSON string or an
/// integer. Normalise both to `String`.
pub fn de_string_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    Ok(match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => s,
        StringOrInt::Int(i) => i.to_string(),
    })
}

/// Optional variant of [`de_string_or_int`] for fields the service only
/// includes once processing has completed.
pub fn de_opt_string_or_int<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    Ok(Option::<StringOrInt>::deserialize(deserializer)?.map(|value| match value {
        StringOrInt::String(s) => s,
        StringOrInt::Int(i) => i.to_string(),
    }))
}
