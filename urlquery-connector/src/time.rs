use chrono::{DateTime, NaiveTime, Utc};
use urlquery_model::error::ValidationError;

/// Parse a caller-supplied, human-readable date/time string into a UTC
/// instant.
///
/// Parsing is permissive about the input format. Naive datetimes are read
/// as UTC and a missing time-of-day resolves to midnight, so the resulting
/// epoch seconds never depend on the timezone or wall clock of the calling
/// process. Unparsable input is a [`ValidationError`] carrying the
/// offending string.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, ValidationError> {
    dateparser::parse_with(input, &Utc, NaiveTime::MIN).map_err(|_| ValidationError::Timestamp {
        input: input.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timestamp_formats() {
        struct TestCase {
            input: &'static str,
            expected: i64,
        }

        let cases = vec![
            TestCase {
                // TC0: naive datetime read as UTC
                input: "2012-07-14 17:30:00",
                expected: 1342287000,
            },
            TestCase {
                // TC1: RFC 3339 with explicit UTC marker
                input: "2012-07-14T17:30:00Z",
                expected: 1342287000,
            },
            TestCase {
                // TC2: offset datetime naming the same instant
                input: "2012-07-14T19:30:00+02:00",
                expected: 1342287000,
            },
            TestCase {
                // TC3: bare date resolves to midnight UTC
                input: "2012-07-14",
                expected: 1342224000,
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = parse_timestamp(test.input).unwrap();
            assert_eq!(actual.timestamp(), test.expected, "TC{} failed", index);
        }
    }

    #[test]
    fn test_parse_timestamp_reports_failed_input() {
        let err = parse_timestamp("not a date at all").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unable to convert time to timestamp: not a date at all"
        );
    }

    #[test]
    fn test_parsed_instant_matches_chrono() {
        let expected = Utc.with_ymd_and_hms(2019, 2, 3, 4, 5, 6).unwrap();
        let actual = parse_timestamp("2019-02-03T04:05:06Z").unwrap();
        assert_eq!(actual, expected);
    }
}
