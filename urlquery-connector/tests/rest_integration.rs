use httpmock::prelude::*;
use serde_json::json;

use urlquery_connector::{CallOptions, UrlQuery};
use urlquery_model::enums::{AccessLevel, FeedType, Interval, Priority};
use urlquery_model::error::ClientError;
use urlquery_model::submission::QueueState;

fn client_for(server: &MockServer) -> UrlQuery {
    UrlQuery::builder()
        .base_url(server.url("/v3/json"))
        .build()
        .unwrap()
}

/// Full round-trip: a plain submit dispatches exactly one POST with the
/// expected body and returns the service response.
#[tokio::test]
async fn submit_round_trip() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v3/json").json_body(json!({
            "method": "submit",
            "url": "http://example.com",
            "priority": "low",
            "access_level": "public"
        }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"status": "queued", "queue_id": "abc"}));
    });

    let client = client_for(&server);
    let status = client
        .submit(
            "http://example.com",
            Priority::Low,
            AccessLevel::Public,
            CallOptions::default(),
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(status.status, QueueState::Queued);
    assert_eq!(status.queue_id, "abc");
    assert!(status.report_id.is_none());
}

/// Client-level gzip and key defaults are appended after the procedure
/// fields.
#[tokio::test]
async fn client_defaults_attach_gzip_and_key() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v3/json").json_body(json!({
            "method": "queue_status",
            "queue_id": "abc",
            "gzip": true,
            "key": "default-key"
        }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"status": "processing", "queue_id": "abc"}));
    });

    let client = UrlQuery::builder()
        .base_url(server.url("/v3/json"))
        .apikey("default-key")
        .gzip_default(true)
        .build()
        .unwrap();

    let status = client
        .queue_status("abc", CallOptions::default())
        .await
        .unwrap();

    mock.assert();
    assert_eq!(status.status, QueueState::Processing);
}

/// queue_status honors per-call overrides like every other procedure.
#[tokio::test]
async fn call_options_override_client_defaults() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v3/json").json_body(json!({
            "method": "queue_status",
            "queue_id": "abc",
            "gzip": true,
            "key": "call-key"
        }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"status": "done", "queue_id": "abc", "report_id": 99}));
    });

    let client = UrlQuery::builder()
        .base_url(server.url("/v3/json"))
        .apikey("default-key")
        .build()
        .unwrap();

    let status = client
        .queue_status(
            "abc",
            CallOptions {
                gzip: true,
                apikey: Some("call-key"),
            },
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(status.status, QueueState::Done);
    assert_eq!(status.report_id.as_deref(), Some("99"));
}

/// An explicit feed timestamp travels as UTC epoch seconds.
#[tokio::test]
async fn urlfeed_sends_epoch_seconds() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v3/json").json_body(json!({
            "method": "urlfeed",
            "feed": "unfiltered",
            "interval": "hour",
            "timestamp": 1342287000
        }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "start_time": "2012-07-14 17:00",
                "end_time": "2012-07-14 17:59",
                "feed": []
            }));
    });

    let client = client_for(&server);
    let feed = client
        .urlfeed(
            FeedType::Unfiltered,
            Interval::Hour,
            Some("2012-07-14T17:30:00Z"),
            CallOptions::default(),
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(feed.start_time, "2012-07-14 17:00");
    assert!(feed.feed.is_empty());
}

#[tokio::test]
async fn user_agent_list_returns_strings() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/v3/json")
            .json_body(json!({"method": "user_agent_list"}));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!(["Mozilla/5.0", "Opera/9.80"]));
    });

    let client = client_for(&server);
    let agents = client
        .user_agent_list(CallOptions::default())
        .await
        .unwrap();
    assert_eq!(agents, vec!["Mozilla/5.0", "Opera/9.80"]);
}

/// A 2xx error payload on a typed procedure surfaces as an API error.
#[tokio::test]
async fn service_error_payload_is_typed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v3/json");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"error": "Insufficient permissions"}));
    });

    let client = client_for(&server);
    let err = client
        .report("431", 0, 0, CallOptions::default())
        .await
        .unwrap_err();

    match err {
        ClientError::Api(message) => assert_eq!(message, "Insufficient permissions"),
        other => panic!("expected ClientError::Api, got {other:?}"),
    }
}

/// Procedures with an undocumented response shape pass the payload
/// through verbatim, error documents included.
#[tokio::test]
async fn opaque_procedures_pass_payload_through() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/v3/json")
            .json_body(json!({"method": "reputation", "q": "example.com"}));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"error": "Invalid key"}));
    });

    let client = client_for(&server);
    let value = client
        .reputation("example.com", CallOptions::default())
        .await
        .unwrap();
    assert_eq!(value["error"], "Invalid key");
}

#[tokio::test]
async fn http_failure_surfaces_status_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v3/json");
        then.status(502).body("upstream down");
    });

    let client = client_for(&server);
    let err = client
        .queue_status("abc", CallOptions::default())
        .await
        .unwrap_err();

    match err {
        ClientError::HttpResponse(status, body) => {
            assert_eq!(status, 502);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected ClientError::HttpResponse, got {other:?}"),
    }
}

/// Validation failures never reach the transport.
#[tokio::test]
async fn validation_failures_issue_no_network_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v3/json");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({}));
    });

    let client = client_for(&server);

    let err = client
        .report("431", 16, 0, CallOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "flag can only be <= 15");

    let err = client
        .urlfeed(
            FeedType::Unfiltered,
            Interval::Hour,
            Some("gibberish"),
            CallOptions::default(),
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "unable to convert time to timestamp: gibberish"
    );

    assert_eq!(mock.hits(), 0);
}

/// Invalid categorical values fail at the string edge, naming every
/// allowed member, before a request object even exists.
#[tokio::test]
async fn invalid_enum_values_fail_before_dispatch() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v3/json");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({}));
    });
    let client = client_for(&server);

    let err = "urgent".parse::<Priority>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "priority can only be in urlfeed, low, medium, high"
    );

    let err = "secret".parse::<AccessLevel>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "access_level can only be in public, nonpublic, private"
    );

    // Only a fully validated submission reaches the wire.
    if let Ok(priority) = "low".parse::<Priority>() {
        let _ = client
            .submit(
                "http://example.com",
                priority,
                AccessLevel::Public,
                CallOptions::default(),
            )
            .await;
    }
    assert_eq!(mock.hits(), 1);
}
