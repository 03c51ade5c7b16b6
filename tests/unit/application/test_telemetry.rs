use confluence_mcp::prelude::*;

#[test]
fn test_tracing_observer_accepts_every_event() {
    let observer = TracingObserver;
    let events = [
        TransportEvent::MissingCredentials {
            missing: vec!["ATLASSIAN_SITE_NAME"],
        },
        TransportEvent::RequestStarted {
            method: "GET".to_string(),
            url: "https://acme.atlassian.net/wiki/api/v2/spaces".to_string(),
        },
        TransportEvent::ResponseReceived {
            url: "https://acme.atlassian.net/wiki/api/v2/spaces".to_string(),
            status: 200,
        },
        TransportEvent::ApiError {
            url: "https://acme.atlassian.net/wiki/api/v2/spaces/1".to_string(),
            status: 404,
            status_text: "Not Found".to_string(),
            body: "{}".to_string(),
        },
        TransportEvent::RequestFailed {
            url: "http://127.0.0.1:1/".to_string(),
            error: "connection refused".to_string(),
        },
        TransportEvent::DecodeFailed {
            url: "https://acme.atlassian.net/wiki/api/v2/spaces".to_string(),
            error: "expected value".to_string(),
        },
    ];
    for event in &events {
        observer.on_event(event);
    }
}
