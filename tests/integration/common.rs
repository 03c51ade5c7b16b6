// Common utilities for integration tests

use confluence_mcp::prelude::*;
use std::sync::{Arc, Mutex};

pub const AUTHORIZATION: &str = "Basic dGVzdEBleGFtcGxlLmNvbTp0ZXN0LXRva2Vu";

/// Observer that keeps every event for later inspection
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<TransportEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<TransportEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl TransportObserver for RecordingObserver {
    fn on_event(&self, event: &TransportEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Configuration pointing at a mock server
pub fn test_config(base_url: &str) -> Config {
    Config::with_credentials("test-site", "test@example.com", "test-token").base_url(base_url)
}

/// Client pointing at a mock server, with a recording observer
pub fn create_test_client(base_url: &str) -> (Client, Arc<RecordingObserver>) {
    setup_logger();
    let observer = Arc::new(RecordingObserver::default());
    let client = Client::with_observer(test_config(base_url), observer.clone())
        .expect("Failed to create client");
    (client, observer)
}

pub fn test_credentials() -> Credentials {
    Credentials::new("test-site", "test@example.com", "test-token")
}
