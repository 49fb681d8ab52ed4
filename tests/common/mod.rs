#![allow(dead_code)]

use flexi_ads::core::gateway::{ApiOutcome, CallEvent, CallObserver};
use flexi_ads::{FlexiAdsClient, SessionContext, SessionHandle, StaticConnectivity};
use std::sync::{Arc, Mutex};

pub const TEST_TOKEN: &str = "test-token";

/// Keeps (operation, path, succeeded) for every gateway call.
#[derive(Default)]
pub struct RecordingObserver {
    pub events: Mutex<Vec<(String, String, bool)>>,
}

impl RecordingObserver {
    pub fn operations(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(operation, _, _)| operation.clone())
            .collect()
    }
}

impl CallObserver for RecordingObserver {
    fn observe(&self, event: &CallEvent<'_>) {
        self.events.lock().unwrap().push((
            event.operation.to_string(),
            event.path.to_string(),
            matches!(event.outcome, ApiOutcome::Success(_)),
        ));
    }
}

pub async fn signed_in_session() -> SessionHandle {
    let session = SessionHandle::new();
    session
        .begin(SessionContext {
            token: Some(TEST_TOKEN.to_string()),
            user_id: Some(1),
            member_id: Some("M-1".to_string()),
            business_id: Some(5),
        })
        .await;
    session
}

/// Online client with a signed-in session.
pub async fn client(base_url: &str) -> FlexiAdsClient {
    FlexiAdsClient::builder(base_url)
        .connectivity(Arc::new(StaticConnectivity::online()))
        .token_source(Arc::new(signed_in_session().await))
        .build()
        .unwrap()
}

/// Online client without any session.
pub fn anonymous_client(base_url: &str) -> FlexiAdsClient {
    FlexiAdsClient::builder(base_url)
        .connectivity(Arc::new(StaticConnectivity::online()))
        .build()
        .unwrap()
}

pub async fn offline_client(base_url: &str) -> FlexiAdsClient {
    FlexiAdsClient::builder(base_url)
        .connectivity(Arc::new(StaticConnectivity::offline()))
        .token_source(Arc::new(signed_in_session().await))
        .build()
        .unwrap()
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
