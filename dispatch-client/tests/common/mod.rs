// dispatch-client/tests/common/mod.rs
// Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use dispatch_client::{ClientConfig, NetworkHttpClient};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Mock delivery API plus a client pointed at it
pub struct TestApi {
    pub server: MockServer,
    pub client: Arc<NetworkHttpClient>,
}

impl TestApi {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let client = ClientConfig::new(server.uri())
            .with_token("test-token")
            .with_timeout(5)
            .build_http_client()
            .expect("client");
        Self {
            server,
            client: Arc::new(client),
        }
    }

    /// Number of requests received on `path`
    pub async fn hits(&self, path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == path)
            .count()
    }
}

pub fn order_json(id: &str, customer: &str) -> Value {
    json!({
        "id": id,
        "customerName": customer,
        "customerPhone": "+91 90000 11111",
        "area": "Downtown",
        "totalAmount": 640.0,
        "deliveredAt": "2026-10-15T09:12:00Z",
        "driverName": "Suresh",
        "status": "order-complete",
        "items": [],
        "timeline": []
    })
}

pub fn vendors_json() -> Value {
    json!({
        "vendors": [
            {
                "_id": "v1",
                "name": "Fresh Cuts",
                "phone": "080-5550101",
                "status": "Available",
                "availableProducts": ["Chicken", "Mutton"],
                "serviceAreas": [
                    {
                        "area": "downtown-central",
                        "deliveryCharge": 20,
                        "estimatedDeliveryTime": "1-2 hours",
                        "isActive": true
                    }
                ]
            },
            {
                "_id": "v2",
                "name": "Sea Catch",
                "phone": "080-5550202",
                "status": "Offline"
            }
        ]
    })
}

pub fn areas_json() -> Value {
    json!({
        "areas": [
            { "_id": "a1", "name": "downtown", "displayName": "Downtown", "truckPrice": 50 },
            { "_id": "a2", "name": "harbor", "displayName": "Harbor Front" }
        ]
    })
}
