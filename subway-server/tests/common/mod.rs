//! Shared helpers for HTTP acceptance tests.

#![allow(dead_code)]

use reqwest::{Client, Response, StatusCode};
use serde_json::json;

use subway_server::store::SubwayStore;
use subway_server::web::{AppState, LineResponse, StationResponse, create_router};

/// A running server on an ephemeral port.
pub struct TestApp {
    pub base: String,
    pub client: Client,
}

impl TestApp {
    /// Start a server with an empty store.
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = create_router(AppState::new(SubwayStore::new()));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base: format!("http://{addr}"),
            client: Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn create_station(&self, name: &str) -> Response {
        self.client
            .post(self.url("/stations"))
            .json(&json!({ "name": name }))
            .send()
            .await
            .unwrap()
    }

    /// Create a station that must succeed, returning its id.
    pub async fn station_id(&self, name: &str) -> u64 {
        let response = self.create_station(name).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        response.json::<StationResponse>().await.unwrap().id.0
    }

    pub async fn list_stations(&self) -> Response {
        self.client
            .get(self.url("/stations"))
            .send()
            .await
            .unwrap()
    }

    pub async fn station_names(&self) -> Vec<String> {
        let response = self.list_stations().await;
        assert_eq!(response.status(), StatusCode::OK);
        response
            .json::<Vec<StationResponse>>()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect()
    }

    pub async fn get_station(&self, id: u64) -> Response {
        self.client
            .get(self.url(&format!("/stations/{id}")))
            .send()
            .await
            .unwrap()
    }

    pub async fn delete_station(&self, id: u64) -> Response {
        self.client
            .delete(self.url(&format!("/stations/{id}")))
            .send()
            .await
            .unwrap()
    }

    pub async fn create_line(&self, name: &str, up: u64, down: u64, distance: u64) -> Response {
        self.client
            .post(self.url("/lines"))
            .json(&json!({
                "name": name,
                "color": "bg-red-600",
                "upStationId": up,
                "downStationId": down,
                "distance": distance,
            }))
            .send()
            .await
            .unwrap()
    }

    pub async fn get_line(&self, id: u64) -> Response {
        self.client
            .get(self.url(&format!("/lines/{id}")))
            .send()
            .await
            .unwrap()
    }

    pub async fn register_section(&self, line: u64, up: u64, down: u64, distance: u64) -> Response {
        self.client
            .post(self.url(&format!("/lines/{line}/sections")))
            .json(&json!({
                "upStationId": up,
                "downStationId": down,
                "distance": distance,
            }))
            .send()
            .await
            .unwrap()
    }
}

/// Station names of a line response, in line order.
pub fn line_station_names(line: &LineResponse) -> Vec<&str> {
    line.stations.iter().map(|s| s.name.as_str()).collect()
}
