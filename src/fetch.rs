//! Background weather fetches
//!
//! Each search runs as its own tokio task and reports back to the event loop
//! over a channel, so the UI keeps handling keys while requests are pending.
//! Requests are never cancelled and may overlap; outcomes arrive in
//! completion order.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::data::{CurrentWeather, FetchError, WeatherClient};

/// A search the event loop should start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonic id assigned by the app, used to correlate log lines
    pub request_id: u64,
    /// Trimmed city query
    pub query: String,
}

/// Result of a finished search, sent back to the event loop
#[derive(Debug)]
pub struct FetchOutcome {
    pub request_id: u64,
    pub query: String,
    pub result: Result<CurrentWeather, FetchError>,
}

/// Spawns fetch tasks and collects their outcomes
pub struct FetchWorker {
    client: WeatherClient,
    sender: mpsc::Sender<FetchOutcome>,
    receiver: mpsc::Receiver<FetchOutcome>,
}

impl FetchWorker {
    /// Creates a worker using `client` for every request
    pub fn new(client: WeatherClient) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        Self {
            client,
            sender,
            receiver,
        }
    }

    /// Starts a fetch in the background. Must be called inside a tokio runtime.
    pub fn spawn(&self, request: FetchRequest) {
        let client = self.client.clone();
        let sender = self.sender.clone();

        tokio::spawn(async move {
            debug!(request_id = request.request_id, query = %request.query, "fetch started");
            let result = client.fetch_current(&request.query).await;

            let outcome = FetchOutcome {
                request_id: request.request_id,
                query: request.query,
                result,
            };
            if sender.send(outcome).await.is_err() {
                warn!("fetch finished after the event loop stopped listening");
            }
        });
    }

    /// Returns a finished outcome without blocking, if one is ready
    pub fn try_recv(&mut self) -> Option<FetchOutcome> {
        self.receiver.try_recv().ok()
    }

    /// Waits for the next finished outcome
    pub async fn recv(&mut self) -> Option<FetchOutcome> {
        self.receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn body(name: &str, temp: f64, text: &str) -> serde_json::Value {
        serde_json::json!({
            "location": {"name": name},
            "current": {"temp_c": temp, "condition": {"text": text}}
        })
    }

    #[tokio::test]
    async fn test_try_recv_empty_without_requests() {
        let mut worker = FetchWorker::new(WeatherClient::new("key"));
        assert!(worker.try_recv().is_none());
    }

    #[tokio::test]
    async fn test_spawn_reports_outcome() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "Paris"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body("Paris", 18.0, "Sunny")))
            .mount(&mock_server)
            .await;

        let client = WeatherClient::new("key").with_base_url(mock_server.uri());
        let mut worker = FetchWorker::new(client);

        worker.spawn(FetchRequest {
            request_id: 7,
            query: "Paris".to_string(),
        });
        let outcome = worker.recv().await.expect("outcome");

        assert_eq!(outcome.request_id, 7);
        assert_eq!(outcome.query, "Paris");
        assert_eq!(outcome.result.unwrap().name, "Paris");
    }

    #[tokio::test]
    async fn test_overlapping_requests_all_report() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "Rome"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body("Rome", 22.0, "Clear")))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("q", "Nowhere"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {"code": 1006, "message": "No matching location found."}
            })))
            .mount(&mock_server)
            .await;

        let client = WeatherClient::new("key").with_base_url(mock_server.uri());
        let mut worker = FetchWorker::new(client);

        worker.spawn(FetchRequest {
            request_id: 1,
            query: "Rome".to_string(),
        });
        worker.spawn(FetchRequest {
            request_id: 2,
            query: "Nowhere".to_string(),
        });

        let mut outcomes = vec![
            worker.recv().await.expect("first outcome"),
            worker.recv().await.expect("second outcome"),
        ];
        outcomes.sort_by_key(|o| o.request_id);

        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1]
            .result
            .as_ref()
            .is_err_and(FetchError::is_invalid_city));
    }
}
