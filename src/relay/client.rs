use std::time::Duration;

use reqwest::{header, Method};
use serde::Serialize;
use serde_json::Value;

use super::errors::RelayError;

/// Single-shot JSON client for the Remote Generation Service.
///
/// Every call is attempted exactly once. A call that outlives `timeout`
/// fails with [`RelayError::Timeout`].
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl RelayClient {
    pub fn new(timeout: Duration) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RelayError::Transport)?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn post<T>(&self, url: &str, payload: &T) -> Result<Value, RelayError>
    where
        T: Serialize + ?Sized,
    {
        self.call(url, payload, Method::POST).await
    }

    pub async fn call<T>(
        &self,
        url: &str,
        payload: &T,
        method: Method,
    ) -> Result<Value, RelayError>
    where
        T: Serialize + ?Sized,
    {
        let mut request = self
            .client
            .request(method.clone(), url)
            .header(header::ACCEPT, "application/json");

        if method != Method::GET {
            request = request.json(payload);
        }

        let res = request.send().await.map_err(|e| self.classify(e))?;
        let status = res.status();
        let text = res.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            return Err(RelayError::Upstream { status, body: text });
        }

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(%url, body = %text, "upstream body is not json");
                Err(RelayError::UpstreamProtocol(e.to_string()))
            }
        }
    }

    fn classify(&self, e: reqwest::Error) -> RelayError {
        if e.is_timeout() {
            RelayError::Timeout(self.timeout)
        } else {
            RelayError::Transport(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn client() -> RelayClient {
        RelayClient::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn returns_parsed_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(body_json(json!({ "prompt": "hi" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "story": "ok" })))
            .expect(1)
            .mount(&server)
            .await;

        let value = client()
            .post(&format!("{}/echo", server.uri()), &json!({ "prompt": "hi" }))
            .await
            .unwrap();

        assert_eq!(value, json!({ "story": "ok" }));
    }

    #[tokio::test]
    async fn non_success_status_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client()
            .post(&server.uri(), &json!({}))
            .await
            .unwrap_err();

        match err {
            RelayError::Upstream { status, body } => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(body, "model loading");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = RelayClient::new(Duration::from_millis(200)).unwrap();
        let err = client.post(&server.uri(), &json!({})).await.unwrap_err();

        assert!(matches!(err, RelayError::Timeout(_)), "got {:?}", err);
        assert_eq!(err.kind(), "timeout");
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_transport_error() {
        // nothing listens on the discard port
        let err = client()
            .post("http://127.0.0.1:9/generate-story", &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Transport(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn success_with_non_json_body_is_a_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client().post(&server.uri(), &json!({})).await.unwrap_err();

        assert!(matches!(err, RelayError::UpstreamProtocol(_)));
    }

    #[tokio::test]
    async fn get_sends_no_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "up" })))
            .expect(1)
            .mount(&server)
            .await;

        let value = client()
            .call(&format!("{}/", server.uri()), &json!({ "ignored": true }), Method::GET)
            .await
            .unwrap();

        assert_eq!(value["message"], "up");
        let received = server.received_requests().await.unwrap();
        assert!(received[0].body.is_empty());
    }
}
