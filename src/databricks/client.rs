//! Databricks REST client: one HTTP exchange per call, no retries.

use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::DatabricksConfig;
use crate::databricks::error::ApiError;
use crate::types::HttpMethod;

/// Thin client over the Databricks REST API. Holds the shared connection
/// pool; individual calls are stateless.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client from configuration. The timeout applies per request.
    pub fn new(config: &DatabricksConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: config.base_url().to_string(),
            token: config.token.clone(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue one request against the workspace API.
    ///
    /// 2xx responses decode to JSON (an empty body becomes `{}`); anything
    /// else becomes an [`ApiError`] carrying the status and raw body. The
    /// request body is never logged.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        query: Option<&[(String, String)]>,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        let safe_body = if body.is_some() { "**REDACTED**" } else { "-" };
        debug!(%method, %url, ?query, body = safe_body, "API request");

        let mut request = self
            .http
            .request(method.into(), &url)
            .bearer_auth(&self.token);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::transport)?;
        Self::decode_response(response).await
    }

    /// Issue one multipart request: `fields` as plain form parts, plus the
    /// file content as a named file part. Used for endpoints that accept
    /// streamed file payloads instead of JSON bodies.
    pub async fn request_with_file(
        &self,
        method: HttpMethod,
        path: &str,
        fields: &[(&str, String)],
        file_field: &str,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!(%method, %url, file_field, "API request (multipart)");

        let mut form = reqwest::multipart::Form::new();
        for (name, value) in fields {
            form = form.text(name.to_string(), value.clone());
        }
        let part = reqwest::multipart::Part::bytes(content).file_name(file_name.to_string());
        form = form.part(file_field.to_string(), part);

        let response = self
            .http
            .request(method.into(), &url)
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::transport)?;
        Self::decode_response(response).await
    }

    async fn decode_response(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await.map_err(ApiError::transport)?;
            if bytes.is_empty() {
                return Ok(Value::Object(Map::new()));
            }
            serde_json::from_slice(&bytes).map_err(ApiError::decode)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::http_status(status, body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&DatabricksConfig {
            host: server.uri(),
            token: "test-token".into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn get_with_query_decodes_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2.0/clusters/get"))
            .and(query_param("cluster_id", "abc"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cluster_id": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .request(
                HttpMethod::Get,
                "/api/2.0/clusters/get",
                None,
                Some(&[("cluster_id".to_string(), "abc".to_string())]),
            )
            .await
            .unwrap();
        assert_eq!(result, json!({"cluster_id": "abc"}));
    }

    #[tokio::test]
    async fn post_sends_json_body_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/clusters/start"))
            .and(body_json(json!({"cluster_id": "abc"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .request(
                HttpMethod::Post,
                "/api/2.0/clusters/start",
                Some(&json!({"cluster_id": "abc"})),
                None,
            )
            .await
            .unwrap();
        // Empty success body normalizes to an empty mapping.
        assert_eq!(result, json!({}));
    }

    #[tokio::test]
    async fn non_2xx_becomes_api_error_with_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2.0/clusters/get"))
            .respond_with(ResponseTemplate::new(404).set_body_json(
                json!({"error_code": "RESOURCE_DOES_NOT_EXIST", "message": "no such cluster"}),
            ))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .request(HttpMethod::Get, "/api/2.0/clusters/get", None, None)
            .await
            .unwrap_err();
        assert_eq!(err.status_code, Some(404));
        assert!(err.is_not_found());
        assert_eq!(
            err.response.unwrap()["error_code"],
            json!("RESOURCE_DOES_NOT_EXIST")
        );
    }

    #[tokio::test]
    async fn identical_requests_yield_identical_responses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2.0/clusters/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"clusters": []})))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let first = client
            .request(HttpMethod::Get, "/api/2.0/clusters/list", None, None)
            .await
            .unwrap();
        let second = client
            .request(HttpMethod::Get, "/api/2.0/clusters/list", None, None)
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn multipart_upload_reaches_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/dbfs/put"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .request_with_file(
                HttpMethod::Post,
                "/api/2.0/dbfs/put",
                &[("path", "/tmp/x".to_string())],
                "contents",
                "x",
                b"hello".to_vec(),
            )
            .await
            .unwrap();
        assert_eq!(result, json!({}));
    }
}
