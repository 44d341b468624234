//! Tool adapter: validates arguments, dispatches catalog entries to the
//! request executor, and folds every outcome into a uniform envelope.

pub mod schema;

pub use schema::ToolDescriptor;

use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value};
use serde::Serialize;
use tracing::{error, warn};

use crate::databricks::{dbfs, ApiClient, ApiError};
use crate::endpoints;
use crate::types::{Args, EndpointSpec};

// ---------------------------------------------------------------------------
// Result envelope
// ---------------------------------------------------------------------------

/// Uniform result of every tool invocation. Serializes as
/// `{"isError": false, "result": ...}` or `{"isError": true, "error": "..."}`;
/// raw errors never cross this boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    #[serde(rename = "isError")]
    pub is_error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn success(result: Value) -> Self {
        Self {
            is_error: false,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            result: None,
            error: Some(message.into()),
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// All tools exposed by the server, backed by the static endpoint catalog
/// and one shared API client.
pub struct ToolRegistry {
    client: ApiClient,
    specs: HashMap<&'static str, &'static EndpointSpec>,
    descriptors: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    pub fn new(client: ApiClient) -> Self {
        let all = endpoints::all();
        let descriptors = all.iter().map(|spec| schema::describe(spec)).collect();
        let specs = all.into_iter().map(|spec| (spec.name, spec)).collect();
        Self {
            client,
            specs,
            descriptors,
        }
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Presentation metadata for every tool.
    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.descriptors
    }

    /// Invoke a tool by name. Never panics and never returns a raw error.
    pub async fn call(&self, name: &str, args: &Args) -> Envelope {
        let Some(spec) = self.specs.get(name) else {
            warn!("Unknown tool: {name}");
            return Envelope::error(format!("Unknown tool: {name}"));
        };
        self.invoke(spec, args).await
    }

    async fn invoke(&self, spec: &EndpointSpec, args: &Args) -> Envelope {
        // Required keys first; the first missing one short-circuits before
        // any network traffic.
        for param in spec.params.iter().filter(|p| p.required) {
            if !args.contains_key(param.name) {
                error!("Missing required parameter: {}", param.name);
                return Envelope::error(format!("Missing required parameter: {}", param.name));
            }
        }

        if let Some(validate) = spec.validate {
            if let Err(message) = validate(args) {
                let desc = resource_desc(spec, args);
                error!("Failed to process {desc}: {message}");
                return Envelope::error(format!("Failed to process {desc}: {message}"));
            }
        }

        if spec.composite {
            return self.invoke_composite(spec, args).await;
        }

        let path = match substitute_path(spec, args) {
            Ok(path) => path,
            Err(envelope) => return envelope,
        };

        let path_params = spec.path_params();
        let mut body = Map::new();
        for (key, raw) in spec.body_constants {
            let value = serde_json::from_str(raw)
                .unwrap_or_else(|_| Value::String((*raw).to_string()));
            body.insert((*key).to_string(), value);
        }
        let mut query: Vec<(String, String)> = Vec::new();

        for param in spec.params {
            if path_params.contains(&param.name) {
                continue;
            }
            // Absent and explicit-null optionals are omitted entirely.
            let Some(value) = args.get(param.name) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            if spec.method.sends_query() {
                query.push((param.wire_name().to_string(), value_to_string(value)));
            } else if param.flatten {
                match value {
                    Value::Object(entries) => {
                        for (key, entry) in entries {
                            body.insert(key.clone(), entry.clone());
                        }
                    }
                    other => {
                        body.insert(param.wire_name().to_string(), other.clone());
                    }
                }
            } else {
                body.insert(param.wire_name().to_string(), value.clone());
            }
        }

        let body = if body.is_empty() {
            None
        } else {
            Some(Value::Object(body))
        };
        let query = if query.is_empty() {
            None
        } else {
            Some(query)
        };

        match self
            .client
            .request(spec.method, &path, body.as_ref(), query.as_deref())
            .await
        {
            Ok(result) => Envelope::success(result),
            Err(err) => Envelope::error(classify_api_error(spec, args, &err)),
        }
    }

    /// Multi-call operations that cannot be expressed as one table entry.
    async fn invoke_composite(&self, spec: &EndpointSpec, args: &Args) -> Envelope {
        let result = match spec.name {
            "import_file" => {
                let source = arg_string(args, "source_path");
                let target = arg_string(args, "target_path");
                let overwrite = args
                    .get("overwrite")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                dbfs::import_file(&self.client, Path::new(&source), &target, overwrite).await
            }
            "upload_large_file" => {
                let dbfs_path = arg_string(args, "dbfs_path");
                let local = arg_string(args, "local_file_path");
                let overwrite = args
                    .get("overwrite")
                    .and_then(Value::as_bool)
                    .unwrap_or(true);
                let chunk_size = args
                    .get("buffer_size")
                    .and_then(Value::as_u64)
                    .map(|n| n as usize)
                    .unwrap_or(dbfs::DEFAULT_CHUNK_SIZE);
                dbfs::upload_large_file(
                    &self.client,
                    &dbfs_path,
                    Path::new(&local),
                    overwrite,
                    chunk_size,
                )
                .await
            }
            other => {
                error!("Composite tool without a handler: {other}");
                return Envelope::error(format!("Unknown tool: {other}"));
            }
        };

        match result {
            Ok(value) => Envelope::success(value),
            Err(err) => match err.downcast_ref::<ApiError>() {
                Some(api_err) => Envelope::error(classify_api_error(spec, args, api_err)),
                None => {
                    let desc = resource_desc(spec, args);
                    error!("Failed to process {desc}: {err}");
                    Envelope::error(format!("Failed to process {desc}: {err}"))
                }
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fill `{placeholder}` segments from arguments, percent-encoding values.
fn substitute_path(spec: &EndpointSpec, args: &Args) -> Result<String, Envelope> {
    let mut path = spec.path.to_string();
    for name in spec.path_params() {
        let Some(value) = args.get(name) else {
            return Err(Envelope::error(format!(
                "Missing required parameter: {name}"
            )));
        };
        let value = value_to_string(value);
        path = path.replace(
            &format!("{{{name}}}"),
            urlencoding::encode(&value).as_ref(),
        );
    }
    Ok(path)
}

/// Render an argument for a path segment or query string.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn arg_string(args: &Args, name: &str) -> String {
    args.get(name).map(value_to_string).unwrap_or_default()
}

/// "cluster 123" when the spec names an identifying argument, else "cluster".
fn resource_desc(spec: &EndpointSpec, args: &Args) -> String {
    match spec.id_param.and_then(|name| args.get(name)) {
        Some(id) => format!("{} {}", spec.resource, value_to_string(id)),
        None => spec.resource.to_string(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Map an API failure to the user-facing message, logging as a side effect.
fn classify_api_error(spec: &EndpointSpec, args: &Args, err: &ApiError) -> String {
    let desc = resource_desc(spec, args);
    if err.is_not_found() {
        let message = format!("{} not found", capitalize(&desc));
        warn!("{message}");
        message
    } else {
        error!("Failed to process {desc}: {err}");
        format!("Failed to process {desc}: {err}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::DatabricksConfig;

    async fn registry_for(server: &MockServer) -> ToolRegistry {
        let client = ApiClient::new(&DatabricksConfig {
            host: server.uri(),
            token: "test-token".into(),
            ..Default::default()
        })
        .unwrap();
        ToolRegistry::new(client)
    }

    fn args(value: Value) -> Args {
        value.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn list_clusters_hits_endpoint_with_no_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2.0/clusters/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"clusters": []})))
            .expect(1)
            .mount(&server)
            .await;

        let registry = registry_for(&server).await;
        let envelope = registry.call("list_clusters", &args(json!({}))).await;
        assert_eq!(envelope, Envelope::success(json!({"clusters": []})));
        assert_eq!(
            envelope.to_value(),
            json!({"isError": false, "result": {"clusters": []}})
        );
    }

    #[tokio::test]
    async fn missing_required_parameter_short_circuits() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/clusters/create"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let registry = registry_for(&server).await;
        let envelope = registry
            .call(
                "create_cluster",
                &args(json!({"cluster_name": "c", "spark_version": "13.3.x"})),
            )
            .await;
        assert_eq!(
            envelope,
            Envelope::error("Missing required parameter: node_type_id")
        );
    }

    #[tokio::test]
    async fn validation_hook_rejects_before_any_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/clusters/create"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let registry = registry_for(&server).await;
        let envelope = registry
            .call(
                "create_cluster",
                &args(json!({
                    "cluster_name": "c",
                    "spark_version": "13.3.x",
                    "node_type_id": "i3.xlarge",
                })),
            )
            .await;
        assert!(envelope.is_error);
        assert!(envelope
            .error
            .unwrap()
            .contains("Either 'num_workers' or 'autoscale'"));
    }

    #[tokio::test]
    async fn not_found_classification_names_the_resource() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2.0/clusters/get"))
            .respond_with(ResponseTemplate::new(404).set_body_json(
                json!({"error_code": "RESOURCE_DOES_NOT_EXIST", "message": "missing"}),
            ))
            .mount(&server)
            .await;

        let registry = registry_for(&server).await;
        let envelope = registry
            .call("get_cluster", &args(json!({"cluster_id": "123"})))
            .await;
        assert_eq!(envelope, Envelope::error("Cluster 123 not found"));
    }

    #[tokio::test]
    async fn other_api_errors_become_failed_to_process() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2.0/clusters/get"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let registry = registry_for(&server).await;
        let envelope = registry
            .call("get_cluster", &args(json!({"cluster_id": "123"})))
            .await;
        let message = envelope.error.unwrap();
        assert!(message.starts_with("Failed to process cluster 123:"));
    }

    #[tokio::test]
    async fn required_only_call_sends_exactly_required_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/2.1/unity-catalog/catalogs"))
            .and(body_json(json!({"name": "main"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "main"})))
            .expect(1)
            .mount(&server)
            .await;

        let registry = registry_for(&server).await;
        let envelope = registry
            .call("create_catalog", &args(json!({"name": "main"})))
            .await;
        assert!(!envelope.is_error);
    }

    #[tokio::test]
    async fn explicit_null_optionals_are_omitted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/2.1/unity-catalog/catalogs"))
            .and(body_json(json!({"name": "main"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let registry = registry_for(&server).await;
        let envelope = registry
            .call(
                "create_catalog",
                &args(json!({"name": "main", "comment": null})),
            )
            .await;
        assert!(!envelope.is_error);
    }

    #[tokio::test]
    async fn wire_names_apply_to_query_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2.0/dbfs/list"))
            .and(query_param("path", "/data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"files": []})))
            .expect(1)
            .mount(&server)
            .await;

        let registry = registry_for(&server).await;
        let envelope = registry
            .call("list_dbfs_files", &args(json!({"dbfs_path": "/data"})))
            .await;
        assert!(!envelope.is_error);
    }

    #[tokio::test]
    async fn path_params_are_substituted_and_rest_goes_to_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/sql/queries/q1/run"))
            .and(body_json(json!({"warehouse_id": "w1"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let registry = registry_for(&server).await;
        let envelope = registry
            .call(
                "run_query",
                &args(json!({"query_id": "q1", "warehouse_id": "w1"})),
            )
            .await;
        assert!(!envelope.is_error);
    }

    #[tokio::test]
    async fn flatten_params_merge_into_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/2.0/budgets/b1"))
            .and(body_json(json!({"amount": 250.0})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let registry = registry_for(&server).await;
        let envelope = registry
            .call(
                "update_budget",
                &args(json!({"budget_id": "b1", "updates": {"amount": 250.0}})),
            )
            .await;
        assert!(!envelope.is_error);
    }

    #[tokio::test]
    async fn scim_bodies_carry_the_constant_schema() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/preview/scim/v2/ServicePrincipals"))
            .and(body_json(json!({
                "schemas": ["urn:ietf:params:scim:schemas:core:2.0:ServicePrincipal"],
                "displayName": "robot",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let registry = registry_for(&server).await;
        let envelope = registry
            .call(
                "create_service_principal",
                &args(json!({"display_name": "robot"})),
            )
            .await;
        assert!(!envelope.is_error);
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error_envelope() {
        let server = MockServer::start().await;
        let registry = registry_for(&server).await;
        let envelope = registry.call("definitely_not_a_tool", &args(json!({}))).await;
        assert_eq!(envelope, Envelope::error("Unknown tool: definitely_not_a_tool"));
    }

    #[tokio::test]
    async fn composite_upload_missing_local_file_reports_uniformly() {
        let server = MockServer::start().await;
        let registry = registry_for(&server).await;
        let envelope = registry
            .call(
                "upload_large_file",
                &args(json!({
                    "dbfs_path": "/target",
                    "local_file_path": "/definitely/not/here",
                })),
            )
            .await;
        let message = envelope.error.unwrap();
        assert!(message.starts_with("Failed to process file /target:"));
        assert!(message.contains("Local file not found"));
    }

    #[test]
    fn registry_exposes_descriptors_for_every_tool() {
        let client = ApiClient::new(&DatabricksConfig {
            host: "https://example.invalid".into(),
            token: "t".into(),
            ..Default::default()
        })
        .unwrap();
        let registry = ToolRegistry::new(client);
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), crate::endpoints::all().len());
        let list_clusters = registry
            .descriptors()
            .iter()
            .find(|d| d.name == "list_clusters")
            .unwrap();
        assert!(list_clusters
            .description
            .starts_with("GET /api/2.0/clusters/list"));
    }
}
