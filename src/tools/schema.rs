//! Tool metadata generation from the static endpoint catalog.

use serde_json::{json, Map, Value};

use crate::types::{EndpointSpec, HttpMethod};

/// Presentation metadata for one tool, built once at startup.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub description: String,
    pub input_schema: Map<String, Value>,
}

/// Build the descriptor for a catalog entry.
pub fn describe(spec: &EndpointSpec) -> ToolDescriptor {
    ToolDescriptor {
        name: spec.name,
        method: spec.method,
        path: spec.path,
        description: description(spec),
        input_schema: input_schema(spec),
    }
}

/// Human-readable description: the HTTP contract, the summary, and one line
/// per parameter with its required/optional marker.
fn description(spec: &EndpointSpec) -> String {
    let mut parts = vec![format!("{} {}", spec.method, spec.path)];
    if !spec.summary.is_empty() {
        parts.push(spec.summary.to_string());
    }
    if !spec.params.is_empty() {
        parts.push("Parameters:".to_string());
        for param in spec.params {
            let required = if param.required { "required" } else { "optional" };
            parts.push(format!(
                "- {} ({}): {}",
                param.name, required, param.description
            ));
        }
    }
    parts.join("\n")
}

/// JSON Schema for the tool's argument object.
fn input_schema(spec: &EndpointSpec) -> Map<String, Value> {
    let mut properties = Map::new();
    for param in spec.params {
        properties.insert(
            param.name.to_string(),
            json!({
                "type": param.kind.schema_type(),
                "description": param.description,
            }),
        );
    }
    let required: Vec<&str> = spec
        .params
        .iter()
        .filter(|p| p.required)
        .map(|p| p.name)
        .collect();

    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), json!(required));
    }
    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParamKind as K, ParamSpec};

    static SPEC: EndpointSpec = EndpointSpec::new(
        "get_widget",
        HttpMethod::Get,
        "/api/2.0/widgets/{id}",
        "widget",
        "Get a widget.",
        &[
            ParamSpec::required("id", K::String, "Widget ID"),
            ParamSpec::optional("verbose", K::Boolean, "Include details"),
        ],
    );

    #[test]
    fn description_lists_contract_and_params() {
        let descriptor = describe(&SPEC);
        assert!(descriptor.description.starts_with("GET /api/2.0/widgets/{id}"));
        assert!(descriptor.description.contains("- id (required): Widget ID"));
        assert!(descriptor.description.contains("- verbose (optional): Include details"));
    }

    #[test]
    fn schema_marks_required_fields() {
        let schema = input_schema(&SPEC);
        assert_eq!(schema["type"], json!("object"));
        assert_eq!(schema["properties"]["id"]["type"], json!("string"));
        assert_eq!(schema["required"], json!(["id"]));
    }

    #[test]
    fn schema_omits_required_when_all_optional() {
        static ALL_OPTIONAL: EndpointSpec = EndpointSpec::new(
            "list_widgets",
            HttpMethod::Get,
            "/api/2.0/widgets",
            "widget",
            "",
            &[ParamSpec::optional("limit", K::Integer, "Page size")],
        );
        let schema = input_schema(&ALL_OPTIONAL);
        assert!(!schema.contains_key("required"));
    }
}
