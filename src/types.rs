//! Shared types: the declarative endpoint catalog entries and the HTTP
//! method enum used by the request executor.

use serde_json::{Map, Value};
use std::fmt;

// ---------------------------------------------------------------------------
// HTTP methods
// ---------------------------------------------------------------------------

/// HTTP verbs supported by the Databricks REST surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Whether non-path parameters travel in the query string (GET and
    /// DELETE) or the JSON body (everything else).
    pub fn sends_query(self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

// ---------------------------------------------------------------------------
// Endpoint catalog entries
// ---------------------------------------------------------------------------

/// JSON type of a tool parameter, used for input-schema generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParamKind {
    /// JSON Schema type name.
    pub fn schema_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

/// One parameter of an endpoint, declared in the static catalog.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
    /// Name to use on the wire when it differs from the tool-facing name
    /// (e.g. `command_id` -> `commandId`).
    pub wire: Option<&'static str>,
    /// For object params whose entries are merged into the request body
    /// instead of nested under the parameter name.
    pub flatten: bool,
}

impl ParamSpec {
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
            wire: None,
            flatten: false,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
            wire: None,
            flatten: false,
        }
    }

    pub const fn wire(mut self, wire: &'static str) -> Self {
        self.wire = Some(wire);
        self
    }

    pub const fn flatten(mut self) -> Self {
        self.flatten = true;
        self
    }

    /// The key this parameter is sent under.
    pub fn wire_name(&self) -> &'static str {
        self.wire.unwrap_or(self.name)
    }
}

/// Argument bundle passed to a tool invocation.
pub type Args = Map<String, Value>;

/// Pre-flight validation hook run after the required-parameter check and
/// before any HTTP call. Returns a human-readable message on rejection.
pub type ValidateFn = fn(&Args) -> Result<(), String>;

/// One entry in the static endpoint catalog. Each entry maps a tool name to
/// exactly one Databricks REST call.
#[derive(Debug, Clone, Copy)]
pub struct EndpointSpec {
    /// Tool name exposed over MCP.
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path, possibly with `{placeholder}` segments filled from arguments.
    pub path: &'static str,
    /// Resource label used in error messages ("cluster", "job", ...).
    pub resource: &'static str,
    /// One-line summary shown in the tool description.
    pub summary: &'static str,
    pub params: &'static [ParamSpec],
    /// Argument quoted in "not found" messages, when one identifies the
    /// resource ("Cluster 123 not found").
    pub id_param: Option<&'static str>,
    pub validate: Option<ValidateFn>,
    /// Composite operations sequence multiple calls and are dispatched to a
    /// dedicated handler instead of the generic single-call path.
    pub composite: bool,
    /// Fixed body fields sent on every call, as (key, raw JSON) pairs,
    /// e.g. the constant SCIM `schemas` array.
    pub body_constants: &'static [(&'static str, &'static str)],
}

impl EndpointSpec {
    pub const fn new(
        name: &'static str,
        method: HttpMethod,
        path: &'static str,
        resource: &'static str,
        summary: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self {
            name,
            method,
            path,
            resource,
            summary,
            params,
            id_param: None,
            validate: None,
            composite: false,
            body_constants: &[],
        }
    }

    pub const fn id_param(mut self, id_param: &'static str) -> Self {
        self.id_param = Some(id_param);
        self
    }

    pub const fn validate(mut self, validate: ValidateFn) -> Self {
        self.validate = Some(validate);
        self
    }

    pub const fn composite(mut self) -> Self {
        self.composite = true;
        self
    }

    pub const fn body_constants(
        mut self,
        constants: &'static [(&'static str, &'static str)],
    ) -> Self {
        self.body_constants = constants;
        self
    }

    /// Parameter names referenced by `{placeholder}` segments in the path.
    pub fn path_params(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            rest = &rest[start + 1..];
            if let Some(end) = rest.find('}') {
                names.push(&rest[..end]);
                rest = &rest[end + 1..];
            } else {
                break;
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_display_matches_wire_form() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
    }

    #[test]
    fn path_params_are_extracted_in_order() {
        let spec = EndpointSpec::new(
            "get_pipeline_update",
            HttpMethod::Get,
            "/api/2.0/pipelines/{pipeline_id}/updates/{update_id}",
            "pipeline update",
            "",
            &[],
        );
        assert_eq!(spec.path_params(), vec!["pipeline_id", "update_id"]);
    }

    #[test]
    fn wire_name_defaults_to_param_name() {
        const P: ParamSpec =
            ParamSpec::required("command_id", ParamKind::String, "").wire("commandId");
        assert_eq!(P.wire_name(), "commandId");
        const Q: ParamSpec = ParamSpec::optional("limit", ParamKind::Integer, "");
        assert_eq!(Q.wire_name(), "limit");
    }
}
