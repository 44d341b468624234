//! Secret scope and secret endpoints.

use crate::types::{Args, EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

/// A secret needs a value in exactly one encoding.
fn validate_put_secret(args: &Args) -> Result<(), String> {
    if !args.contains_key("string_value") && !args.contains_key("bytes_value") {
        return Err("Either string_value or bytes_value must be provided".into());
    }
    Ok(())
}

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_secret_scope",
        Post,
        "/api/2.0/secrets/scopes/create",
        "secret scope",
        "Create a secret scope.",
        &[
            ParamSpec::required("scope", K::String, "Scope name"),
            ParamSpec::optional("initial_manage_principal", K::String, "Principal granted MANAGE on the scope"),
        ],
    )
    .id_param("scope"),
    EndpointSpec::new(
        "list_secret_scopes",
        Get,
        "/api/2.0/secrets/scopes/list",
        "secret scope",
        "List secret scopes.",
        &[],
    ),
    EndpointSpec::new(
        "delete_secret_scope",
        Post,
        "/api/2.0/secrets/scopes/delete",
        "secret scope",
        "Delete a secret scope.",
        &[ParamSpec::required("scope", K::String, "Scope to delete")],
    )
    .id_param("scope"),
    EndpointSpec::new(
        "put_secret",
        Post,
        "/api/2.0/secrets/put",
        "secret",
        "Create or overwrite a secret in a scope.",
        &[
            ParamSpec::required("scope", K::String, "Scope holding the secret"),
            ParamSpec::required("key", K::String, "Secret key"),
            ParamSpec::optional("string_value", K::String, "Secret value as UTF-8 text"),
            ParamSpec::optional("bytes_value", K::String, "Secret value as base64-encoded bytes"),
        ],
    )
    .id_param("key")
    .validate(validate_put_secret),
    EndpointSpec::new(
        "delete_secret",
        Post,
        "/api/2.0/secrets/delete",
        "secret",
        "Delete a secret from a scope.",
        &[
            ParamSpec::required("scope", K::String, "Scope holding the secret"),
            ParamSpec::required("key", K::String, "Secret key to delete"),
        ],
    )
    .id_param("key"),
    EndpointSpec::new(
        "list_secrets",
        Get,
        "/api/2.0/secrets/list",
        "secret",
        "List secret keys in a scope (values are never returned).",
        &[ParamSpec::required("scope", K::String, "Scope to list")],
    )
    .id_param("scope"),
    EndpointSpec::new(
        "get_secret",
        Get,
        "/api/2.0/secrets/get",
        "secret",
        "Get a secret's value (requires READ permission on the scope).",
        &[
            ParamSpec::required("scope", K::String, "Scope holding the secret"),
            ParamSpec::required("key", K::String, "Secret key to fetch"),
        ],
    )
    .id_param("key"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn put_secret_needs_a_value() {
        let missing = json!({"scope": "s", "key": "k"});
        assert!(validate_put_secret(missing.as_object().unwrap()).is_err());
        let with_string = json!({"scope": "s", "key": "k", "string_value": "v"});
        assert!(validate_put_secret(with_string.as_object().unwrap()).is_ok());
    }
}
