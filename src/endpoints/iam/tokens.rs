//! Personal access token endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_token",
        Post,
        "/api/2.0/token/create",
        "token",
        "Create a personal access token for the caller.",
        &[
            ParamSpec::optional("comment", K::String, "Purpose of the token"),
            ParamSpec::optional("lifetime_seconds", K::Integer, "Token lifetime; omit for no expiry"),
        ],
    ),
    EndpointSpec::new(
        "list_tokens",
        Get,
        "/api/2.0/token/list",
        "token",
        "List the caller's personal access tokens.",
        &[],
    ),
    EndpointSpec::new(
        "revoke_token",
        Post,
        "/api/2.0/token/delete",
        "token",
        "Revoke a personal access token.",
        &[ParamSpec::required("token_id", K::String, "ID of the token to revoke")],
    )
    .id_param("token_id"),
];
