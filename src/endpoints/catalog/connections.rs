//! Unity Catalog connection endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_connection",
        Post,
        "/api/2.1/unity-catalog/connections",
        "connection",
        "Create a connection to an external data source.",
        &[
            ParamSpec::required("name", K::String, "Connection name"),
            ParamSpec::required("connection_type", K::String, "Connection type, e.g. MYSQL, SNOWFLAKE"),
            ParamSpec::required("options", K::Object, "Connection options (host, port, credentials)"),
            ParamSpec::optional("comment", K::String, "Connection description"),
            ParamSpec::optional("properties", K::Object, "Additional properties"),
        ],
    )
    .id_param("name"),
    EndpointSpec::new(
        "list_connections",
        Get,
        "/api/2.1/unity-catalog/connections",
        "connection",
        "List connections.",
        &[ParamSpec::optional("max_results", K::Integer, "Maximum entries to return")],
    ),
    EndpointSpec::new(
        "get_connection",
        Get,
        "/api/2.1/unity-catalog/connections/{name}",
        "connection",
        "Get a connection.",
        &[ParamSpec::required("name", K::String, "Name of the connection")],
    )
    .id_param("name"),
    EndpointSpec::new(
        "update_connection",
        Patch,
        "/api/2.1/unity-catalog/connections/{name}",
        "connection",
        "Update a connection.",
        &[
            ParamSpec::required("name", K::String, "Name of the connection to update"),
            ParamSpec::optional("new_name", K::String, "New connection name"),
            ParamSpec::optional("options", K::Object, "New connection options"),
            ParamSpec::optional("comment", K::String, "New description"),
            ParamSpec::optional("properties", K::Object, "New properties"),
            ParamSpec::optional("owner", K::String, "New owner"),
        ],
    )
    .id_param("name"),
    EndpointSpec::new(
        "delete_connection",
        Delete,
        "/api/2.1/unity-catalog/connections/{name}",
        "connection",
        "Delete a connection.",
        &[ParamSpec::required("name", K::String, "Name of the connection to delete")],
    )
    .id_param("name"),
];
