//! Saved SQL query endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_query",
        Post,
        "/api/2.0/sql/queries",
        "query",
        "Create a saved SQL query.",
        &[
            ParamSpec::required("name", K::String, "Query name"),
            ParamSpec::optional("description", K::String, "Query description"),
            ParamSpec::optional("query", K::String, "SQL text"),
            ParamSpec::optional("parent", K::String, "Parent folder identifier"),
            ParamSpec::optional("run_as_role", K::String, "Role the query runs as: viewer or owner"),
        ],
    ),
    EndpointSpec::new(
        "list_queries",
        Get,
        "/api/2.0/sql/queries",
        "query",
        "List saved SQL queries.",
        &[
            ParamSpec::optional("page_size", K::Integer, "Results per page"),
            ParamSpec::optional("page", K::Integer, "Page number"),
            ParamSpec::optional("order", K::String, "Sort field, prefix with - for descending"),
            ParamSpec::optional("q", K::String, "Full-text search term"),
        ],
    ),
    EndpointSpec::new(
        "get_query",
        Get,
        "/api/2.0/sql/queries/{query_id}",
        "query",
        "Get a saved SQL query.",
        &[ParamSpec::required("query_id", K::String, "ID of the query")],
    )
    .id_param("query_id"),
    EndpointSpec::new(
        "update_query",
        Post,
        "/api/2.0/sql/queries/{query_id}",
        "query",
        "Update a saved SQL query.",
        &[
            ParamSpec::required("query_id", K::String, "ID of the query to update"),
            ParamSpec::optional("name", K::String, "New query name"),
            ParamSpec::optional("description", K::String, "New description"),
            ParamSpec::optional("query", K::String, "New SQL text"),
            ParamSpec::optional("run_as_role", K::String, "New run-as role"),
        ],
    )
    .id_param("query_id"),
    EndpointSpec::new(
        "delete_query",
        Delete,
        "/api/2.0/sql/queries/{query_id}",
        "query",
        "Move a saved SQL query to trash.",
        &[ParamSpec::required("query_id", K::String, "ID of the query to delete")],
    )
    .id_param("query_id"),
    EndpointSpec::new(
        "run_query",
        Post,
        "/api/2.0/sql/queries/{query_id}/run",
        "query",
        "Execute a saved SQL query.",
        &[
            ParamSpec::required("query_id", K::String, "ID of the query to run"),
            ParamSpec::optional("parameters", K::Object, "Query parameter values"),
            ParamSpec::optional("warehouse_id", K::String, "Warehouse override for this run"),
        ],
    )
    .id_param("query_id"),
];
