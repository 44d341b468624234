//! Lakeview dashboard endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "list_lakeviews",
        Get,
        "/api/2.0/lakeview/lakeviews",
        "lakeview",
        "List Lakeview dashboards.",
        &[],
    ),
    EndpointSpec::new(
        "create_lakeview",
        Post,
        "/api/2.0/lakeview/lakeviews",
        "lakeview",
        "Create a Lakeview dashboard.",
        &[
            ParamSpec::required("name", K::String, "Dashboard name"),
            ParamSpec::required("definition", K::Object, "Dashboard definition document"),
            ParamSpec::optional("description", K::String, "Dashboard description"),
        ],
    ),
    EndpointSpec::new(
        "get_lakeview",
        Get,
        "/api/2.0/lakeview/lakeviews/{id}",
        "lakeview",
        "Get a Lakeview dashboard.",
        &[ParamSpec::required("id", K::String, "ID of the dashboard")],
    )
    .id_param("id"),
    EndpointSpec::new(
        "update_lakeview",
        Patch,
        "/api/2.0/lakeview/lakeviews/{id}",
        "lakeview",
        "Update a Lakeview dashboard.",
        &[
            ParamSpec::required("id", K::String, "ID of the dashboard to update"),
            ParamSpec::optional("name", K::String, "New dashboard name"),
            ParamSpec::optional("definition", K::Object, "New definition document"),
            ParamSpec::optional("description", K::String, "New description"),
        ],
    )
    .id_param("id"),
    EndpointSpec::new(
        "delete_lakeview",
        Delete,
        "/api/2.0/lakeview/lakeviews/{id}",
        "lakeview",
        "Delete a Lakeview dashboard.",
        &[ParamSpec::required("id", K::String, "ID of the dashboard to delete")],
    )
    .id_param("id"),
];
