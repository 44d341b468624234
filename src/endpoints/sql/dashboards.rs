//! SQL dashboard endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_dashboard",
        Post,
        "/api/2.0/sql/dashboards",
        "dashboard",
        "Create a SQL dashboard.",
        &[
            ParamSpec::required("name", K::String, "Dashboard name"),
            ParamSpec::optional("description", K::String, "Dashboard description"),
            ParamSpec::optional("tags", K::Array, "Tags attached to the dashboard"),
        ],
    ),
    EndpointSpec::new(
        "list_dashboards",
        Get,
        "/api/2.0/sql/dashboards",
        "dashboard",
        "List SQL dashboards.",
        &[
            ParamSpec::optional("page_size", K::Integer, "Results per page"),
            ParamSpec::optional("page", K::Integer, "Page number"),
            ParamSpec::optional("order", K::String, "Sort field"),
            ParamSpec::optional("q", K::String, "Full-text search term"),
        ],
    ),
    EndpointSpec::new(
        "get_dashboard",
        Get,
        "/api/2.0/sql/dashboards/{dashboard_id}",
        "dashboard",
        "Get a SQL dashboard.",
        &[ParamSpec::required("dashboard_id", K::String, "ID of the dashboard")],
    )
    .id_param("dashboard_id"),
    EndpointSpec::new(
        "update_dashboard",
        Post,
        "/api/2.0/sql/dashboards/{dashboard_id}",
        "dashboard",
        "Update a SQL dashboard.",
        &[
            ParamSpec::required("dashboard_id", K::String, "ID of the dashboard to update"),
            ParamSpec::optional("name", K::String, "New dashboard name"),
            ParamSpec::optional("description", K::String, "New description"),
            ParamSpec::optional("tags", K::Array, "New tag list"),
        ],
    )
    .id_param("dashboard_id"),
    EndpointSpec::new(
        "delete_dashboard",
        Delete,
        "/api/2.0/sql/dashboards/{dashboard_id}",
        "dashboard",
        "Move a SQL dashboard to trash.",
        &[ParamSpec::required("dashboard_id", K::String, "ID of the dashboard to delete")],
    )
    .id_param("dashboard_id"),
];
