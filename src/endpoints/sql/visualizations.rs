//! Query visualization endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_visualization",
        Post,
        "/api/2.0/sql/queries/{query_id}/visualizations",
        "visualization",
        "Create a visualization on a saved query.",
        &[
            ParamSpec::required("query_id", K::String, "Query the visualization belongs to"),
            ParamSpec::required("visualization_type", K::String, "Visualization type, e.g. chart, table, map").wire("type"),
            ParamSpec::required("name", K::String, "Visualization name"),
            ParamSpec::required("options", K::Object, "Rendering options"),
            ParamSpec::optional("description", K::String, "Visualization description"),
        ],
    )
    .id_param("query_id"),
    EndpointSpec::new(
        "update_visualization",
        Post,
        "/api/2.0/sql/visualizations/{visualization_id}",
        "visualization",
        "Update a visualization.",
        &[
            ParamSpec::required("visualization_id", K::String, "ID of the visualization to update"),
            ParamSpec::optional("visualization_type", K::String, "New visualization type").wire("type"),
            ParamSpec::optional("name", K::String, "New visualization name"),
            ParamSpec::optional("options", K::Object, "New rendering options"),
            ParamSpec::optional("description", K::String, "New description"),
        ],
    )
    .id_param("visualization_id"),
    EndpointSpec::new(
        "delete_visualization",
        Delete,
        "/api/2.0/sql/visualizations/{visualization_id}",
        "visualization",
        "Delete a visualization.",
        &[ParamSpec::required("visualization_id", K::String, "ID of the visualization to delete")],
    )
    .id_param("visualization_id"),
];
