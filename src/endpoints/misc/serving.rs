//! Model serving endpoint endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_serving_endpoint",
        Post,
        "/api/2.0/serving-endpoints",
        "serving endpoint",
        "Create a model serving endpoint.",
        &[
            ParamSpec::required("name", K::String, "Endpoint name"),
            ParamSpec::required("config", K::Object, "Served model configuration"),
        ],
    )
    .id_param("name"),
    EndpointSpec::new(
        "get_serving_endpoint",
        Get,
        "/api/2.0/serving-endpoints/{name}",
        "serving endpoint",
        "Get a serving endpoint.",
        &[ParamSpec::required("name", K::String, "Name of the endpoint")],
    )
    .id_param("name"),
    EndpointSpec::new(
        "list_serving_endpoints",
        Get,
        "/api/2.0/serving-endpoints",
        "serving endpoint",
        "List serving endpoints.",
        &[],
    ),
    EndpointSpec::new(
        "update_serving_endpoint",
        Put,
        "/api/2.0/serving-endpoints/{name}/config",
        "serving endpoint",
        "Update the served model configuration of an endpoint.",
        &[
            ParamSpec::required("name", K::String, "Name of the endpoint to update"),
            ParamSpec::required("config", K::Object, "New served model configuration").flatten(),
        ],
    )
    .id_param("name"),
    EndpointSpec::new(
        "delete_serving_endpoint",
        Delete,
        "/api/2.0/serving-endpoints/{name}",
        "serving endpoint",
        "Delete a serving endpoint.",
        &[ParamSpec::required("name", K::String, "Name of the endpoint to delete")],
    )
    .id_param("name"),
    EndpointSpec::new(
        "get_serving_endpoint_logs",
        Get,
        "/api/2.0/serving-endpoints/{name}/logs",
        "serving endpoint",
        "Get build and service logs of a serving endpoint.",
        &[
            ParamSpec::required("name", K::String, "Name of the endpoint"),
            ParamSpec::optional("start_timestamp", K::Integer, "Earliest log timestamp (epoch millis)"),
            ParamSpec::optional("end_timestamp", K::Integer, "Latest log timestamp (epoch millis)"),
            ParamSpec::optional("limit", K::Integer, "Maximum log lines"),
        ],
    )
    .id_param("name"),
    EndpointSpec::new(
        "query_serving_endpoint",
        Post,
        "/api/2.0/serving-endpoints/{name}/invocations",
        "serving endpoint",
        "Send an inference request to a serving endpoint.",
        &[
            ParamSpec::required("name", K::String, "Name of the endpoint to query"),
            ParamSpec::optional("dataframe_records", K::Array, "Input rows in records orientation"),
            ParamSpec::optional("dataframe_split", K::Object, "Input rows in split orientation"),
            ParamSpec::optional("inputs", K::Array, "Raw tensor inputs"),
            ParamSpec::optional("tensor_inputs", K::Object, "Named tensor inputs"),
            ParamSpec::optional("input_type", K::String, "Explicit input payload type"),
        ],
    )
    .id_param("name"),
    EndpointSpec::new(
        "get_serving_endpoint_permission_levels",
        Get,
        "/api/2.0/permissions/serving-endpoints/{name}/permissionLevels",
        "serving endpoint",
        "List permission levels a serving endpoint supports.",
        &[ParamSpec::required("name", K::String, "Name of the endpoint")],
    )
    .id_param("name"),
    EndpointSpec::new(
        "get_serving_endpoint_permissions",
        Get,
        "/api/2.0/permissions/serving-endpoints/{name}",
        "serving endpoint",
        "Get permissions on a serving endpoint.",
        &[ParamSpec::required("name", K::String, "Name of the endpoint")],
    )
    .id_param("name"),
    EndpointSpec::new(
        "update_serving_endpoint_permissions",
        Patch,
        "/api/2.0/permissions/serving-endpoints/{name}",
        "serving endpoint",
        "Update permissions on a serving endpoint.",
        &[
            ParamSpec::required("name", K::String, "Name of the endpoint"),
            ParamSpec::required("access_control_list", K::Array, "Access control entries to apply"),
        ],
    )
    .id_param("name"),
];
