//! SQL warehouse endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "list_warehouses",
        Get,
        "/api/2.0/sql/warehouses",
        "warehouse",
        "List SQL warehouses.",
        &[],
    ),
    EndpointSpec::new(
        "create_warehouse",
        Post,
        "/api/2.0/sql/warehouses",
        "warehouse",
        "Create a SQL warehouse.",
        &[
            ParamSpec::required("name", K::String, "Warehouse name"),
            ParamSpec::required("cluster_size", K::String, "T-shirt size, e.g. \"2X-Small\""),
            ParamSpec::optional("auto_stop_mins", K::Integer, "Idle minutes before auto-stop"),
            ParamSpec::optional("min_num_clusters", K::Integer, "Minimum cluster count"),
            ParamSpec::optional("max_num_clusters", K::Integer, "Maximum cluster count"),
            ParamSpec::optional("enable_photon", K::Boolean, "Use the Photon engine"),
            ParamSpec::optional("additional_params", K::Object, "Extra warehouse settings merged into the request").flatten(),
        ],
    ),
    EndpointSpec::new(
        "get_warehouse",
        Get,
        "/api/2.0/sql/warehouses/{id}",
        "warehouse",
        "Get details of a SQL warehouse.",
        &[ParamSpec::required("id", K::String, "ID of the warehouse")],
    )
    .id_param("id"),
    EndpointSpec::new(
        "update_warehouse",
        Patch,
        "/api/2.0/sql/warehouses/{id}",
        "warehouse",
        "Update a SQL warehouse's configuration.",
        &[
            ParamSpec::required("id", K::String, "ID of the warehouse to update"),
            ParamSpec::optional("name", K::String, "New warehouse name"),
            ParamSpec::optional("cluster_size", K::String, "New t-shirt size"),
            ParamSpec::optional("auto_stop_mins", K::Integer, "New auto-stop window"),
            ParamSpec::optional("min_num_clusters", K::Integer, "New minimum cluster count"),
            ParamSpec::optional("max_num_clusters", K::Integer, "New maximum cluster count"),
            ParamSpec::optional("enable_photon", K::Boolean, "Use the Photon engine"),
            ParamSpec::optional("additional_params", K::Object, "Extra warehouse settings merged into the request").flatten(),
        ],
    )
    .id_param("id"),
    EndpointSpec::new(
        "delete_warehouse",
        Delete,
        "/api/2.0/sql/warehouses/{id}",
        "warehouse",
        "Delete a SQL warehouse.",
        &[ParamSpec::required("id", K::String, "ID of the warehouse to delete")],
    )
    .id_param("id"),
    EndpointSpec::new(
        "start_warehouse",
        Post,
        "/api/2.0/sql/warehouses/{id}/start",
        "warehouse",
        "Start a stopped SQL warehouse.",
        &[ParamSpec::required("id", K::String, "ID of the warehouse to start")],
    )
    .id_param("id"),
    EndpointSpec::new(
        "stop_warehouse",
        Post,
        "/api/2.0/sql/warehouses/{id}/stop",
        "warehouse",
        "Stop a running SQL warehouse.",
        &[ParamSpec::required("id", K::String, "ID of the warehouse to stop")],
    )
    .id_param("id"),
];
