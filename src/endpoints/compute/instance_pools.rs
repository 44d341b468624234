//! Instance pool endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_instance_pool",
        Post,
        "/api/2.0/instance-pools/create",
        "instance pool",
        "Create an instance pool.",
        &[
            ParamSpec::required("instance_pool_name", K::String, "Name for the pool"),
            ParamSpec::required("node_type_id", K::String, "Node type of pooled instances"),
            ParamSpec::optional("min_idle_instances", K::Integer, "Minimum idle instances to keep warm"),
            ParamSpec::optional("max_capacity", K::Integer, "Maximum pool capacity"),
            ParamSpec::optional("idle_instance_autotermination_minutes", K::Integer, "Idle minutes before instances terminate"),
            ParamSpec::optional("enable_elastic_disk", K::Boolean, "Autoscale local storage"),
            ParamSpec::optional("disk_spec", K::Object, "Disk specification for pooled instances"),
            ParamSpec::optional("preloaded_spark_versions", K::Array, "Spark versions preloaded onto instances"),
            ParamSpec::optional("custom_tags", K::Object, "Custom tags applied to pool resources"),
        ],
    ),
    EndpointSpec::new(
        "get_instance_pool",
        Get,
        "/api/2.0/instance-pools/get",
        "instance pool",
        "Get information about an instance pool.",
        &[ParamSpec::required("instance_pool_id", K::String, "ID of the pool")],
    )
    .id_param("instance_pool_id"),
    EndpointSpec::new(
        "list_instance_pools",
        Get,
        "/api/2.0/instance-pools/list",
        "instance pool",
        "List instance pools.",
        &[],
    ),
    EndpointSpec::new(
        "edit_instance_pool",
        Post,
        "/api/2.0/instance-pools/edit",
        "instance pool",
        "Edit an instance pool.",
        &[
            ParamSpec::required("instance_pool_id", K::String, "ID of the pool to edit"),
            ParamSpec::optional("instance_pool_name", K::String, "New pool name"),
            ParamSpec::optional("min_idle_instances", K::Integer, "New minimum idle instance count"),
            ParamSpec::optional("max_capacity", K::Integer, "New maximum capacity"),
            ParamSpec::optional("idle_instance_autotermination_minutes", K::Integer, "New idle autotermination window"),
            ParamSpec::optional("custom_tags", K::Object, "New custom tags"),
        ],
    )
    .id_param("instance_pool_id"),
    EndpointSpec::new(
        "delete_instance_pool",
        Post,
        "/api/2.0/instance-pools/delete",
        "instance pool",
        "Delete an instance pool.",
        &[ParamSpec::required("instance_pool_id", K::String, "ID of the pool to delete")],
    )
    .id_param("instance_pool_id"),
];
