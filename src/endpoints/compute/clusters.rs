//! Cluster lifecycle endpoints.

use crate::types::{Args, EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

/// A cluster needs either a fixed worker count or an autoscale range.
fn validate_create_cluster(args: &Args) -> Result<(), String> {
    if !args.contains_key("num_workers") && !args.contains_key("autoscale") {
        return Err("Either 'num_workers' or 'autoscale' must be specified".into());
    }
    Ok(())
}

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_cluster",
        Post,
        "/api/2.0/clusters/create",
        "cluster",
        "Create a new Databricks cluster.",
        &[
            ParamSpec::required("cluster_name", K::String, "Name for the new cluster"),
            ParamSpec::required("spark_version", K::String, "Spark runtime version, e.g. \"13.3.x-scala2.12\""),
            ParamSpec::required("node_type_id", K::String, "Worker node type, e.g. \"i3.xlarge\""),
            ParamSpec::optional("num_workers", K::Integer, "Fixed number of worker nodes"),
            ParamSpec::optional("autoscale", K::Object, "Autoscale range with min_workers and max_workers"),
            ParamSpec::optional("spark_conf", K::Object, "Spark configuration key/value pairs"),
            ParamSpec::optional("aws_attributes", K::Object, "AWS-specific attributes"),
            ParamSpec::optional("ssh_public_keys", K::Array, "SSH public keys installed on cluster nodes"),
            ParamSpec::optional("custom_tags", K::Object, "Custom tags applied to cluster resources"),
            ParamSpec::optional("cluster_log_conf", K::Object, "Destination for cluster log delivery"),
            ParamSpec::optional("init_scripts", K::Array, "Init scripts run on cluster start"),
            ParamSpec::optional("spark_env_vars", K::Object, "Environment variables for Spark processes"),
            ParamSpec::optional("enable_elastic_disk", K::Boolean, "Autoscale local storage"),
            ParamSpec::optional("driver_node_type_id", K::String, "Driver node type when it differs from workers"),
            ParamSpec::optional("runtime_engine", K::String, "Runtime engine, STANDARD or PHOTON"),
        ],
    )
    .validate(validate_create_cluster),
    EndpointSpec::new(
        "list_clusters",
        Get,
        "/api/2.0/clusters/list",
        "cluster",
        "List all clusters in the workspace.",
        &[],
    ),
    EndpointSpec::new(
        "get_cluster",
        Get,
        "/api/2.0/clusters/get",
        "cluster",
        "Get information about a specific cluster.",
        &[ParamSpec::required("cluster_id", K::String, "ID of the cluster")],
    )
    .id_param("cluster_id"),
    EndpointSpec::new(
        "resize_cluster",
        Post,
        "/api/2.0/clusters/resize",
        "cluster",
        "Resize a cluster to a new worker count.",
        &[
            ParamSpec::required("cluster_id", K::String, "ID of the cluster to resize"),
            ParamSpec::required("num_workers", K::Integer, "Target number of workers"),
        ],
    )
    .id_param("cluster_id"),
    EndpointSpec::new(
        "start_cluster",
        Post,
        "/api/2.0/clusters/start",
        "cluster",
        "Start a terminated cluster.",
        &[ParamSpec::required("cluster_id", K::String, "ID of the cluster to start")],
    )
    .id_param("cluster_id"),
    EndpointSpec::new(
        "restart_cluster",
        Post,
        "/api/2.0/clusters/restart",
        "cluster",
        "Restart a running cluster.",
        &[ParamSpec::required("cluster_id", K::String, "ID of the cluster to restart")],
    )
    .id_param("cluster_id"),
    EndpointSpec::new(
        "terminate_cluster",
        Post,
        "/api/2.0/clusters/delete",
        "cluster",
        "Terminate a cluster (it can be restarted later).",
        &[ParamSpec::required("cluster_id", K::String, "ID of the cluster to terminate")],
    )
    .id_param("cluster_id"),
    EndpointSpec::new(
        "delete_cluster",
        Post,
        "/api/2.1/clusters/permanent-delete",
        "cluster",
        "Permanently delete a cluster.",
        &[ParamSpec::required("cluster_id", K::String, "ID of the cluster to delete")],
    )
    .id_param("cluster_id"),
    EndpointSpec::new(
        "get_cluster_events",
        Post,
        "/api/2.0/clusters/events",
        "cluster",
        "Retrieve the event log of a cluster.",
        &[
            ParamSpec::required("cluster_id", K::String, "ID of the cluster"),
            ParamSpec::optional("start_time", K::Integer, "Earliest event timestamp (epoch millis)"),
            ParamSpec::optional("end_time", K::Integer, "Latest event timestamp (epoch millis)"),
            ParamSpec::optional("order", K::String, "Sort order, ASC or DESC"),
            ParamSpec::optional("event_types", K::Array, "Event types to include"),
            ParamSpec::optional("offset", K::Integer, "Pagination offset"),
            ParamSpec::optional("limit", K::Integer, "Maximum number of events"),
        ],
    )
    .id_param("cluster_id"),
    EndpointSpec::new(
        "list_node_types",
        Get,
        "/api/2.0/clusters/list-node-types",
        "node type",
        "List available node types for clusters.",
        &[],
    ),
    EndpointSpec::new(
        "list_spark_versions",
        Get,
        "/api/2.0/clusters/spark-versions",
        "Spark version",
        "List available Spark runtime versions.",
        &[],
    ),
    EndpointSpec::new(
        "pin_cluster",
        Post,
        "/api/2.0/clusters/pin",
        "cluster",
        "Pin a cluster so its configuration is retained.",
        &[ParamSpec::required("cluster_id", K::String, "ID of the cluster to pin")],
    )
    .id_param("cluster_id"),
    EndpointSpec::new(
        "unpin_cluster",
        Post,
        "/api/2.0/clusters/unpin",
        "cluster",
        "Unpin a previously pinned cluster.",
        &[ParamSpec::required("cluster_id", K::String, "ID of the cluster to unpin")],
    )
    .id_param("cluster_id"),
];
