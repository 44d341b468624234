//! Cluster library endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "install_libraries",
        Post,
        "/api/2.0/libraries/install",
        "library",
        "Install libraries on a cluster.",
        &[
            ParamSpec::required("cluster_id", K::String, "Target cluster ID"),
            ParamSpec::required("libraries", K::Array, "Library specifications to install"),
        ],
    )
    .id_param("cluster_id"),
    EndpointSpec::new(
        "uninstall_libraries",
        Post,
        "/api/2.0/libraries/uninstall",
        "library",
        "Mark libraries for removal from a cluster on restart.",
        &[
            ParamSpec::required("cluster_id", K::String, "Target cluster ID"),
            ParamSpec::required("libraries", K::Array, "Library specifications to uninstall"),
        ],
    )
    .id_param("cluster_id"),
    EndpointSpec::new(
        "get_library_status",
        Get,
        "/api/2.0/libraries/cluster-status",
        "library",
        "Get library statuses for one cluster.",
        &[ParamSpec::required("cluster_id", K::String, "Cluster to inspect")],
    )
    .id_param("cluster_id"),
    EndpointSpec::new(
        "get_all_libraries",
        Get,
        "/api/2.0/libraries/all-cluster-statuses",
        "library",
        "Get library statuses across all clusters.",
        &[],
    ),
];
