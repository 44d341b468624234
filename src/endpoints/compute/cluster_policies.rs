//! Cluster policy endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_cluster_policy",
        Post,
        "/api/2.0/policies/clusters/create",
        "cluster policy",
        "Create a cluster policy.",
        &[
            ParamSpec::required("name", K::String, "Policy name"),
            ParamSpec::required("definition", K::Object, "Policy definition document"),
            ParamSpec::optional("description", K::String, "Human-readable description"),
            ParamSpec::optional("max_clusters_per_user", K::Integer, "Maximum clusters per user under this policy"),
        ],
    ),
    EndpointSpec::new(
        "edit_cluster_policy",
        Post,
        "/api/2.0/policies/clusters/edit",
        "cluster policy",
        "Update an existing cluster policy.",
        &[
            ParamSpec::required("policy_id", K::String, "ID of the policy to edit"),
            ParamSpec::optional("name", K::String, "New policy name"),
            ParamSpec::optional("definition", K::Object, "New policy definition document"),
            ParamSpec::optional("description", K::String, "New description"),
            ParamSpec::optional("max_clusters_per_user", K::Integer, "New per-user cluster limit"),
        ],
    )
    .id_param("policy_id"),
    EndpointSpec::new(
        "delete_cluster_policy",
        Post,
        "/api/2.0/policies/clusters/delete",
        "cluster policy",
        "Delete a cluster policy.",
        &[ParamSpec::required("policy_id", K::String, "ID of the policy to delete")],
    )
    .id_param("policy_id"),
    EndpointSpec::new(
        "get_cluster_policy",
        Get,
        "/api/2.0/policies/clusters/get",
        "cluster policy",
        "Get a cluster policy.",
        &[ParamSpec::required("policy_id", K::String, "ID of the policy")],
    )
    .id_param("policy_id"),
    EndpointSpec::new(
        "list_cluster_policies",
        Get,
        "/api/2.0/policies/clusters/list",
        "cluster policy",
        "List cluster policies.",
        &[
            ParamSpec::optional("sort_by", K::String, "Field to sort by, e.g. POLICY_CREATION_TIME"),
            ParamSpec::optional("sort_order", K::String, "Sort order, ASC or DESC"),
        ],
    ),
    EndpointSpec::new(
        "get_cluster_policy_permissions",
        Get,
        "/api/2.0/permissions/cluster-policies/{policy_id}",
        "cluster policy",
        "Get permissions on a cluster policy.",
        &[ParamSpec::required("policy_id", K::String, "ID of the policy")],
    )
    .id_param("policy_id"),
    EndpointSpec::new(
        "update_cluster_policy_permissions",
        Patch,
        "/api/2.0/permissions/cluster-policies/{policy_id}",
        "cluster policy",
        "Update permissions on a cluster policy.",
        &[
            ParamSpec::required("policy_id", K::String, "ID of the policy"),
            ParamSpec::required("access_control_list", K::Array, "Access control entries to apply"),
        ],
    )
    .id_param("policy_id"),
];
