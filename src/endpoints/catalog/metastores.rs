//! Unity Catalog metastore endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_metastore",
        Post,
        "/api/2.1/unity-catalog/metastores",
        "metastore",
        "Create a metastore.",
        &[
            ParamSpec::required("name", K::String, "Metastore name"),
            ParamSpec::required("storage_root", K::String, "Cloud storage root for managed tables"),
            ParamSpec::optional("region", K::String, "Cloud region of the metastore"),
            ParamSpec::optional("comment", K::String, "Metastore description"),
        ],
    )
    .id_param("name"),
    EndpointSpec::new(
        "list_metastores",
        Get,
        "/api/2.1/unity-catalog/metastores",
        "metastore",
        "List metastores in the account.",
        &[],
    ),
    EndpointSpec::new(
        "get_metastore",
        Get,
        "/api/2.1/unity-catalog/metastores/{id}",
        "metastore",
        "Get a metastore.",
        &[ParamSpec::required("id", K::String, "ID of the metastore")],
    )
    .id_param("id"),
    EndpointSpec::new(
        "update_metastore",
        Patch,
        "/api/2.1/unity-catalog/metastores/{id}",
        "metastore",
        "Update a metastore.",
        &[
            ParamSpec::required("id", K::String, "ID of the metastore to update"),
            ParamSpec::optional("new_name", K::String, "New metastore name"),
            ParamSpec::optional("storage_root", K::String, "New storage root"),
            ParamSpec::optional("delta_sharing_scope", K::String, "Delta Sharing scope, INTERNAL or INTERNAL_AND_EXTERNAL"),
            ParamSpec::optional("delta_sharing_recipient_token_lifetime_in_seconds", K::Integer, "Recipient token lifetime"),
            ParamSpec::optional("delta_sharing_organization_name", K::String, "Organization name shown to recipients"),
            ParamSpec::optional("owner", K::String, "New owner"),
            ParamSpec::optional("privilege_model_version", K::String, "Privilege model version"),
            ParamSpec::optional("comment", K::String, "New description"),
        ],
    )
    .id_param("id"),
    EndpointSpec::new(
        "delete_metastore",
        Delete,
        "/api/2.1/unity-catalog/metastores/{id}",
        "metastore",
        "Delete a metastore.",
        &[
            ParamSpec::required("id", K::String, "ID of the metastore to delete"),
            ParamSpec::optional("force", K::Boolean, "Delete even if the metastore is not empty"),
        ],
    )
    .id_param("id"),
    EndpointSpec::new(
        "assign_metastore",
        Put,
        "/api/2.1/unity-catalog/workspaces/{workspace_id}/metastore",
        "metastore",
        "Assign a metastore to a workspace.",
        &[
            ParamSpec::required("workspace_id", K::Integer, "Workspace receiving the assignment"),
            ParamSpec::required("metastore_id", K::String, "Metastore to assign"),
            ParamSpec::required("default_catalog_name", K::String, "Default catalog for the workspace"),
        ],
    )
    .id_param("metastore_id"),
    EndpointSpec::new(
        "unassign_metastore",
        Delete,
        "/api/2.1/unity-catalog/workspaces/{workspace_id}/metastore",
        "metastore",
        "Remove a workspace's metastore assignment.",
        &[ParamSpec::required("workspace_id", K::Integer, "Workspace to unassign")],
    ),
];
