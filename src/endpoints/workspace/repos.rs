//! Repos (Git folder) endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_repo",
        Post,
        "/api/2.0/repos",
        "repo",
        "Clone a remote Git repository into the workspace.",
        &[
            ParamSpec::required("url", K::String, "URL of the Git repository"),
            ParamSpec::required("provider", K::String, "Git provider, e.g. github, gitlab, azureDevOpsServices"),
            ParamSpec::required("path", K::String, "Workspace path for the repo"),
            ParamSpec::optional("sparse_checkout", K::Object, "Sparse checkout configuration"),
            ParamSpec::optional("git_branch", K::String, "Branch to check out"),
            ParamSpec::optional("tag", K::String, "Tag to check out"),
            ParamSpec::optional("host", K::String, "Host for on-premise Git providers"),
        ],
    ),
    EndpointSpec::new(
        "get_repo",
        Get,
        "/api/2.0/repos/{repo_id}",
        "repo",
        "Get details of a repo.",
        &[ParamSpec::required("repo_id", K::String, "ID of the repo")],
    )
    .id_param("repo_id"),
    EndpointSpec::new(
        "list_repos",
        Get,
        "/api/2.0/repos",
        "repo",
        "List repos in the workspace.",
        &[],
    ),
    EndpointSpec::new(
        "update_repo",
        Patch,
        "/api/2.0/repos/{repo_id}",
        "repo",
        "Check out a different branch or tag in a repo.",
        &[
            ParamSpec::required("repo_id", K::String, "ID of the repo to update"),
            ParamSpec::optional("branch", K::String, "Branch to check out"),
            ParamSpec::optional("tag", K::String, "Tag to check out"),
            ParamSpec::optional("sparse_checkout", K::Object, "New sparse checkout configuration"),
        ],
    )
    .id_param("repo_id"),
    EndpointSpec::new(
        "delete_repo",
        Delete,
        "/api/2.0/repos/{repo_id}",
        "repo",
        "Delete a repo from the workspace.",
        &[ParamSpec::required("repo_id", K::String, "ID of the repo to delete")],
    )
    .id_param("repo_id"),
    EndpointSpec::new(
        "get_repo_permissions",
        Get,
        "/api/2.0/repos/{repo_id}/permissions",
        "repo",
        "Get permissions on a repo.",
        &[ParamSpec::required("repo_id", K::String, "ID of the repo")],
    )
    .id_param("repo_id"),
    EndpointSpec::new(
        "update_repo_permissions",
        Patch,
        "/api/2.0/repos/{repo_id}/permissions",
        "repo",
        "Update permissions on a repo.",
        &[
            ParamSpec::required("repo_id", K::String, "ID of the repo"),
            ParamSpec::required("access_control_list", K::Array, "Access control entries to apply"),
        ],
    )
    .id_param("repo_id"),
];
