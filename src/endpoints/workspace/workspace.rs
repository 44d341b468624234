//! Workspace object (notebooks, directories, files) endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "list_workspace",
        Get,
        "/api/2.0/workspace/list",
        "workspace path",
        "List notebooks and directories under a workspace path.",
        &[ParamSpec::required("path", K::String, "Absolute workspace path to list")],
    )
    .id_param("path"),
    EndpointSpec::new(
        "import_workspace",
        Post,
        "/api/2.0/workspace/import",
        "workspace path",
        "Import a notebook or file into the workspace.",
        &[
            ParamSpec::required("path", K::String, "Destination workspace path"),
            ParamSpec::required("format", K::String, "Import format: SOURCE, HTML, JUPYTER, DBC, or AUTO"),
            ParamSpec::required("content", K::String, "Base64-encoded content"),
            ParamSpec::optional("language", K::String, "Language for SOURCE imports (SCALA, PYTHON, SQL, R)"),
            ParamSpec::optional("overwrite", K::Boolean, "Overwrite an existing object"),
        ],
    )
    .id_param("path"),
    EndpointSpec::new(
        "export_workspace",
        Get,
        "/api/2.0/workspace/export",
        "workspace path",
        "Export a notebook or directory from the workspace.",
        &[
            ParamSpec::required("path", K::String, "Workspace path to export"),
            ParamSpec::optional("format", K::String, "Export format, defaults to SOURCE"),
        ],
    )
    .id_param("path"),
    EndpointSpec::new(
        "delete_workspace",
        Post,
        "/api/2.0/workspace/delete",
        "workspace path",
        "Delete a workspace object.",
        &[
            ParamSpec::required("path", K::String, "Workspace path to delete"),
            ParamSpec::optional("recursive", K::Boolean, "Recursively delete directories"),
        ],
    )
    .id_param("path"),
    EndpointSpec::new(
        "get_workspace_status",
        Get,
        "/api/2.0/workspace/get-status",
        "workspace path",
        "Get the status of a workspace object.",
        &[ParamSpec::required("path", K::String, "Workspace path to inspect")],
    )
    .id_param("path"),
    EndpointSpec::new(
        "create_workspace_directory",
        Post,
        "/api/2.0/workspace/mkdirs",
        "workspace path",
        "Create a workspace directory (and any missing parents).",
        &[ParamSpec::required("path", K::String, "Directory path to create")],
    )
    .id_param("path"),
];
