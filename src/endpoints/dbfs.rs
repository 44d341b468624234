//! DBFS endpoints, including the two composite local-file upload tools.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "list_dbfs_files",
        Get,
        "/api/2.0/dbfs/list",
        "DBFS path",
        "List files and directories under a DBFS path.",
        &[ParamSpec::required("dbfs_path", K::String, "DBFS path to list").wire("path")],
    )
    .id_param("dbfs_path"),
    EndpointSpec::new(
        "read_dbfs_file",
        Get,
        "/api/2.0/dbfs/read",
        "DBFS path",
        "Read a byte range of a DBFS file (content is returned base64-encoded).",
        &[
            ParamSpec::required("dbfs_path", K::String, "DBFS file to read").wire("path"),
            ParamSpec::optional("offset", K::Integer, "Starting byte position"),
            ParamSpec::optional("length", K::Integer, "Number of bytes to read"),
        ],
    )
    .id_param("dbfs_path"),
    EndpointSpec::new(
        "get_dbfs_status",
        Get,
        "/api/2.0/dbfs/get-status",
        "DBFS path",
        "Get the status of a DBFS file or directory.",
        &[ParamSpec::required("dbfs_path", K::String, "DBFS path to inspect").wire("path")],
    )
    .id_param("dbfs_path"),
    EndpointSpec::new(
        "create_dbfs_directory",
        Post,
        "/api/2.0/dbfs/mkdirs",
        "DBFS path",
        "Create a DBFS directory (and any missing parents).",
        &[ParamSpec::required("dbfs_path", K::String, "Directory path to create").wire("path")],
    )
    .id_param("dbfs_path"),
    EndpointSpec::new(
        "delete_dbfs_file",
        Post,
        "/api/2.0/dbfs/delete",
        "DBFS path",
        "Delete a DBFS file or directory.",
        &[
            ParamSpec::required("dbfs_path", K::String, "DBFS path to delete").wire("path"),
            ParamSpec::optional("recursive", K::Boolean, "Recursively delete directories"),
        ],
    )
    .id_param("dbfs_path"),
    EndpointSpec::new(
        "move_dbfs_file",
        Post,
        "/api/2.0/dbfs/move",
        "DBFS path",
        "Move a file or directory within DBFS.",
        &[
            ParamSpec::required("source_path", K::String, "Current DBFS path"),
            ParamSpec::required("target_path", K::String, "New DBFS path").wire("destination_path"),
        ],
    )
    .id_param("source_path"),
    EndpointSpec::new(
        "put_dbfs_file",
        Post,
        "/api/2.0/dbfs/put",
        "DBFS path",
        "Upload base64-encoded content to a DBFS path in one call.",
        &[
            ParamSpec::required("dbfs_path", K::String, "Destination DBFS path").wire("path"),
            ParamSpec::required("contents", K::String, "Base64-encoded file content"),
            ParamSpec::optional("overwrite", K::Boolean, "Overwrite an existing file"),
        ],
    )
    .id_param("dbfs_path"),
    EndpointSpec::new(
        "import_file",
        Post,
        "/api/2.0/dbfs/put",
        "file",
        "Upload a local file to DBFS in one shot.",
        &[
            ParamSpec::required("source_path", K::String, "Local path of the file to upload"),
            ParamSpec::required("target_path", K::String, "Destination DBFS path"),
            ParamSpec::optional("overwrite", K::Boolean, "Overwrite an existing file"),
        ],
    )
    .id_param("target_path")
    .composite(),
    EndpointSpec::new(
        "upload_large_file",
        Post,
        "/api/2.0/dbfs/create",
        "file",
        "Stream a large local file to DBFS in chunks via the handle API (create, add-block, close).",
        &[
            ParamSpec::required("dbfs_path", K::String, "Destination DBFS path"),
            ParamSpec::required("local_file_path", K::String, "Local path of the file to upload"),
            ParamSpec::optional("overwrite", K::Boolean, "Overwrite an existing file"),
            ParamSpec::optional("buffer_size", K::Integer, "Chunk size in bytes (default 1 MiB)"),
        ],
    )
    .id_param("dbfs_path")
    .composite(),
];
