//! Command execution (API 1.2) endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_command_context",
        Post,
        "/api/1.2/contexts/create",
        "command context",
        "Create an execution context on a cluster.",
        &[
            ParamSpec::required("cluster_id", K::String, "Cluster to run commands on").wire("clusterId"),
            ParamSpec::optional("language", K::String, "Context language: python, scala, or sql"),
        ],
    )
    .id_param("cluster_id"),
    EndpointSpec::new(
        "execute_command",
        Post,
        "/api/1.2/commands/execute",
        "command",
        "Execute a command in an existing context.",
        &[
            ParamSpec::required("context_id", K::String, "Execution context ID").wire("contextId"),
            ParamSpec::required("command", K::String, "Command source to execute"),
        ],
    )
    .id_param("context_id"),
    EndpointSpec::new(
        "get_command_status",
        Get,
        "/api/1.2/commands/status",
        "command",
        "Get the status and result of a command.",
        &[ParamSpec::required("command_id", K::String, "Command to query").wire("commandId")],
    )
    .id_param("command_id"),
    EndpointSpec::new(
        "cancel_command",
        Post,
        "/api/1.2/commands/cancel",
        "command",
        "Cancel a running command.",
        &[ParamSpec::required("command_id", K::String, "Command to cancel").wire("commandId")],
    )
    .id_param("command_id"),
];
