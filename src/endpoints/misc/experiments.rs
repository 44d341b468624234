//! MLflow experiment endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_experiment",
        Post,
        "/api/2.0/mlflow/experiments/create",
        "experiment",
        "Create an MLflow experiment.",
        &[
            ParamSpec::required("name", K::String, "Experiment name"),
            ParamSpec::optional("artifact_location", K::String, "Location for experiment artifacts"),
        ],
    ),
    EndpointSpec::new(
        "list_experiments",
        Get,
        "/api/2.0/mlflow/experiments/list",
        "experiment",
        "List MLflow experiments, optionally narrowed by ID or name.",
        &[
            ParamSpec::optional("experiment_id", K::String, "Only this experiment ID"),
            ParamSpec::optional("experiment_name", K::String, "Only experiments with this name"),
        ],
    ),
    EndpointSpec::new(
        "delete_experiment",
        Post,
        "/api/2.0/mlflow/experiments/delete",
        "experiment",
        "Move an experiment to the deleted lifecycle stage.",
        &[ParamSpec::required("experiment_id", K::String, "ID of the experiment to delete")],
    )
    .id_param("experiment_id"),
    EndpointSpec::new(
        "restore_experiment",
        Post,
        "/api/2.0/mlflow/experiments/restore",
        "experiment",
        "Restore a deleted experiment.",
        &[ParamSpec::required("experiment_id", K::String, "ID of the experiment to restore")],
    )
    .id_param("experiment_id"),
    EndpointSpec::new(
        "update_experiment",
        Post,
        "/api/2.0/mlflow/experiments/update",
        "experiment",
        "Rename an experiment.",
        &[
            ParamSpec::required("experiment_id", K::String, "ID of the experiment to update"),
            ParamSpec::optional("new_name", K::String, "New experiment name"),
        ],
    )
    .id_param("experiment_id"),
    EndpointSpec::new(
        "get_experiment_permission_levels",
        Get,
        "/api/2.0/permissions/experiments/{experiment_id}/permissionLevels",
        "experiment",
        "List permission levels an experiment supports.",
        &[ParamSpec::required("experiment_id", K::String, "ID of the experiment")],
    )
    .id_param("experiment_id"),
    EndpointSpec::new(
        "get_experiment_permissions",
        Get,
        "/api/2.0/permissions/experiments/{experiment_id}",
        "experiment",
        "Get permissions on an experiment.",
        &[ParamSpec::required("experiment_id", K::String, "ID of the experiment")],
    )
    .id_param("experiment_id"),
    EndpointSpec::new(
        "update_experiment_permissions",
        Patch,
        "/api/2.0/permissions/experiments/{experiment_id}",
        "experiment",
        "Update permissions on an experiment.",
        &[
            ParamSpec::required("experiment_id", K::String, "ID of the experiment"),
            ParamSpec::required("access_control_list", K::Array, "Access control entries to apply"),
        ],
    )
    .id_param("experiment_id"),
];
