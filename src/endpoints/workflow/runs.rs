//! Job run endpoints (Jobs API 2.1).

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "submit_run",
        Post,
        "/api/2.1/jobs/runs/submit",
        "run",
        "Submit a one-time run without creating a job.",
        &[
            ParamSpec::optional("run_name", K::String, "Name for the run"),
            ParamSpec::optional("tasks", K::Array, "Task definitions to execute"),
            ParamSpec::optional("job_clusters", K::Array, "Shared cluster specifications"),
            ParamSpec::optional("timeout_seconds", K::Integer, "Run timeout"),
            ParamSpec::optional("idempotency_token", K::String, "Token guaranteeing at-most-one run"),
            ParamSpec::optional("access_control_list", K::Array, "Permissions for the run"),
            ParamSpec::optional("git_source", K::Object, "Remote Git source for run code"),
            ParamSpec::optional("run_as", K::Object, "Identity the run executes as"),
            ParamSpec::optional("webhook_notifications", K::Object, "Webhook notification settings"),
            ParamSpec::optional("notification_settings", K::Object, "Notification filter settings"),
        ],
    ),
    EndpointSpec::new(
        "list_runs",
        Get,
        "/api/2.1/jobs/runs/list",
        "run",
        "List job runs, most recent first.",
        &[
            ParamSpec::optional("job_id", K::Integer, "Only runs of this job"),
            ParamSpec::optional("active_only", K::Boolean, "Only active runs"),
            ParamSpec::optional("completed_only", K::Boolean, "Only completed runs"),
            ParamSpec::optional("offset", K::Integer, "Pagination offset"),
            ParamSpec::optional("limit", K::Integer, "Number of runs to return"),
            ParamSpec::optional("run_type", K::String, "Run type filter, e.g. JOB_RUN"),
            ParamSpec::optional("expand_tasks", K::Boolean, "Include task and cluster details"),
            ParamSpec::optional("start_time_from", K::Integer, "Earliest start time (epoch millis)"),
            ParamSpec::optional("start_time_to", K::Integer, "Latest start time (epoch millis)"),
        ],
    ),
    EndpointSpec::new(
        "get_run",
        Get,
        "/api/2.1/jobs/runs/get",
        "run",
        "Get metadata of a run.",
        &[ParamSpec::required("run_id", K::Integer, "ID of the run")],
    )
    .id_param("run_id"),
    EndpointSpec::new(
        "get_run_output",
        Get,
        "/api/2.1/jobs/runs/get-output",
        "run",
        "Get the output of a completed task run.",
        &[ParamSpec::required("run_id", K::Integer, "ID of the task run")],
    )
    .id_param("run_id"),
    EndpointSpec::new(
        "export_run",
        Post,
        "/api/2.1/jobs/runs/export",
        "run",
        "Export the notebook content of a run.",
        &[
            ParamSpec::required("run_id", K::Integer, "ID of the run to export"),
            ParamSpec::optional("views_to_export", K::Array, "Which views to export (CODE, DASHBOARDS, ALL)"),
        ],
    )
    .id_param("run_id"),
    EndpointSpec::new(
        "cancel_run",
        Post,
        "/api/2.1/jobs/runs/cancel",
        "run",
        "Cancel a run (asynchronous).",
        &[ParamSpec::required("run_id", K::Integer, "ID of the run to cancel")],
    )
    .id_param("run_id"),
    EndpointSpec::new(
        "cancel_all_runs",
        Post,
        "/api/2.1/jobs/runs/cancel-all",
        "job",
        "Cancel all active runs of a job.",
        &[ParamSpec::required("job_id", K::Integer, "Job whose runs are cancelled")],
    )
    .id_param("job_id"),
    EndpointSpec::new(
        "delete_run",
        Post,
        "/api/2.1/jobs/runs/delete",
        "run",
        "Delete a non-active run.",
        &[ParamSpec::required("run_id", K::Integer, "ID of the run to delete")],
    )
    .id_param("run_id"),
    EndpointSpec::new(
        "repair_run",
        Post,
        "/api/2.1/jobs/runs/repair",
        "run",
        "Re-run failed or skipped tasks of an existing run.",
        &[
            ParamSpec::required("run_id", K::Integer, "ID of the run to repair"),
            ParamSpec::required("rerun_tasks", K::Array, "Task keys to re-run"),
            ParamSpec::optional("rerun_all_failed_tasks", K::Boolean, "Re-run every failed task"),
            ParamSpec::optional("latest_repair_id", K::Integer, "ID of the latest repair attempt"),
        ],
    )
    .id_param("run_id"),
];
