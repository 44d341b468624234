//! Jobs API (2.1) endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_job",
        Post,
        "/api/2.1/jobs/create",
        "job",
        "Create a new job.",
        &[
            ParamSpec::required("name", K::String, "Job name"),
            ParamSpec::required("tasks", K::Array, "Task definitions for the job"),
            ParamSpec::optional("email_notifications", K::Object, "Email notification settings"),
            ParamSpec::optional("timeout_seconds", K::Integer, "Timeout applied to each run"),
            ParamSpec::optional("schedule", K::Object, "Cron schedule definition"),
            ParamSpec::optional("max_concurrent_runs", K::Integer, "Maximum concurrent runs"),
            ParamSpec::optional("job_clusters", K::Array, "Shared job cluster specifications"),
            ParamSpec::optional("tags", K::Object, "Tags attached to the job"),
            ParamSpec::optional("format", K::String, "Job format, SINGLE_TASK or MULTI_TASK"),
            ParamSpec::optional("continuous", K::Object, "Continuous execution settings"),
            ParamSpec::optional("git_source", K::Object, "Remote Git source for job code"),
        ],
    ),
    EndpointSpec::new(
        "list_jobs",
        Get,
        "/api/2.1/jobs/list",
        "job",
        "List jobs in the workspace.",
        &[
            ParamSpec::optional("limit", K::Integer, "Number of jobs to return"),
            ParamSpec::optional("offset", K::Integer, "Pagination offset"),
            ParamSpec::optional("expand_tasks", K::Boolean, "Include task and cluster details"),
            ParamSpec::optional("name", K::String, "Filter by exact job name"),
        ],
    ),
    EndpointSpec::new(
        "get_job",
        Get,
        "/api/2.1/jobs/get",
        "job",
        "Get details of a job.",
        &[ParamSpec::required("job_id", K::Integer, "ID of the job")],
    )
    .id_param("job_id"),
    EndpointSpec::new(
        "update_job",
        Post,
        "/api/2.1/jobs/update",
        "job",
        "Partially update a job's settings.",
        &[
            ParamSpec::required("job_id", K::Integer, "ID of the job to update"),
            ParamSpec::required("new_settings", K::Object, "Settings to merge into the job"),
        ],
    )
    .id_param("job_id"),
    EndpointSpec::new(
        "reset_job",
        Post,
        "/api/2.1/jobs/reset",
        "job",
        "Overwrite all settings of a job.",
        &[
            ParamSpec::required("job_id", K::Integer, "ID of the job to reset"),
            ParamSpec::required("new_settings", K::Object, "Complete replacement settings"),
        ],
    )
    .id_param("job_id"),
    EndpointSpec::new(
        "delete_job",
        Post,
        "/api/2.1/jobs/delete",
        "job",
        "Delete a job.",
        &[ParamSpec::required("job_id", K::Integer, "ID of the job to delete")],
    )
    .id_param("job_id"),
    EndpointSpec::new(
        "run_job",
        Post,
        "/api/2.1/jobs/run-now",
        "job",
        "Trigger a run of an existing job.",
        &[
            ParamSpec::required("job_id", K::Integer, "ID of the job to run"),
            ParamSpec::optional("idempotency_token", K::String, "Token guaranteeing at-most-one run"),
            ParamSpec::optional("jar_params", K::Array, "Parameters for JAR tasks"),
            ParamSpec::optional("notebook_params", K::Object, "Parameters for notebook tasks"),
            ParamSpec::optional("python_params", K::Array, "Parameters for Python tasks"),
            ParamSpec::optional("spark_submit_params", K::Array, "Parameters for spark-submit tasks"),
            ParamSpec::optional("python_named_params", K::Object, "Named parameters for Python wheel tasks"),
            ParamSpec::optional("sql_params", K::Object, "Parameters for SQL tasks"),
            ParamSpec::optional("dbt_commands", K::Array, "Commands for dbt tasks"),
        ],
    )
    .id_param("job_id"),
];
