//! Delta Live Tables pipeline endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_pipeline",
        Post,
        "/api/2.0/pipelines",
        "pipeline",
        "Create a Delta Live Tables pipeline.",
        &[
            ParamSpec::required("name", K::String, "Pipeline name"),
            ParamSpec::required("storage_location", K::String, "DBFS root for pipeline state"),
            ParamSpec::optional("target", K::String, "Target schema for published tables"),
            ParamSpec::optional("configuration", K::Object, "Pipeline configuration key/value pairs"),
            ParamSpec::optional("clusters", K::Array, "Cluster specifications for pipeline execution"),
            ParamSpec::optional("libraries", K::Array, "Notebook/file libraries defining the pipeline"),
            ParamSpec::optional("continuous", K::Boolean, "Run continuously instead of triggered"),
            ParamSpec::optional("development", K::Boolean, "Development mode"),
            ParamSpec::optional("photon", K::Boolean, "Use the Photon engine"),
            ParamSpec::optional("edition", K::String, "Product edition, e.g. ADVANCED"),
            ParamSpec::optional("channel", K::String, "Release channel, CURRENT or PREVIEW"),
            ParamSpec::optional("catalog", K::String, "Unity Catalog target catalog"),
        ],
    ),
    EndpointSpec::new(
        "list_pipelines",
        Get,
        "/api/2.0/pipelines",
        "pipeline",
        "List pipelines.",
        &[
            ParamSpec::optional("max_results", K::Integer, "Maximum entries to return"),
            ParamSpec::optional("page_token", K::String, "Pagination token"),
            ParamSpec::optional("filter_string", K::String, "Filter expression, e.g. name LIKE '%x%'").wire("filter"),
        ],
    ),
    EndpointSpec::new(
        "get_pipeline",
        Get,
        "/api/2.0/pipelines/{pipeline_id}",
        "pipeline",
        "Get details of a pipeline.",
        &[ParamSpec::required("pipeline_id", K::String, "ID of the pipeline")],
    )
    .id_param("pipeline_id"),
    EndpointSpec::new(
        "update_pipeline",
        Put,
        "/api/2.0/pipelines/{pipeline_id}",
        "pipeline",
        "Replace the settings of a pipeline.",
        &[
            ParamSpec::required("pipeline_id", K::String, "ID of the pipeline to update"),
            ParamSpec::optional("name", K::String, "New pipeline name"),
            ParamSpec::optional("storage_location", K::String, "New storage root"),
            ParamSpec::optional("target", K::String, "New target schema"),
            ParamSpec::optional("configuration", K::Object, "New configuration key/value pairs"),
            ParamSpec::optional("clusters", K::Array, "New cluster specifications"),
            ParamSpec::optional("libraries", K::Array, "New library list"),
            ParamSpec::optional("continuous", K::Boolean, "Run continuously instead of triggered"),
            ParamSpec::optional("development", K::Boolean, "Development mode"),
            ParamSpec::optional("photon", K::Boolean, "Use the Photon engine"),
            ParamSpec::optional("edition", K::String, "Product edition"),
            ParamSpec::optional("channel", K::String, "Release channel"),
            ParamSpec::optional("catalog", K::String, "Unity Catalog target catalog"),
        ],
    )
    .id_param("pipeline_id"),
    EndpointSpec::new(
        "delete_pipeline",
        Delete,
        "/api/2.0/pipelines/{pipeline_id}",
        "pipeline",
        "Delete a pipeline.",
        &[ParamSpec::required("pipeline_id", K::String, "ID of the pipeline to delete")],
    )
    .id_param("pipeline_id"),
    EndpointSpec::new(
        "start_pipeline_update",
        Post,
        "/api/2.0/pipelines/{pipeline_id}/updates",
        "pipeline",
        "Start a new update of a pipeline.",
        &[
            ParamSpec::required("pipeline_id", K::String, "ID of the pipeline"),
            ParamSpec::optional("full_refresh", K::Boolean, "Recompute all tables from scratch"),
        ],
    )
    .id_param("pipeline_id"),
    EndpointSpec::new(
        "get_pipeline_update",
        Get,
        "/api/2.0/pipelines/{pipeline_id}/updates/{update_id}",
        "pipeline update",
        "Get the status of a pipeline update.",
        &[
            ParamSpec::required("pipeline_id", K::String, "ID of the pipeline"),
            ParamSpec::required("update_id", K::String, "ID of the update"),
        ],
    )
    .id_param("update_id"),
    EndpointSpec::new(
        "list_pipeline_events",
        Get,
        "/api/2.0/pipelines/{pipeline_id}/events",
        "pipeline",
        "List events of a pipeline.",
        &[
            ParamSpec::required("pipeline_id", K::String, "ID of the pipeline"),
            ParamSpec::optional("max_results", K::Integer, "Maximum events to return"),
            ParamSpec::optional("order_by", K::Array, "Sort criteria, e.g. [\"timestamp asc\"]"),
            ParamSpec::optional("filter_string", K::String, "Event filter expression").wire("filter"),
            ParamSpec::optional("page_token", K::String, "Pagination token"),
        ],
    )
    .id_param("pipeline_id"),
];
