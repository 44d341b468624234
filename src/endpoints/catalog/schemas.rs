//! Unity Catalog schema endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_schema",
        Post,
        "/api/2.1/unity-catalog/schemas",
        "schema",
        "Create a schema in a catalog.",
        &[
            ParamSpec::required("catalog_name", K::String, "Parent catalog"),
            ParamSpec::required("name", K::String, "Schema name"),
            ParamSpec::optional("comment", K::String, "Schema description"),
        ],
    )
    .id_param("name"),
    EndpointSpec::new(
        "list_schemas",
        Get,
        "/api/2.1/unity-catalog/schemas",
        "schema",
        "List schemas in a catalog.",
        &[
            ParamSpec::required("catalog_name", K::String, "Catalog to list schemas from"),
            ParamSpec::optional("max_results", K::Integer, "Maximum entries to return"),
        ],
    ),
    EndpointSpec::new(
        "get_schema",
        Get,
        "/api/2.1/unity-catalog/schemas/{full_name}",
        "schema",
        "Get a schema by its full name (catalog.schema).",
        &[ParamSpec::required("full_name", K::String, "Full name, e.g. main.sales")],
    )
    .id_param("full_name"),
    EndpointSpec::new(
        "update_schema",
        Patch,
        "/api/2.1/unity-catalog/schemas/{full_name}",
        "schema",
        "Update a schema.",
        &[
            ParamSpec::required("full_name", K::String, "Full name of the schema to update"),
            ParamSpec::optional("new_name", K::String, "New schema name"),
            ParamSpec::optional("comment", K::String, "New description"),
        ],
    )
    .id_param("full_name"),
    EndpointSpec::new(
        "delete_schema",
        Delete,
        "/api/2.1/unity-catalog/schemas/{full_name}",
        "schema",
        "Delete a schema.",
        &[ParamSpec::required("full_name", K::String, "Full name of the schema to delete")],
    )
    .id_param("full_name"),
];
