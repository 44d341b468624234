//! Unity Catalog table endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_table",
        Post,
        "/api/2.1/unity-catalog/tables",
        "table",
        "Create a table in a schema.",
        &[
            ParamSpec::required("catalog_name", K::String, "Parent catalog"),
            ParamSpec::required("schema_name", K::String, "Parent schema"),
            ParamSpec::required("name", K::String, "Table name"),
            ParamSpec::required("columns", K::Array, "Column definitions"),
            ParamSpec::optional("comment", K::String, "Table description"),
            ParamSpec::optional("properties", K::Object, "Table properties"),
            ParamSpec::optional("storage_location", K::String, "Storage location for external tables"),
        ],
    )
    .id_param("name"),
    EndpointSpec::new(
        "list_tables",
        Get,
        "/api/2.1/unity-catalog/tables",
        "table",
        "List tables in a schema.",
        &[
            ParamSpec::required("catalog_name", K::String, "Catalog to list from"),
            ParamSpec::required("schema_name", K::String, "Schema to list from"),
            ParamSpec::optional("max_results", K::Integer, "Maximum entries to return"),
            ParamSpec::optional("page_token", K::String, "Pagination token"),
        ],
    ),
    EndpointSpec::new(
        "get_table",
        Get,
        "/api/2.1/unity-catalog/tables/{full_name}",
        "table",
        "Get a table by its full name (catalog.schema.table).",
        &[ParamSpec::required("full_name", K::String, "Full name, e.g. main.sales.orders")],
    )
    .id_param("full_name"),
    EndpointSpec::new(
        "update_table",
        Patch,
        "/api/2.1/unity-catalog/tables/{full_name}",
        "table",
        "Update a table.",
        &[
            ParamSpec::required("full_name", K::String, "Full name of the table to update"),
            ParamSpec::optional("new_name", K::String, "New table name"),
            ParamSpec::optional("comment", K::String, "New description"),
            ParamSpec::optional("properties", K::Object, "New table properties"),
            ParamSpec::optional("owner", K::String, "New owner"),
        ],
    )
    .id_param("full_name"),
    EndpointSpec::new(
        "delete_table",
        Delete,
        "/api/2.1/unity-catalog/tables/{full_name}",
        "table",
        "Delete a table.",
        &[ParamSpec::required("full_name", K::String, "Full name of the table to delete")],
    )
    .id_param("full_name"),
];
