//! Unity Catalog catalog endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_catalog",
        Post,
        "/api/2.1/unity-catalog/catalogs",
        "catalog",
        "Create a catalog.",
        &[
            ParamSpec::required("name", K::String, "Catalog name"),
            ParamSpec::optional("comment", K::String, "Catalog description"),
        ],
    )
    .id_param("name"),
    EndpointSpec::new(
        "list_catalogs",
        Get,
        "/api/2.1/unity-catalog/catalogs",
        "catalog",
        "List catalogs visible to the caller.",
        &[ParamSpec::optional("max_results", K::Integer, "Maximum entries to return")],
    ),
    EndpointSpec::new(
        "get_catalog",
        Get,
        "/api/2.1/unity-catalog/catalogs/{name}",
        "catalog",
        "Get a catalog.",
        &[ParamSpec::required("name", K::String, "Name of the catalog")],
    )
    .id_param("name"),
    EndpointSpec::new(
        "update_catalog",
        Patch,
        "/api/2.1/unity-catalog/catalogs/{name}",
        "catalog",
        "Update a catalog.",
        &[
            ParamSpec::required("name", K::String, "Name of the catalog to update"),
            ParamSpec::optional("new_name", K::String, "New catalog name"),
            ParamSpec::optional("comment", K::String, "New description"),
        ],
    )
    .id_param("name"),
    EndpointSpec::new(
        "delete_catalog",
        Delete,
        "/api/2.1/unity-catalog/catalogs/{name}",
        "catalog",
        "Delete a catalog.",
        &[ParamSpec::required("name", K::String, "Name of the catalog to delete")],
    )
    .id_param("name"),
];
