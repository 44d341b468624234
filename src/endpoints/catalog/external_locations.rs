//! Unity Catalog external location endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_external_location",
        Post,
        "/api/2.1/unity-catalog/external-locations",
        "external location",
        "Create an external location.",
        &[
            ParamSpec::required("name", K::String, "External location name"),
            ParamSpec::required("url", K::String, "Cloud storage URL, e.g. s3://bucket/path"),
            ParamSpec::required("credential_name", K::String, "Storage credential granting access"),
            ParamSpec::optional("comment", K::String, "Location description"),
            ParamSpec::optional("read_only", K::Boolean, "Restrict the location to reads"),
        ],
    )
    .id_param("name"),
    EndpointSpec::new(
        "list_external_locations",
        Get,
        "/api/2.1/unity-catalog/external-locations",
        "external location",
        "List external locations.",
        &[ParamSpec::optional("max_results", K::Integer, "Maximum entries to return")],
    ),
    EndpointSpec::new(
        "get_external_location",
        Get,
        "/api/2.1/unity-catalog/external-locations/{name}",
        "external location",
        "Get an external location.",
        &[ParamSpec::required("name", K::String, "Name of the external location")],
    )
    .id_param("name"),
    EndpointSpec::new(
        "update_external_location",
        Patch,
        "/api/2.1/unity-catalog/external-locations/{name}",
        "external location",
        "Update an external location.",
        &[
            ParamSpec::required("name", K::String, "Name of the external location to update"),
            ParamSpec::optional("new_name", K::String, "New location name"),
            ParamSpec::optional("url", K::String, "New storage URL"),
            ParamSpec::optional("credential_name", K::String, "New storage credential"),
            ParamSpec::optional("comment", K::String, "New description"),
            ParamSpec::optional("owner", K::String, "New owner"),
            ParamSpec::optional("read_only", K::Boolean, "Restrict the location to reads"),
        ],
    )
    .id_param("name"),
    EndpointSpec::new(
        "delete_external_location",
        Delete,
        "/api/2.1/unity-catalog/external-locations/{name}",
        "external location",
        "Delete an external location.",
        &[ParamSpec::required("name", K::String, "Name of the external location to delete")],
    )
    .id_param("name"),
];
