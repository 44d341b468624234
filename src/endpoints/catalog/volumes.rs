//! Unity Catalog volume endpoints.

use crate::types::{Args, EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

/// External volumes must say where their data lives.
fn validate_create_volume(args: &Args) -> Result<(), String> {
    let volume_type = args.get("volume_type").and_then(|v| v.as_str());
    if volume_type == Some("EXTERNAL") && !args.contains_key("storage_location") {
        return Err("storage_location is required for EXTERNAL volumes".into());
    }
    Ok(())
}

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_volume",
        Post,
        "/api/2.1/unity-catalog/volumes",
        "volume",
        "Create a volume in a schema.",
        &[
            ParamSpec::required("catalog_name", K::String, "Parent catalog"),
            ParamSpec::required("schema_name", K::String, "Parent schema"),
            ParamSpec::required("name", K::String, "Volume name"),
            ParamSpec::required("volume_type", K::String, "MANAGED or EXTERNAL"),
            ParamSpec::optional("storage_location", K::String, "Storage location (required for EXTERNAL volumes)"),
            ParamSpec::optional("comment", K::String, "Volume description"),
        ],
    )
    .id_param("name")
    .validate(validate_create_volume),
    EndpointSpec::new(
        "list_volumes",
        Get,
        "/api/2.1/unity-catalog/volumes",
        "volume",
        "List volumes in a schema.",
        &[
            ParamSpec::required("catalog_name", K::String, "Catalog to list from"),
            ParamSpec::required("schema_name", K::String, "Schema to list from"),
            ParamSpec::optional("max_results", K::Integer, "Maximum entries to return"),
            ParamSpec::optional("page_token", K::String, "Pagination token"),
        ],
    ),
    EndpointSpec::new(
        "get_volume",
        Get,
        "/api/2.1/unity-catalog/volumes/{full_name}",
        "volume",
        "Get a volume by its full name.",
        &[ParamSpec::required("full_name", K::String, "Full name, e.g. main.sales.landing")],
    )
    .id_param("full_name"),
    EndpointSpec::new(
        "update_volume",
        Patch,
        "/api/2.1/unity-catalog/volumes/{full_name}",
        "volume",
        "Update a volume.",
        &[
            ParamSpec::required("full_name", K::String, "Full name of the volume to update"),
            ParamSpec::optional("new_name", K::String, "New volume name"),
            ParamSpec::optional("comment", K::String, "New description"),
            ParamSpec::optional("owner", K::String, "New owner"),
        ],
    )
    .id_param("full_name"),
    EndpointSpec::new(
        "delete_volume",
        Delete,
        "/api/2.1/unity-catalog/volumes/{full_name}",
        "volume",
        "Delete a volume.",
        &[ParamSpec::required("full_name", K::String, "Full name of the volume to delete")],
    )
    .id_param("full_name"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn external_volume_without_location_is_rejected() {
        let args = json!({"catalog_name": "c", "schema_name": "s", "name": "v", "volume_type": "EXTERNAL"});
        let err = validate_create_volume(args.as_object().unwrap()).unwrap_err();
        assert!(err.contains("storage_location"));
    }

    #[test]
    fn managed_volume_needs_no_location() {
        let args = json!({"catalog_name": "c", "schema_name": "s", "name": "v", "volume_type": "MANAGED"});
        assert!(validate_create_volume(args.as_object().unwrap()).is_ok());
    }
}
