//! Unity Catalog storage credential endpoints.

use crate::types::{Args, EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

const CREDENTIAL_TYPES: &[&str] = &[
    "aws_credentials",
    "azure_service_principal",
    "azure_managed_identity",
    "gcp_service_account_key",
];

fn supplied_credential_types(args: &Args) -> usize {
    CREDENTIAL_TYPES
        .iter()
        .filter(|key| args.contains_key(**key))
        .count()
}

/// Creation requires exactly one cloud credential type.
fn validate_create(args: &Args) -> Result<(), String> {
    match supplied_credential_types(args) {
        0 => Err("One cloud credential type must be provided".into()),
        1 => Ok(()),
        _ => Err("Only one cloud credential type can be provided".into()),
    }
}

/// Updates may change at most one cloud credential type.
fn validate_update(args: &Args) -> Result<(), String> {
    if supplied_credential_types(args) > 1 {
        return Err("Only one cloud credential type can be provided".into());
    }
    Ok(())
}

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_storage_credential",
        Post,
        "/api/2.1/unity-catalog/storage-credentials",
        "storage credential",
        "Create a storage credential (exactly one cloud credential type).",
        &[
            ParamSpec::required("name", K::String, "Credential name"),
            ParamSpec::optional("aws_credentials", K::Object, "AWS IAM role configuration"),
            ParamSpec::optional("azure_service_principal", K::Object, "Azure service principal configuration"),
            ParamSpec::optional("azure_managed_identity", K::Object, "Azure managed identity configuration"),
            ParamSpec::optional("gcp_service_account_key", K::Object, "GCP service account key configuration"),
            ParamSpec::optional("comment", K::String, "Credential description"),
            ParamSpec::optional("read_only", K::Boolean, "Restrict the credential to reads"),
        ],
    )
    .id_param("name")
    .validate(validate_create),
    EndpointSpec::new(
        "list_storage_credentials",
        Get,
        "/api/2.1/unity-catalog/storage-credentials",
        "storage credential",
        "List storage credentials.",
        &[ParamSpec::optional("max_results", K::Integer, "Maximum entries to return")],
    ),
    EndpointSpec::new(
        "get_storage_credential",
        Get,
        "/api/2.1/unity-catalog/storage-credentials/{name}",
        "storage credential",
        "Get a storage credential.",
        &[ParamSpec::required("name", K::String, "Name of the credential")],
    )
    .id_param("name"),
    EndpointSpec::new(
        "update_storage_credential",
        Patch,
        "/api/2.1/unity-catalog/storage-credentials/{name}",
        "storage credential",
        "Update a storage credential.",
        &[
            ParamSpec::required("name", K::String, "Name of the credential to update"),
            ParamSpec::optional("aws_credentials", K::Object, "New AWS IAM role configuration"),
            ParamSpec::optional("azure_service_principal", K::Object, "New Azure service principal configuration"),
            ParamSpec::optional("azure_managed_identity", K::Object, "New Azure managed identity configuration"),
            ParamSpec::optional("gcp_service_account_key", K::Object, "New GCP service account key configuration"),
            ParamSpec::optional("new_name", K::String, "New credential name"),
            ParamSpec::optional("comment", K::String, "New description"),
            ParamSpec::optional("owner", K::String, "New owner"),
            ParamSpec::optional("read_only", K::Boolean, "Restrict the credential to reads"),
        ],
    )
    .id_param("name")
    .validate(validate_update),
    EndpointSpec::new(
        "delete_storage_credential",
        Delete,
        "/api/2.1/unity-catalog/storage-credentials/{name}",
        "storage credential",
        "Delete a storage credential.",
        &[ParamSpec::required("name", K::String, "Name of the credential to delete")],
    )
    .id_param("name"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_requires_exactly_one_credential_type() {
        let none = json!({"name": "cred"});
        assert!(validate_create(none.as_object().unwrap()).is_err());

        let one = json!({"name": "cred", "aws_credentials": {"role_arn": "arn:aws:iam::1:role/x"}});
        assert!(validate_create(one.as_object().unwrap()).is_ok());

        let two = json!({
            "name": "cred",
            "aws_credentials": {},
            "azure_managed_identity": {},
        });
        assert!(validate_create(two.as_object().unwrap()).is_err());
    }

    #[test]
    fn update_allows_zero_but_not_two() {
        let zero = json!({"name": "cred", "comment": "renamed"});
        assert!(validate_update(zero.as_object().unwrap()).is_ok());

        let two = json!({"name": "cred", "aws_credentials": {}, "gcp_service_account_key": {}});
        assert!(validate_update(two.as_object().unwrap()).is_err());
    }
}
