//! Git credential endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "list_credentials",
        Get,
        "/api/2.0/credentials",
        "credential",
        "List stored credentials.",
        &[],
    ),
    EndpointSpec::new(
        "create_credentials",
        Post,
        "/api/2.0/credentials",
        "credential",
        "Store new credentials.",
        &[
            ParamSpec::required("name", K::String, "Credential name"),
            ParamSpec::required("credential_type", K::String, "Credential type, e.g. password, oauth").wire("type"),
            ParamSpec::required("value", K::Object, "Type-specific credential payload"),
        ],
    ),
    EndpointSpec::new(
        "get_credentials",
        Get,
        "/api/2.0/credentials/{credentials_id}",
        "credential",
        "Get stored credentials.",
        &[ParamSpec::required("credentials_id", K::String, "ID of the credentials")],
    )
    .id_param("credentials_id"),
    EndpointSpec::new(
        "update_credentials",
        Patch,
        "/api/2.0/credentials/{credentials_id}",
        "credential",
        "Update stored credentials.",
        &[
            ParamSpec::required("credentials_id", K::String, "ID of the credentials to update"),
            ParamSpec::required("updates", K::Object, "Fields to change").flatten(),
        ],
    )
    .id_param("credentials_id"),
    EndpointSpec::new(
        "delete_credentials",
        Delete,
        "/api/2.0/credentials/{credentials_id}",
        "credential",
        "Delete stored credentials.",
        &[ParamSpec::required("credentials_id", K::String, "ID of the credentials to delete")],
    )
    .id_param("credentials_id"),
];
