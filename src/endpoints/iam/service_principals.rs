//! Service principal (SCIM) endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_service_principal",
        Post,
        "/api/2.0/preview/scim/v2/ServicePrincipals",
        "service principal",
        "Create a service principal.",
        &[
            ParamSpec::required("display_name", K::String, "Display name").wire("displayName"),
            ParamSpec::optional("application_id", K::String, "Azure AD application ID").wire("applicationId"),
            ParamSpec::optional("entitlements", K::Array, "Entitlements granted to the principal"),
            ParamSpec::optional("roles", K::Array, "Roles granted to the principal"),
        ],
    )
    .body_constants(&[(
        "schemas",
        r#"["urn:ietf:params:scim:schemas:core:2.0:ServicePrincipal"]"#,
    )]),
    EndpointSpec::new(
        "list_service_principals",
        Get,
        "/api/2.0/preview/scim/v2/ServicePrincipals",
        "service principal",
        "List service principals.",
        &[
            ParamSpec::optional("filter", K::String, "SCIM filter expression"),
            ParamSpec::optional("count", K::Integer, "Results per page"),
            ParamSpec::optional("starting_index", K::Integer, "1-based pagination index").wire("startIndex"),
        ],
    ),
    EndpointSpec::new(
        "get_service_principal",
        Get,
        "/api/2.0/preview/scim/v2/ServicePrincipals/{id}",
        "service principal",
        "Get a service principal.",
        &[ParamSpec::required("id", K::String, "ID of the service principal")],
    )
    .id_param("id"),
    EndpointSpec::new(
        "update_service_principal",
        Patch,
        "/api/2.0/preview/scim/v2/ServicePrincipals/{id}",
        "service principal",
        "Update a service principal with SCIM patch operations.",
        &[
            ParamSpec::required("id", K::String, "ID of the service principal"),
            ParamSpec::required("operations", K::Array, "SCIM patch operations").wire("Operations"),
        ],
    )
    .id_param("id")
    .body_constants(&[(
        "schemas",
        r#"["urn:ietf:params:scim:api:messages:2.0:PatchOp"]"#,
    )]),
    EndpointSpec::new(
        "delete_service_principal",
        Delete,
        "/api/2.0/preview/scim/v2/ServicePrincipals/{id}",
        "service principal",
        "Delete a service principal.",
        &[ParamSpec::required("id", K::String, "ID of the service principal to delete")],
    )
    .id_param("id"),
];
