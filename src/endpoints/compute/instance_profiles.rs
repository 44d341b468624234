//! AWS instance profile endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "add_instance_profile",
        Post,
        "/api/2.0/instance-profiles/add",
        "instance profile",
        "Register an AWS instance profile with the workspace.",
        &[
            ParamSpec::required("instance_profile_arn", K::String, "ARN of the instance profile"),
            ParamSpec::optional("skip_validation", K::Boolean, "Skip the validation that the profile can launch instances"),
        ],
    )
    .id_param("instance_profile_arn"),
    EndpointSpec::new(
        "list_instance_profiles",
        Get,
        "/api/2.0/instance-profiles/list",
        "instance profile",
        "List registered instance profiles.",
        &[],
    ),
    EndpointSpec::new(
        "remove_instance_profile",
        Post,
        "/api/2.0/instance-profiles/remove",
        "instance profile",
        "Remove an instance profile registration.",
        &[ParamSpec::required("instance_profile_arn", K::String, "ARN of the profile to remove")],
    )
    .id_param("instance_profile_arn"),
    EndpointSpec::new(
        "get_instance_profile_permissions",
        Get,
        "/api/2.0/permissions/instance-profiles/{instance_profile_arn}",
        "instance profile",
        "Get permissions on an instance profile.",
        &[ParamSpec::required("instance_profile_arn", K::String, "ARN of the profile")],
    )
    .id_param("instance_profile_arn"),
    EndpointSpec::new(
        "update_instance_profile_permissions",
        Patch,
        "/api/2.0/permissions/instance-profiles/{instance_profile_arn}",
        "instance profile",
        "Update permissions on an instance profile.",
        &[
            ParamSpec::required("instance_profile_arn", K::String, "ARN of the profile"),
            ParamSpec::required("access_control_list", K::Array, "Access control entries to apply"),
        ],
    )
    .id_param("instance_profile_arn"),
];
