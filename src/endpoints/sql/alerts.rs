//! SQL alert endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_alert",
        Post,
        "/api/2.0/sql/alerts",
        "alert",
        "Create an alert on a saved query.",
        &[
            ParamSpec::required("name", K::String, "Alert name"),
            ParamSpec::required("options", K::Object, "Alert trigger options (column, op, value)"),
            ParamSpec::required("query_id", K::String, "Query the alert watches"),
            ParamSpec::optional("parent", K::String, "Parent folder identifier"),
            ParamSpec::optional("rearm", K::Integer, "Seconds before the alert can re-trigger"),
        ],
    ),
    EndpointSpec::new(
        "list_alerts",
        Get,
        "/api/2.0/sql/alerts",
        "alert",
        "List alerts.",
        &[],
    ),
    EndpointSpec::new(
        "get_alert",
        Get,
        "/api/2.0/sql/alerts/{alert_id}",
        "alert",
        "Get an alert.",
        &[ParamSpec::required("alert_id", K::String, "ID of the alert")],
    )
    .id_param("alert_id"),
    EndpointSpec::new(
        "update_alert",
        Put,
        "/api/2.0/sql/alerts/{alert_id}",
        "alert",
        "Update an alert.",
        &[
            ParamSpec::required("alert_id", K::String, "ID of the alert to update"),
            ParamSpec::optional("name", K::String, "New alert name"),
            ParamSpec::optional("options", K::Object, "New trigger options"),
            ParamSpec::optional("query_id", K::String, "New query to watch"),
            ParamSpec::optional("parent", K::String, "New parent folder"),
            ParamSpec::optional("rearm", K::Integer, "New re-trigger window in seconds"),
        ],
    )
    .id_param("alert_id"),
    EndpointSpec::new(
        "delete_alert",
        Delete,
        "/api/2.0/sql/alerts/{alert_id}",
        "alert",
        "Delete an alert.",
        &[ParamSpec::required("alert_id", K::String, "ID of the alert to delete")],
    )
    .id_param("alert_id"),
];
