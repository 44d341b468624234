//! Budget endpoints.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new(
        "create_budget",
        Post,
        "/api/2.0/budgets",
        "budget",
        "Create a budget with optional alert thresholds.",
        &[
            ParamSpec::required("name", K::String, "Budget name"),
            ParamSpec::required("amount", K::Number, "Budget amount in USD"),
            ParamSpec::required("period", K::String, "Budget period, e.g. MONTHLY"),
            ParamSpec::optional("start_date", K::String, "Start date (YYYY-MM-DD)"),
            ParamSpec::optional("end_date", K::String, "End date (YYYY-MM-DD)"),
            ParamSpec::optional("filters", K::Object, "Workspace/tag filters scoping the budget"),
            ParamSpec::optional("alerts", K::Array, "Alert thresholds"),
        ],
    ),
    EndpointSpec::new(
        "list_budgets",
        Get,
        "/api/2.0/budgets",
        "budget",
        "List budgets.",
        &[
            ParamSpec::optional("page_size", K::Integer, "Results per page"),
            ParamSpec::optional("page_token", K::String, "Pagination token"),
        ],
    ),
    EndpointSpec::new(
        "get_budget",
        Get,
        "/api/2.0/budgets/{budget_id}",
        "budget",
        "Get a budget.",
        &[ParamSpec::required("budget_id", K::String, "ID of the budget")],
    )
    .id_param("budget_id"),
    EndpointSpec::new(
        "update_budget",
        Patch,
        "/api/2.0/budgets/{budget_id}",
        "budget",
        "Update a budget.",
        &[
            ParamSpec::required("budget_id", K::String, "ID of the budget to update"),
            ParamSpec::required("updates", K::Object, "Fields to change").flatten(),
        ],
    )
    .id_param("budget_id"),
    EndpointSpec::new(
        "delete_budget",
        Delete,
        "/api/2.0/budgets/{budget_id}",
        "budget",
        "Delete a budget.",
        &[ParamSpec::required("budget_id", K::String, "ID of the budget to delete")],
    )
    .id_param("budget_id"),
];
