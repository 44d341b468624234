//! SQL statement execution endpoint.

use crate::types::{EndpointSpec, HttpMethod::*, ParamKind as K, ParamSpec};

pub static ENDPOINTS: &[EndpointSpec] = &[EndpointSpec::new(
    "execute_sql",
    Post,
    "/api/2.0/sql/statements",
    "SQL statement",
    "Execute a SQL statement on a SQL warehouse.",
    &[
        ParamSpec::required("statement", K::String, "SQL text to execute"),
        ParamSpec::required("warehouse_id", K::String, "Warehouse to run the statement on"),
        ParamSpec::optional("catalog", K::String, "Default catalog for name resolution"),
        ParamSpec::optional("schema", K::String, "Default schema for name resolution"),
        ParamSpec::optional("parameters", K::Object, "Named statement parameters"),
        ParamSpec::optional("row_limit", K::Integer, "Maximum rows in the result"),
        ParamSpec::optional("byte_limit", K::Integer, "Maximum result size in bytes"),
        ParamSpec::optional("wait_timeout", K::Integer, "Seconds to wait for synchronous completion"),
    ],
)];
