//! databricks-mcp — MCP server for the Databricks REST API.
//!
//! Exposes Databricks operations (clusters, jobs, DBFS, Unity Catalog, SQL
//! warehouses, secrets, ...) as agent-callable tools over the MCP stdio
//! transport. Tools are generated from a static endpoint catalog and share
//! one thin HTTP executor.

pub mod config;
pub mod databricks;
pub mod endpoints;
pub mod server;
pub mod tools;
pub mod types;
