//! Static catalog of every Databricks endpoint exposed as a tool.
//!
//! Each module declares const [`EndpointSpec`] entries; the registry builds
//! tool metadata and dispatches calls from this table alone.

pub mod catalog;
pub mod compute;
pub mod dbfs;
pub mod iam;
pub mod misc;
pub mod sql;
pub mod workflow;
pub mod workspace;

use crate::types::EndpointSpec;

/// Every endpoint group in the catalog.
fn groups() -> Vec<&'static [EndpointSpec]> {
    vec![
        compute::clusters::ENDPOINTS,
        compute::cluster_policies::ENDPOINTS,
        compute::instance_pools::ENDPOINTS,
        compute::instance_profiles::ENDPOINTS,
        compute::libraries::ENDPOINTS,
        workflow::jobs::ENDPOINTS,
        workflow::runs::ENDPOINTS,
        workflow::pipelines::ENDPOINTS,
        workspace::workspace::ENDPOINTS,
        workspace::repos::ENDPOINTS,
        dbfs::ENDPOINTS,
        sql::statements::ENDPOINTS,
        sql::warehouses::ENDPOINTS,
        sql::queries::ENDPOINTS,
        sql::dashboards::ENDPOINTS,
        sql::alerts::ENDPOINTS,
        sql::visualizations::ENDPOINTS,
        catalog::catalogs::ENDPOINTS,
        catalog::schemas::ENDPOINTS,
        catalog::tables::ENDPOINTS,
        catalog::volumes::ENDPOINTS,
        catalog::connections::ENDPOINTS,
        catalog::metastores::ENDPOINTS,
        catalog::storage_credentials::ENDPOINTS,
        catalog::external_locations::ENDPOINTS,
        iam::secrets::ENDPOINTS,
        iam::service_principals::ENDPOINTS,
        iam::tokens::ENDPOINTS,
        iam::credentials::ENDPOINTS,
        misc::budgets::ENDPOINTS,
        misc::commands::ENDPOINTS,
        misc::lakeview::ENDPOINTS,
        misc::experiments::ENDPOINTS,
        misc::serving::ENDPOINTS,
    ]
}

/// Flat view of the whole catalog.
pub fn all() -> Vec<&'static EndpointSpec> {
    groups().into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tool_names_are_unique() {
        let mut seen = HashSet::new();
        for spec in all() {
            assert!(seen.insert(spec.name), "duplicate tool name: {}", spec.name);
        }
    }

    #[test]
    fn path_placeholders_match_required_params() {
        for spec in all() {
            for placeholder in spec.path_params() {
                let param = spec
                    .params
                    .iter()
                    .find(|p| p.name == placeholder)
                    .unwrap_or_else(|| {
                        panic!("{}: no param for placeholder {{{placeholder}}}", spec.name)
                    });
                assert!(
                    param.required,
                    "{}: path param {} must be required",
                    spec.name, placeholder
                );
            }
        }
    }

    #[test]
    fn id_params_exist() {
        for spec in all() {
            if let Some(id_param) = spec.id_param {
                assert!(
                    spec.params.iter().any(|p| p.name == id_param),
                    "{}: id_param {} not declared",
                    spec.name,
                    id_param
                );
            }
        }
    }

    #[test]
    fn body_constants_are_valid_json() {
        for spec in all() {
            for (key, raw) in spec.body_constants {
                serde_json::from_str::<serde_json::Value>(raw).unwrap_or_else(|e| {
                    panic!("{}: constant {key} is not valid JSON: {e}", spec.name)
                });
            }
        }
    }

    #[test]
    fn catalog_covers_every_domain() {
        let names: HashSet<&str> = all().iter().map(|s| s.name).collect();
        for expected in [
            "list_clusters",
            "create_job",
            "list_dbfs_files",
            "execute_sql",
            "create_catalog",
            "put_secret",
            "create_pipeline",
            "upload_large_file",
        ] {
            assert!(names.contains(expected), "missing tool: {expected}");
        }
        assert!(names.len() > 120, "catalog shrank to {}", names.len());
    }
}
