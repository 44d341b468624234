pub mod alerts;
pub mod dashboards;
pub mod queries;
pub mod statements;
pub mod visualizations;
pub mod warehouses;
