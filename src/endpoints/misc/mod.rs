pub mod budgets;
pub mod commands;
pub mod experiments;
pub mod lakeview;
pub mod serving;
