pub mod jobs;
pub mod pipelines;
pub mod runs;
