pub mod client;
pub mod dbfs;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
