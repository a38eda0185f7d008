pub mod config;
pub mod logger;
pub mod sky_pipeline;
