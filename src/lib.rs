pub mod config;
pub mod distance;
pub mod domain;
pub mod export;
pub mod pipeline;
pub mod pricing;
pub mod report;
pub mod utils;
