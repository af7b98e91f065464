pub mod config;
pub mod language;
pub mod metrics;
pub mod report;
