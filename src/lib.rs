pub mod config;
pub mod errors;
pub mod logger;
pub mod metrics;
pub mod repairer;
pub mod table;
