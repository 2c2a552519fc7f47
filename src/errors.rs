use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("repair error: {0}")]
    Repair(#[from] crate::repairer::RepairError),
}
