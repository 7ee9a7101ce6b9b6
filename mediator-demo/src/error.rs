use config::ConfigError;
use log::SetLoggerError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Cannot load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationErrors),
    #[error("Cannot install logger: {0}")]
    Logger(#[from] SetLoggerError),
}
