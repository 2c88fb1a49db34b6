use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    /// The process-wide logger can only be installed once.
    #[error("logger is already initialized")]
    AlreadyInitialized,
}
