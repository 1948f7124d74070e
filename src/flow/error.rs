use thiserror::Error;

/// Errors returned when wiring a reactor flow.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("start_flow must be called from within a tokio runtime")]
    NoRuntime,

    #[error("Dispose bag has already been disposed")]
    Disposed,
}
