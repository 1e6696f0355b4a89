/// Errors produced by the journey context.
#[derive(Debug, thiserror::Error)]
pub enum JourneyError {
    #[error("journey context has been shut down")]
    ShutDown,
    #[error("a join is already in progress")]
    JoinInProgress,
}
