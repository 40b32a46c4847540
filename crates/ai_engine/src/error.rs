use thiserror::Error;

/// Configuration errors reported by the [`AIEngine`](crate::AIEngine)
/// setters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("time limit too small: {0} ms")]
    TimeLimitTooSmall(u64),

    #[error("search depth out of range: {0}")]
    DepthOutOfRange(u32),
}
