use thiserror::Error;

/// Configuration errors for the animation state machines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("smoothing factor must lie strictly between 0 and 1, got {0}")]
    InvalidSmoothing(f32),
    #[error("invalid {name} range: {lo}..{hi}")]
    InvalidRange {
        name: &'static str,
        lo: f32,
        hi: f32,
    },
    #[error("particle field needs at least one particle")]
    EmptyField,
}

pub type CoreResult<T> = Result<T, CoreError>;
