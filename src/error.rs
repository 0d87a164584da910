use thiserror::Error;

/// Errors raised while composing segments into a path.
///
/// Segment construction and sampling never fail; only chaining segments
/// whose endpoints or boundary speeds disagree does.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("a path needs at least one segment")]
    Empty,

    #[error("gap of {gap} after segment {index}")]
    PositionGap { index: usize, gap: f64 },

    #[error("segment {index} ends at speed {outgoing} but the next starts at {incoming}")]
    SpeedMismatch {
        index: usize,
        outgoing: f64,
        incoming: f64,
    },
}

/// Convenience type alias for results using [`PathError`].
pub type Result<T> = std::result::Result<T, PathError>;
