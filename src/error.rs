use thiserror::Error;

/// Top-level error type for sector triangulation.
#[derive(Debug, Error)]
pub enum TessError {
    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised by misuse of the level store.
///
/// These signal a bug in the caller (a stale key, a wall index from another
/// sector), never a malformed level.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("wall index {index} out of range for a sector with {len} walls")]
    WallIndexOutOfRange { index: usize, len: usize },
}

/// Recoverable defects in a sector's wall geometry.
///
/// The display text is appended to the sector label when the failure is
/// recorded as a warning.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("has no closed wall loop, floor/ceiling not drawn")]
    NoClosedLoop,

    #[error("failed to draw floor/ceiling, probably invalid geometry")]
    UnmergeableHole { remaining: usize },

    #[error("failed to draw floor/ceiling, probably invalid geometry")]
    NoEar { remaining: usize },
}

/// Convenience type alias for results using [`TessError`].
pub type Result<T> = std::result::Result<T, TessError>;
