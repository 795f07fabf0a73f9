use thiserror::Error;

/// Top-level error type for the detour route planner.
#[derive(Debug, Error)]
pub enum DetourError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Planner(#[from] PlannerError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("obstacle ring needs at least 3 distinct vertices, got {vertices}")]
    DegenerateRing { vertices: usize },

    #[error("split point ({x}, {y}) not found on the boundary")]
    SplitPointNotFound { x: f64, y: f64 },
}

/// Errors related to route planning.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("destination ({x}, {y}) lies inside obstacle {obstacle}")]
    DestinationInsideObstacle { x: f64, y: f64, obstacle: usize },

    #[error("tolerance {value} is out of range [0, 0.5)")]
    InvalidTolerance { value: f64 },
}

/// Convenience type alias for results using [`DetourError`].
pub type Result<T> = std::result::Result<T, DetourError>;
