//! Simulation-specific error types.
//!
//! Systems should propagate errors through these types rather than panicking
//! where practical, enabling graceful degradation instead of hard crashes.
//! Generation and shatter failures degrade to "skip this object" with a
//! logged warning; only programmer errors panic.

use std::fmt;

/// Top-level error enum for the simulation.
#[derive(Debug)]
pub enum SimError {
    /// Convex hull computation failed, usually because fewer than 3
    /// non-duplicate input points were available.
    HullComputation {
        /// Number of input vertices passed to the hull algorithm.
        vertex_count: usize,
    },

    /// A polygon would have too few vertices to form a valid collider.
    InsufficientVertices {
        /// Actual vertex count provided.
        got: usize,
        /// Minimum required.
        required: usize,
    },

    /// Triangulation of a shatter ring produced no usable fragments.
    /// The parent is removed without children rather than left intact.
    DegenerateShatter {
        /// Vertex count of the ring that failed to triangulate.
        ring_len: usize,
    },

    /// The physics backend rejected a convex polygon collider.
    ColliderRejected {
        /// Vertex count of the rejected polygon.
        vertex_count: usize,
    },

    /// A referenced entity could not be found in the world, typically a
    /// despawn race between contact resolution and removal sweeps.
    EntityNotFound {
        /// Human-readable description of where the lookup occurred.
        context: &'static str,
    },

    /// A tunable value is outside its safe operating range.
    UnsafeConstant {
        /// Name of the value (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::HullComputation { vertex_count } => write!(
                f,
                "convex hull computation failed: only {} usable vertices after deduplication \
                 (need ≥ 3)",
                vertex_count
            ),
            SimError::InsufficientVertices { got, required } => write!(
                f,
                "polygon vertex count too low: got {}, need at least {}",
                got, required
            ),
            SimError::DegenerateShatter { ring_len } => write!(
                f,
                "shatter triangulation yielded no usable fragments from a {}-vertex ring",
                ring_len
            ),
            SimError::ColliderRejected { vertex_count } => write!(
                f,
                "physics backend rejected a {}-vertex convex polygon collider",
                vertex_count
            ),
            SimError::EntityNotFound { context } => {
                write!(f, "entity not found during '{}'", context)
            }
            SimError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "value '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if `load_distance` is not strictly positive.
pub fn validate_load_distance(value: f32) -> SimResult<()> {
    if value <= 0.0 {
        Err(SimError::UnsafeConstant {
            name: "load_distance",
            value,
            safe_range: "(0.0, ∞)",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if `min_shatter_area` would let zero-area fragments keep
/// shattering forever.
pub fn validate_min_shatter_area(value: f32) -> SimResult<()> {
    if value <= 0.0 {
        Err(SimError::UnsafeConstant {
            name: "min_shatter_area",
            value,
            safe_range: "(0.0, ∞)",
        })
    } else {
        Ok(())
    }
}
