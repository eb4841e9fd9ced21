//! Determinant-based point location predicates.
//!
//! Orientation in R^2 and R^3 plus the planar in-circle test, each evaluated
//! as the sign of a small determinant assembled from explicit row vectors.
//! `det` holds the order-3/4 kernels, `predicates` the geometric layer on
//! top, `sampler` seeded generators for test and bench inputs.
//!
//! Precision
//! - All arithmetic is plain f64. Signs are trustworthy away from degeneracy
//!   but can flip for nearly collinear or nearly cocircular inputs; callers
//!   that need exact decisions there want an adaptive-precision predicate
//!   library, not this crate.

pub mod det;
pub mod predicates;
pub mod sampler;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so call sites write Vec2/Vec3 for point arguments.
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::det::{Mat3, Mat4};
    pub use crate::predicates::{
        incircle, orient2d, orient3d, side_of_circle, side_of_line, side_of_plane, CircleSide,
        LineSide, PlaneSide,
    };
    pub use crate::sampler::ReplayToken;
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
