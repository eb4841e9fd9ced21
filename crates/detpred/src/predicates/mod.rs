//! Sidedness predicates over points in R^2 and R^3.
//!
//! Purpose
//! - Classify a query point against a directed line (2D), an oriented plane
//!   (3D), or the circle through three points, each as the sign of one small
//!   determinant.
//! - Keep the determinant rows explicit: every predicate computes named row
//!   vectors and hands them to `crate::det`, so the homogeneous column and
//!   the lifted in-circle coordinate are visible at the construction site.
//!
//! Layers
//! - `eval`: raw signed determinants plus thin classified wrappers.
//! - `types`: the three-way classification enums and their eps handling.
//!
//! Precision
//! - Plain f64 throughout. Near-degenerate inputs can be misclassified by
//!   cancellation; see the crate docs for where that trade-off is acceptable.

mod eval;
mod types;

pub use eval::{
    incircle, orient2d, orient3d, side_of_circle, side_of_line, side_of_plane,
    tetrahedron_volume6, triangle_area2,
};
pub use types::{CircleSide, LineSide, PlaneSide};
