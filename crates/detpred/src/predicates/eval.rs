//! Predicate evaluation: one explicit matrix, one determinant per query.
//!
//! Every predicate here assembles its rows in full view before handing them
//! to `Mat3`/`Mat4`. The homogeneous trailing 1 and, for `incircle`, the
//! paraboloid lift `x^2 + y^2` are written out where the matrix is built. A
//! tempting shortcut is to feed the lifted coordinate into a 3D point slot
//! and reuse an orientation test; the shapes match but the meaning does not,
//! so this module never constructs matrices from points, only from rows.
//!
//! References
//! - Ericson, Real-Time Collision Detection, section 3.3.4 (determinant
//!   predicates) for the matrix forms and sign conventions.

use crate::det::{Mat3, Mat4};
use crate::{Vec2, Vec3};

use super::types::{CircleSide, LineSide, PlaneSide};

/// Lifted coordinate for the in-circle matrix: squared distance from origin.
#[inline]
fn lift(p: Vec2<f64>) -> f64 {
    p.x * p.x + p.y * p.y
}

/// Orientation of `c` relative to the directed line `a -> b`.
///
/// Positive: `c` lies to the left (triangle `a, b, c` winds
/// counterclockwise). Negative: to the right. Zero: collinear.
#[inline]
pub fn orient2d(a: Vec2<f64>, b: Vec2<f64>, c: Vec2<f64>) -> f64 {
    Mat3::from_rows([[a.x, a.y, 1.0], [b.x, b.y, 1.0], [c.x, c.y, 1.0]]).determinant()
}

/// Orientation of `d` relative to the oriented plane through `a, b, c`.
///
/// Positive: `d` lies below the plane, where "above" is the side from which
/// `a, b, c` appear counterclockwise. Negative: above. Zero: coplanar.
#[inline]
pub fn orient3d(a: Vec3<f64>, b: Vec3<f64>, c: Vec3<f64>, d: Vec3<f64>) -> f64 {
    Mat4::from_rows([
        [a.x, a.y, a.z, 1.0],
        [b.x, b.y, b.z, 1.0],
        [c.x, c.y, c.z, 1.0],
        [d.x, d.y, d.z, 1.0],
    ])
    .determinant()
}

/// Position of `d` relative to the circle through `a, b, c`.
///
/// Positive: `d` lies strictly inside. Negative: strictly outside. Zero: the
/// four points are cocircular. Requires `a, b, c` in counterclockwise order;
/// a clockwise triple reverses the sign.
#[inline]
pub fn incircle(a: Vec2<f64>, b: Vec2<f64>, c: Vec2<f64>, d: Vec2<f64>) -> f64 {
    Mat4::from_rows([
        [a.x, a.y, lift(a), 1.0],
        [b.x, b.y, lift(b), 1.0],
        [c.x, c.y, lift(c), 1.0],
        [d.x, d.y, lift(d), 1.0],
    ])
    .determinant()
}

/// Classified form of [`orient2d`]. Strict sign; see
/// [`LineSide::from_det_eps`] for tolerance-based classification.
#[inline]
pub fn side_of_line(a: Vec2<f64>, b: Vec2<f64>, c: Vec2<f64>) -> LineSide {
    LineSide::from_det(orient2d(a, b, c))
}

/// Classified form of [`orient3d`].
#[inline]
pub fn side_of_plane(a: Vec3<f64>, b: Vec3<f64>, c: Vec3<f64>, d: Vec3<f64>) -> PlaneSide {
    PlaneSide::from_det(orient3d(a, b, c, d))
}

/// Classified form of [`incircle`].
#[inline]
pub fn side_of_circle(a: Vec2<f64>, b: Vec2<f64>, c: Vec2<f64>, d: Vec2<f64>) -> CircleSide {
    CircleSide::from_det(incircle(a, b, c, d))
}

/// Twice the signed area of triangle `a, b, c`, positive for
/// counterclockwise winding. Identical to the orientation determinant.
#[inline]
pub fn triangle_area2(a: Vec2<f64>, b: Vec2<f64>, c: Vec2<f64>) -> f64 {
    orient2d(a, b, c)
}

/// Six times the signed volume of tetrahedron `a, b, c, d`, following the
/// `(b - a) . ((c - a) x (d - a))` convention. Equal to the negated
/// orientation determinant.
#[inline]
pub fn tetrahedron_volume6(a: Vec3<f64>, b: Vec3<f64>, c: Vec3<f64>, d: Vec3<f64>) -> f64 {
    -orient3d(a, b, c, d)
}
