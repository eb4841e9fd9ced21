//! Fixed-size determinant kernels (orders 3 and 4).
//!
//! Purpose
//! - Provide the two small square-matrix types the sidedness predicates are
//!   built on, with determinants evaluated by explicit cofactor expansion so
//!   the term order is auditable against the textbook formulas.
//!
//! Why this design
//! - Row-major fixed arrays, no heap: the matrices live for one predicate
//!   evaluation on the stack.
//! - `from_rows` is the only constructor. Callers compute their row vectors
//!   (homogeneous 1s, lifted coordinates) explicitly instead of smuggling
//!   them through a point-shaped constructor; see `crate::predicates`.
//! - No inverse, no decompositions: a determinant sign is all the predicates
//!   consume, and nalgebra covers everything else where it is ever needed.

/// Row-major 3x3 matrix of f64 entries. Immutable after construction.
#[derive(Clone, Copy, Debug)]
pub struct Mat3 {
    rows: [[f64; 3]; 3],
}

impl Mat3 {
    /// Build from three explicit rows.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Determinant by cofactor expansion along the first column.
    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.rows;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[1][0] * (m[0][1] * m[2][2] - m[0][2] * m[2][1])
            + m[2][0] * (m[0][1] * m[1][2] - m[0][2] * m[1][1])
    }
}

/// Row-major 4x4 matrix of f64 entries. Immutable after construction.
#[derive(Clone, Copy, Debug)]
pub struct Mat4 {
    rows: [[f64; 4]; 4],
}

impl Mat4 {
    /// Build from four explicit rows.
    #[inline]
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Determinant by Laplace expansion along the first row into four order-3
    /// minors, each built from the last three rows with one column deleted.
    pub fn determinant(&self) -> f64 {
        let m = &self.rows;
        let a = Mat3::from_rows([
            [m[1][1], m[1][2], m[1][3]],
            [m[2][1], m[2][2], m[2][3]],
            [m[3][1], m[3][2], m[3][3]],
        ]);
        let b = Mat3::from_rows([
            [m[1][0], m[1][2], m[1][3]],
            [m[2][0], m[2][2], m[2][3]],
            [m[3][0], m[3][2], m[3][3]],
        ]);
        let c = Mat3::from_rows([
            [m[1][0], m[1][1], m[1][3]],
            [m[2][0], m[2][1], m[2][3]],
            [m[3][0], m[3][1], m[3][3]],
        ]);
        let d = Mat3::from_rows([
            [m[1][0], m[1][1], m[1][2]],
            [m[2][0], m[2][1], m[2][2]],
            [m[3][0], m[3][1], m[3][2]],
        ]);
        m[0][0] * a.determinant() - m[0][1] * b.determinant() + m[0][2] * c.determinant()
            - m[0][3] * d.determinant()
    }
}
