//! Classification enums for the determinant signs.
//!
//! Each predicate in `eval` returns the raw signed determinant; these types
//! fold that scalar into the three-way answer callers usually want. Strict
//! classification (`from_det`) treats only exact zero as degenerate.
//! Tolerance-based classification (`from_det_eps`) takes an explicit eps so
//! the caller decides the scale; there is no hidden global tolerance.

use std::fmt;

/// Position of a point relative to a directed line `a -> b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineSide {
    /// Strictly left of the line (triangle `a, b, c` counterclockwise).
    Left,
    /// Strictly right of the line (triangle `a, b, c` clockwise).
    Right,
    /// On the line, within the chosen tolerance.
    Collinear,
}

impl LineSide {
    /// Classify a raw `orient2d` value by strict sign.
    /// Non-finite input maps to `Collinear`.
    #[inline]
    pub fn from_det(det: f64) -> Self {
        Self::from_det_eps(det, 0.0)
    }

    /// Classify with `|det| <= eps` counted as collinear.
    /// Non-finite input maps to `Collinear`.
    #[inline]
    pub fn from_det_eps(det: f64, eps: f64) -> Self {
        if !det.is_finite() {
            Self::Collinear
        } else if det > eps {
            Self::Left
        } else if det < -eps {
            Self::Right
        } else {
            Self::Collinear
        }
    }
}

impl fmt::Display for LineSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left of the line"),
            Self::Right => write!(f, "right of the line"),
            Self::Collinear => write!(f, "on the line"),
        }
    }
}

/// Position of a point relative to the oriented plane through `a, b, c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaneSide {
    /// Strictly below the plane (positive `orient3d`).
    Below,
    /// Strictly above the plane (negative `orient3d`).
    Above,
    /// On the plane, within the chosen tolerance.
    Coplanar,
}

impl PlaneSide {
    /// Classify a raw `orient3d` value by strict sign.
    /// Non-finite input maps to `Coplanar`.
    #[inline]
    pub fn from_det(det: f64) -> Self {
        Self::from_det_eps(det, 0.0)
    }

    /// Classify with `|det| <= eps` counted as coplanar.
    /// Non-finite input maps to `Coplanar`.
    #[inline]
    pub fn from_det_eps(det: f64, eps: f64) -> Self {
        if !det.is_finite() {
            Self::Coplanar
        } else if det > eps {
            Self::Below
        } else if det < -eps {
            Self::Above
        } else {
            Self::Coplanar
        }
    }
}

impl fmt::Display for PlaneSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Below => write!(f, "below the plane"),
            Self::Above => write!(f, "above the plane"),
            Self::Coplanar => write!(f, "on the plane"),
        }
    }
}

/// Position of a point relative to the circle through `a, b, c`.
///
/// The sign convention assumes `a, b, c` wind counterclockwise; a clockwise
/// triple swaps `Inside` and `Outside`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CircleSide {
    /// Strictly inside the circle (positive `incircle`).
    Inside,
    /// Strictly outside the circle (negative `incircle`).
    Outside,
    /// On the circle, within the chosen tolerance.
    Cocircular,
}

impl CircleSide {
    /// Classify a raw `incircle` value by strict sign.
    /// Non-finite input maps to `Cocircular`.
    #[inline]
    pub fn from_det(det: f64) -> Self {
        Self::from_det_eps(det, 0.0)
    }

    /// Classify with `|det| <= eps` counted as cocircular.
    /// Non-finite input maps to `Cocircular`.
    #[inline]
    pub fn from_det_eps(det: f64, eps: f64) -> Self {
        if !det.is_finite() {
            Self::Cocircular
        } else if det > eps {
            Self::Inside
        } else if det < -eps {
            Self::Outside
        } else {
            Self::Cocircular
        }
    }
}

impl fmt::Display for CircleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inside => write!(f, "inside the circle"),
            Self::Outside => write!(f, "outside the circle"),
            Self::Cocircular => write!(f, "on the circle"),
        }
    }
}
