//! Seeded point samplers for predicate tests and benches.
//!
//! Purpose
//! - Provide reproducible input configurations with known ground truth: free
//!   points in a box, circle cases with inside/outside/on-circle probes, and
//!   plane cases with above/below/on-plane probes.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so a failing case can be reproduced from its token alone.
//!
//! Ground truth caveat
//! - The on-circle and on-plane probes are constructed from trigonometric or
//!   averaged coordinates and are degenerate only up to rounding. Checks
//!   against them need a tolerance; the strictly-inside/outside probes are
//!   separated far enough to classify by strict sign.

use crate::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use std::fmt;

// Upper bound for extents and radii. The plane sampler takes the norm of a
// cross product whose components reach twice the squared extent, and the norm
// squares those components again, so intermediates reach the fourth power of
// the extent. The cap stays well below the fourth root of f64::MAX.
const MAX_EXTENT: f64 = 1e60;

/// Error type shared by the samplers.
#[derive(Debug)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Axis-aligned sampling cube `[-half_extent, half_extent]^d`.
#[derive(Clone, Copy, Debug)]
pub struct BoxCfg {
    pub half_extent: f64,
}

impl Default for BoxCfg {
    fn default() -> Self {
        Self { half_extent: 10.0 }
    }
}

impl BoxCfg {
    fn validate(&self) -> Result<(), SampleError> {
        if !self.half_extent.is_finite() || self.half_extent <= 0.0 {
            return Err(SampleError::invalid(
                "half_extent must be finite and positive",
            ));
        }
        if self.half_extent > MAX_EXTENT {
            return Err(SampleError::invalid(format!(
                "half_extent must be at most {MAX_EXTENT:e}"
            )));
        }
        Ok(())
    }
}

/// Draw `n` points uniformly from the box in R^2.
pub fn draw_points2(
    cfg: BoxCfg,
    tok: ReplayToken,
    n: usize,
) -> Result<Vec<Vec2<f64>>, SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent;
    Ok((0..n)
        .map(|_| Vec2::new(sample_in(&mut rng, h), sample_in(&mut rng, h)))
        .collect())
}

/// Draw `n` points uniformly from the box in R^3.
pub fn draw_points3(
    cfg: BoxCfg,
    tok: ReplayToken,
    n: usize,
) -> Result<Vec<Vec3<f64>>, SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent;
    Ok((0..n)
        .map(|_| {
            Vec3::new(
                sample_in(&mut rng, h),
                sample_in(&mut rng, h),
                sample_in(&mut rng, h),
            )
        })
        .collect())
}

/// Circle-case sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CircleCfg {
    /// Circle centers are drawn from `[-center_extent, center_extent]^2`.
    pub center_extent: f64,
    /// Radius bounds, `0 < radius_min <= radius_max`.
    pub radius_min: f64,
    pub radius_max: f64,
    /// Angular jitter on the three base angles, as a fraction of the base
    /// spacing 2*pi/3. Clamped to [0, 0.49] so the points stay distinct and
    /// counterclockwise.
    pub angle_jitter_frac: f64,
    /// Radial offset of the inside/outside probes as a fraction of the
    /// radius. Clamped to [0.05, 0.95].
    pub probe_offset: f64,
}

impl Default for CircleCfg {
    fn default() -> Self {
        Self {
            center_extent: 10.0,
            radius_min: 0.5,
            radius_max: 5.0,
            angle_jitter_frac: 0.3,
            probe_offset: 0.2,
        }
    }
}

impl CircleCfg {
    fn validate(&self) -> Result<(), SampleError> {
        if !self.center_extent.is_finite() || self.center_extent < 0.0 {
            return Err(SampleError::invalid(
                "center_extent must be finite and non-negative",
            ));
        }
        if !(self.radius_min.is_finite() && self.radius_max.is_finite()) {
            return Err(SampleError::invalid("radius bounds must be finite"));
        }
        if self.radius_min <= 0.0 {
            return Err(SampleError::invalid("radius_min must be > 0"));
        }
        if self.radius_min > self.radius_max {
            return Err(SampleError::invalid("radius_min <= radius_max required"));
        }
        if self.center_extent > MAX_EXTENT || self.radius_max > MAX_EXTENT {
            return Err(SampleError::invalid(format!(
                "center_extent and radius_max must be at most {MAX_EXTENT:e}"
            )));
        }
        Ok(())
    }
}

/// One sampled circle scenario with ground-truth probes.
///
/// `a, b, c` lie on the circle in counterclockwise order. `d_in` and `d_out`
/// are strictly inside and outside; `d_on` lies on the circle up to rounding.
#[derive(Clone, Copy, Debug)]
pub struct CircleCase {
    pub a: Vec2<f64>,
    pub b: Vec2<f64>,
    pub c: Vec2<f64>,
    pub d_in: Vec2<f64>,
    pub d_out: Vec2<f64>,
    pub d_on: Vec2<f64>,
    pub center: Vec2<f64>,
    pub radius: f64,
}

/// Draw a circle case: three counterclockwise points on a random circle plus
/// inside/outside/on-circle probes.
pub fn draw_circle_case(cfg: CircleCfg, tok: ReplayToken) -> Result<CircleCase, SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let e = cfg.center_extent;
    let center = Vec2::new(sample_in(&mut rng, e), sample_in(&mut rng, e));
    let radius = rng.gen_range(cfg.radius_min..=cfg.radius_max);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let off = cfg.probe_offset.clamp(0.05, 0.95);
    let delta = 2.0 * PI / 3.0;
    let phase = rng.gen::<f64>() * 2.0 * PI;
    // Jitter below delta/2 keeps the three angles strictly increasing, so
    // a, b, c stay counterclockwise by construction.
    let on_circle = |rng: &mut StdRng, base: f64| {
        let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
        let th = base + jitter;
        Vec2::new(center.x + radius * th.cos(), center.y + radius * th.sin())
    };
    let a = on_circle(&mut rng, phase);
    let b = on_circle(&mut rng, phase + delta);
    let c = on_circle(&mut rng, phase + 2.0 * delta);
    let probe_th = rng.gen::<f64>() * 2.0 * PI;
    let dir = Vec2::new(probe_th.cos(), probe_th.sin());
    let d_in = center + dir * (radius * (1.0 - off));
    let d_out = center + dir * (radius * (1.0 + off));
    let d_on = center + dir * radius;
    Ok(CircleCase {
        a,
        b,
        c,
        d_in,
        d_out,
        d_on,
        center,
        radius,
    })
}

/// Plane-case sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PlaneCfg {
    /// Base point and spanning edges are drawn from `[-half_extent, half_extent]^3`.
    pub half_extent: f64,
    /// Probe distance from the plane as a fraction of the mean edge length.
    /// Clamped to [0.05, 1.0].
    pub probe_offset: f64,
}

impl Default for PlaneCfg {
    fn default() -> Self {
        Self {
            half_extent: 10.0,
            probe_offset: 0.25,
        }
    }
}

impl PlaneCfg {
    fn validate(&self) -> Result<(), SampleError> {
        if !self.half_extent.is_finite() || self.half_extent <= 0.0 {
            return Err(SampleError::invalid(
                "half_extent must be finite and positive",
            ));
        }
        if self.half_extent > MAX_EXTENT {
            return Err(SampleError::invalid(format!(
                "half_extent must be at most {MAX_EXTENT:e}"
            )));
        }
        Ok(())
    }
}

/// One sampled plane scenario with ground-truth probes.
///
/// The plane passes through `a, b, c`; "above" is the side from which the
/// triangle appears counterclockwise. `d_on` is the triangle centroid, on the
/// plane up to rounding.
#[derive(Clone, Copy, Debug)]
pub struct PlaneCase {
    pub a: Vec3<f64>,
    pub b: Vec3<f64>,
    pub c: Vec3<f64>,
    pub d_above: Vec3<f64>,
    pub d_below: Vec3<f64>,
    pub d_on: Vec3<f64>,
}

/// Draw a plane case: a non-degenerate triangle plus above/below/on-plane
/// probes along its unit normal.
pub fn draw_plane_case(cfg: PlaneCfg, tok: ReplayToken) -> Result<PlaneCase, SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent;
    let off = cfg.probe_offset.clamp(0.05, 1.0);
    let a = Vec3::new(
        sample_in(&mut rng, h),
        sample_in(&mut rng, h),
        sample_in(&mut rng, h),
    );
    // Resample edges until the triangle is comfortably non-degenerate.
    let (u, v, normal) = loop {
        let u = Vec3::new(
            sample_in(&mut rng, h),
            sample_in(&mut rng, h),
            sample_in(&mut rng, h),
        );
        let v = Vec3::new(
            sample_in(&mut rng, h),
            sample_in(&mut rng, h),
            sample_in(&mut rng, h),
        );
        let n = u.cross(&v);
        if n.norm() > 1e-3 * h * h {
            break (u, v, n);
        }
    };
    let b = a + u;
    let c = a + v;
    let unit_normal = normal / normal.norm();
    let centroid = (a + b + c) / 3.0;
    let dist = off * 0.5 * (u.norm() + v.norm());
    Ok(PlaneCase {
        a,
        b,
        c,
        d_above: centroid + unit_normal * dist,
        d_below: centroid - unit_normal * dist,
        d_on: centroid,
    })
}

// Uniform in [-h, h].
fn sample_in(rng: &mut StdRng, h: f64) -> f64 {
    rng.gen::<f64>() * 2.0 * h - h
}
