//! Point-location walkthrough on three fixed configurations.
//!
//! Purpose
//! - Run each predicate end to end on small hand-checkable inputs: a line
//!   query, a plane query, and an in-circle query.
//! - Print the raw determinant next to the classified answer so the sign
//!   conventions can be read off directly.
//!
//! Why this shape
//! - The inputs are integers and half-integers, so every determinant below
//!   evaluates exactly and the printed values are stable across hosts.

use detpred::predicates::{
    incircle, orient2d, orient3d, side_of_circle, side_of_line, side_of_plane,
};
use nalgebra::vector;

fn main() {
    // Where is c relative to the directed line a -> b?
    let a = vector![10.0, 10.0];
    let b = vector![5.0, 5.0];
    let c = vector![4.0, 15.0];
    println!("orient2d((10,10), (5,5), (4,15)) = {}", orient2d(a, b, c));
    println!("  (4,15) is {}", side_of_line(a, b, c));

    // Where is d relative to the plane through a, b, c?
    let a = vector![1.0, 4.0, 2.0];
    let b = vector![0.0, 1.0, 4.0];
    let c = vector![-1.0, 0.0, 1.0];
    let d = vector![2.0, 0.0, 4.0];
    println!(
        "orient3d((1,4,2), (0,1,4), (-1,0,1), (2,0,4)) = {}",
        orient3d(a, b, c, d)
    );
    println!("  (2,0,4) is {}", side_of_plane(a, b, c, d));

    // Where is d relative to the circle through the counterclockwise
    // triangle a, b, c? Here d is the circumcenter.
    let a = vector![5.0, 5.0];
    let b = vector![4.0, 5.0];
    let c = vector![4.0, 2.0];
    let d = vector![4.5, 3.5];
    println!(
        "incircle((5,5), (4,5), (4,2), (4.5,3.5)) = {}",
        incircle(a, b, c, d)
    );
    println!("  (4.5,3.5) is {}", side_of_circle(a, b, c, d));
}
