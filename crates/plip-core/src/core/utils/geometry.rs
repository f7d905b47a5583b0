//! Geometry kernel for interaction analysis.
//!
//! Pure functions over 3D points and vectors. The typed functions operate on
//! nalgebra [`Point3`] and [`Vector3`]; the `try_*` variants accept raw
//! coordinate slices from external collaborators and reject anything that is
//! not exactly three-dimensional.

use nalgebra::{Point3, Vector3};
use thiserror::Error;

/// Cosines are rounded to this many decimal digits before `acos`, so that
/// values like `1.0000000000000002` do not produce NaN.
const COSINE_DIGITS: i32 = 10;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum GeometryError {
    #[error("Expected 3-dimensional coordinates, got {left} and {right} components")]
    DimensionMismatch { left: usize, right: usize },
}

pub fn distance(p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    (p2 - p1).norm()
}

/// Vector pointing from `p1` to `p2`.
pub fn vector(p1: &Point3<f64>, p2: &Point3<f64>) -> Vector3<f64> {
    p2 - p1
}

/// Angle between two vectors, in degrees if `degrees` is set and radians otherwise.
///
/// Identical vectors yield exactly zero. A zero-length vector compared with a
/// different vector has no defined angle and yields NaN.
pub fn angle(v1: &Vector3<f64>, v2: &Vector3<f64>, degrees: bool) -> f64 {
    if v1 == v2 {
        return 0.0;
    }
    let cosine = v1.dot(v2) / (v1.norm() * v2.norm());
    let radians = round_to_digits(cosine, COSINE_DIGITS)
        .clamp(-1.0, 1.0)
        .acos();
    if degrees { radians.to_degrees() } else { radians }
}

/// Unit vector in the direction of `v`; the zero vector is returned unchanged.
pub fn normalize(v: &Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm == 0.0 { *v } else { v / norm }
}

/// Arithmetic mean of a point cloud, or `None` for an empty input.
pub fn centroid(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum / points.len() as f64))
}

/// Orthogonal projection of `target` onto the plane through `plane_point` with
/// the given normal.
///
/// The normal is first oriented toward the side of the plane on which `target`
/// lies, so the result does not depend on the sign the caller chose.
pub fn project_point_onto_plane(
    normal: &Vector3<f64>,
    plane_point: &Point3<f64>,
    target: &Point3<f64>,
) -> Point3<f64> {
    let flipped = -normal;
    let d_forward = distance(target, &(plane_point + normal));
    let d_backward = distance(target, &(plane_point + flipped));
    let oriented = if d_forward < d_backward { *normal } else { flipped };

    let scale = -oriented.dot(&vector(plane_point, target)) / oriented.dot(&oriented);
    target + oriented * scale
}

/// Converts a coordinate slice into a point, requiring exactly three components.
pub fn point_from_slice(coords: &[f64]) -> Result<Point3<f64>, GeometryError> {
    match coords {
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        _ => Err(GeometryError::DimensionMismatch {
            left: coords.len(),
            right: 3,
        }),
    }
}

fn points_from_slices(
    p1: &[f64],
    p2: &[f64],
) -> Result<(Point3<f64>, Point3<f64>), GeometryError> {
    if p1.len() != 3 || p2.len() != 3 {
        return Err(GeometryError::DimensionMismatch {
            left: p1.len(),
            right: p2.len(),
        });
    }
    Ok((point_from_slice(p1)?, point_from_slice(p2)?))
}

pub fn try_distance(p1: &[f64], p2: &[f64]) -> Result<f64, GeometryError> {
    let (a, b) = points_from_slices(p1, p2)?;
    Ok(distance(&a, &b))
}

pub fn try_vector(p1: &[f64], p2: &[f64]) -> Result<Vector3<f64>, GeometryError> {
    let (a, b) = points_from_slices(p1, p2)?;
    Ok(vector(&a, &b))
}

pub fn try_centroid<P: AsRef<[f64]>>(points: &[P]) -> Result<Option<Point3<f64>>, GeometryError> {
    let points = points
        .iter()
        .map(|p| point_from_slice(p.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(centroid(&points))
}

fn round_to_digits(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
