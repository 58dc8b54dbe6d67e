//! Recentering and rescaling of a sampled path into a canonical volume.

use nalgebra::Vector3;
use serde::Serialize;

use crate::error::{Result, TubeError};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl Aabb {
    /// Returns `None` for an empty point set.
    pub fn from_points(points: &[Vector3<f64>]) -> Option<Self> {
        let first = points.first()?;
        let mut aabb = Aabb {
            min: *first,
            max: *first,
        };
        for p in &points[1..] {
            aabb.min = aabb.min.inf(p);
            aabb.max = aabb.max.sup(p);
        }
        Some(aabb)
    }

    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    pub fn max_extent(&self) -> f64 {
        self.size().max()
    }

    pub fn center(&self) -> Vector3<f64> {
        (self.min + self.max) * 0.5
    }
}

/// Centers the points on their centroid, lifts them so the lowest y is 0, then scales
/// uniformly so the largest axis extent equals `target_size`. Returns the final box.
///
/// Directions (tangents, normals) are invariant under this transform.
pub fn normalize_positions(points: &mut [Vector3<f64>], target_size: f64) -> Result<Aabb> {
    if !(target_size.is_finite() && target_size > 0.0) {
        return Err(TubeError::InvalidTargetSize(target_size));
    }
    if points.is_empty() {
        return Err(TubeError::DegenerateExtent);
    }

    let centroid = points.iter().sum::<Vector3<f64>>() / points.len() as f64;
    for p in points.iter_mut() {
        *p -= centroid;
    }

    let aabb = Aabb::from_points(points).ok_or(TubeError::DegenerateExtent)?;
    let max_dim = aabb.max_extent();
    if !(max_dim.is_finite() && max_dim > 0.0) {
        return Err(TubeError::DegenerateExtent);
    }

    // Lift in unscaled units first so the floor stays at y = 0 after scaling.
    let offset = Vector3::new(0.0, -aabb.min.y, 0.0);
    let scale = target_size / max_dim;
    for p in points.iter_mut() {
        *p += offset;
        *p *= scale;
    }

    Ok(Aabb {
        min: (aabb.min + offset) * scale,
        max: (aabb.max + offset) * scale,
    })
}
