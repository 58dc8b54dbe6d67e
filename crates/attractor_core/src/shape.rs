//! Closed 2D cross-sections swept along the path.

use std::f64::consts::TAU;

use nalgebra::Vector2;

use crate::error::{Result, TubeError};

/// `F` boundary points in counter-clockwise order with their outward unit normals.
///
/// The loop closes implicitly: facet `F - 1` connects back to point 0, so the seam
/// point is never stored twice.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSectionShape {
    pub points: Vec<Vector2<f64>>,
    pub normals: Vec<Vector2<f64>>,
}

impl CrossSectionShape {
    /// Regular polygon inscribed in a circle of `radius`.
    pub fn circle(radius: f64, facets: usize) -> Result<Self> {
        validate(radius, facets)?;
        Ok(Self::radial(facets, |_| radius))
    }

    /// Star polygon alternating between `radius * outer_ratio` (even points) and
    /// `radius` (odd points). Normals stay radial, as for the circle.
    pub fn star(radius: f64, facets: usize, outer_ratio: f64) -> Result<Self> {
        validate(radius, facets)?;
        if facets % 2 != 0 {
            return Err(TubeError::InvalidProfile(format!(
                "star profile needs an even facet count, got {}",
                facets
            )));
        }
        if !(outer_ratio.is_finite() && outer_ratio > 0.0) {
            return Err(TubeError::InvalidProfile(format!(
                "star outer ratio must be finite and positive, got {}",
                outer_ratio
            )));
        }
        Ok(Self::radial(facets, |j| {
            if j % 2 == 0 {
                radius * outer_ratio
            } else {
                radius
            }
        }))
    }

    pub fn facets(&self) -> usize {
        self.points.len()
    }

    fn radial(facets: usize, radius_at: impl Fn(usize) -> f64) -> Self {
        let (points, normals): (Vec<_>, Vec<_>) = (0..facets)
            .map(|j| {
                let angle = TAU * j as f64 / facets as f64;
                let direction = Vector2::new(angle.cos(), angle.sin());
                (direction * radius_at(j), direction)
            })
            .unzip();
        Self { points, normals }
    }
}

fn validate(radius: f64, facets: usize) -> Result<()> {
    if facets < 3 {
        return Err(TubeError::InvalidFacets(facets));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(TubeError::InvalidRadius(radius));
    }
    Ok(())
}
