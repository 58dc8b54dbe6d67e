//! End-to-end build: validate settings, integrate, normalize, extrude.

use std::ops::ControlFlow;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::attractors::Attractor;
use crate::config::{
    DEFAULT_COUNT, DEFAULT_FACETS, DEFAULT_RADIUS, DEFAULT_STAR_OUTER_RATIO, DEFAULT_SUB_STEPS,
    DEFAULT_TARGET_SIZE, DEFAULT_TIME_STEP,
};
use crate::error::{Result, TubeError};
use crate::mesh::{expected_vertex_count, extrude, TubeMesh};
use crate::normalize::{normalize_positions, Aabb};
use crate::path::{build_path, AttractorPath, Frame};
use crate::shape::CrossSectionShape;

/// Cross-section swept along the path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Profile {
    #[default]
    Circle,
    Star { outer_ratio: f64 },
}

impl Profile {
    pub fn star() -> Self {
        Profile::Star {
            outer_ratio: DEFAULT_STAR_OUTER_RATIO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TubeSettings {
    /// Number of path samples (rings).
    pub count: usize,
    pub attractor: Attractor,
    /// Cross-section radius, in normalized units.
    pub radius: f64,
    pub time_step: f64,
    pub facets: usize,
    /// Euler sub-steps per sample.
    pub sub_steps: usize,
    /// Largest axis extent of the normalized path.
    pub target_size: f64,
    pub profile: Profile,
}

impl Default for TubeSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            attractor: Attractor::Lorenz,
            radius: DEFAULT_RADIUS,
            time_step: DEFAULT_TIME_STEP,
            facets: DEFAULT_FACETS,
            sub_steps: DEFAULT_SUB_STEPS,
            target_size: DEFAULT_TARGET_SIZE,
            profile: Profile::Circle,
        }
    }
}

impl TubeSettings {
    pub fn new(
        count: usize,
        attractor: Attractor,
        radius: f64,
        time_step: f64,
        facets: usize,
    ) -> Self {
        Self {
            count,
            attractor,
            radius,
            time_step,
            facets,
            ..Self::default()
        }
    }

    /// Rejects every configuration error up front; values are never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.count < 2 {
            return Err(TubeError::InvalidCount(self.count));
        }
        if self.facets < 3 {
            return Err(TubeError::InvalidFacets(self.facets));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(TubeError::InvalidRadius(self.radius));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(TubeError::InvalidTimeStep(self.time_step));
        }
        if self.sub_steps == 0 {
            return Err(TubeError::InvalidSubSteps(self.sub_steps));
        }
        if !(self.target_size.is_finite() && self.target_size > 0.0) {
            return Err(TubeError::InvalidTargetSize(self.target_size));
        }
        self.cross_section()?;

        let fits = self
            .count
            .checked_mul(self.facets)
            .and_then(|rings| rings.checked_add(2))
            .is_some_and(|vertices| vertices - 1 <= u32::MAX as usize);
        if !fits {
            return Err(TubeError::MeshTooLarge {
                count: self.count,
                facets: self.facets,
            });
        }
        Ok(())
    }

    pub fn cross_section(&self) -> Result<CrossSectionShape> {
        match self.profile {
            Profile::Circle => CrossSectionShape::circle(self.radius, self.facets),
            Profile::Star { outer_ratio } => {
                CrossSectionShape::star(self.radius, self.facets, outer_ratio)
            }
        }
    }
}

/// Borrowed render buffers of a built tube.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TubeGeometry<'a> {
    pub positions: &'a [f32],
    pub normals: &'a [f32],
    pub indices: &'a [u32],
}

/// One immutable build: the normalized path, its frames, and the extruded mesh.
#[derive(Debug, Clone)]
pub struct AttractorTube {
    settings: TubeSettings,
    path: AttractorPath,
    frames: Vec<Frame>,
    bounds: Aabb,
    mesh: TubeMesh,
}

impl AttractorTube {
    pub fn settings(&self) -> &TubeSettings {
        &self.settings
    }

    pub fn path(&self) -> &AttractorPath {
        &self.path
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Bounds of the normalized path samples (excluding the tube radius).
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    pub fn mesh(&self) -> &TubeMesh {
        &self.mesh
    }

    pub fn geometry(&self) -> TubeGeometry<'_> {
        TubeGeometry {
            positions: &self.mesh.positions,
            normals: &self.mesh.normals,
            indices: &self.mesh.indices,
        }
    }

    pub fn into_mesh(self) -> TubeMesh {
        self.mesh
    }

    /// Normalizes a fully integrated path in place and extrudes its tube.
    pub fn from_path(settings: TubeSettings, mut path: AttractorPath) -> Result<Self> {
        settings.validate()?;
        let shape = settings.cross_section()?;
        if path.len() != settings.count {
            return Err(TubeError::Cancelled {
                completed: path.len(),
            });
        }
        if let Some(sample) = path.first_non_finite() {
            return Err(TubeError::NumericalInstability { sample });
        }

        let bounds = normalize_positions(&mut path.positions, settings.target_size)?;
        let frames = path.frames();
        let mesh = extrude(&path.positions, &frames, &shape);
        debug_assert_eq!(
            mesh.vertex_count(),
            expected_vertex_count(settings.count, settings.facets)
        );

        debug!(
            "Built {} tube: {} samples, {} vertices, {} triangles",
            settings.attractor,
            path.len(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(AttractorTube {
            settings,
            path,
            frames,
            bounds,
            mesh,
        })
    }
}

pub fn build(settings: TubeSettings) -> Result<AttractorTube> {
    build_with_progress(settings, None)
}

/// Like [`build`], reporting `(samples_done, count)` during integration. Returning
/// `ControlFlow::Break` from the callback cancels the build.
pub fn build_with_progress(
    settings: TubeSettings,
    on_progress: Option<&mut dyn FnMut(usize, usize) -> ControlFlow<()>>,
) -> Result<AttractorTube> {
    settings.validate()?;
    let path = build_path(
        settings.attractor,
        settings.count,
        settings.time_step,
        settings.sub_steps,
        on_progress,
    )?;
    AttractorTube::from_path(settings, path)
}
