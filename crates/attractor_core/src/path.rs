//! Trajectory sampling with a flow-transported normal frame.
//!
//! The normal at each sample is obtained by treating the tip of the previous
//! normal as a second, nearby trajectory, advancing it through the same flow,
//! and re-orthogonalizing it against the new tangent. Unlike a Frenet frame this
//! stays well defined on nearly straight stretches of the path.

use std::ops::ControlFlow;

use log::{debug, warn};
use nalgebra::Vector3;
use serde::Serialize;

use crate::config::{DEGENERATE_EPS, REFERENCE_NORMAL, SEED_STATE, WARMUP_STEPS};
use crate::error::{Result, TubeError};
use crate::solvers::{warm_up, ExplicitEuler};
use crate::traits::{State, Steppable, VectorField};

/// Orthonormal basis at one path sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub tangent: Vector3<f64>,
    pub normal: Vector3<f64>,
    pub binormal: Vector3<f64>,
}

impl Frame {
    /// Builds the frame from a unit tangent and a unit normal orthogonal to it.
    pub fn new(tangent: Vector3<f64>, normal: Vector3<f64>) -> Self {
        let binormal = tangent.cross(&normal);
        let binormal = binormal.try_normalize(DEGENERATE_EPS).unwrap_or(binormal);
        Self {
            tangent,
            normal,
            binormal,
        }
    }
}

/// Sampled trajectory: positions with their unit tangents and transported unit normals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttractorPath {
    pub positions: Vec<Vector3<f64>>,
    pub tangents: Vec<Vector3<f64>>,
    pub normals: Vec<Vector3<f64>>,
}

impl AttractorPath {
    fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count),
            tangents: Vec::with_capacity(count),
            normals: Vec::with_capacity(count),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.tangents
            .iter()
            .zip(&self.normals)
            .map(|(tangent, normal)| Frame::new(*tangent, *normal))
            .collect()
    }

    /// Index of the first sample holding a NaN or infinite component.
    pub fn first_non_finite(&self) -> Option<usize> {
        let finite = |v: &Vector3<f64>| v.iter().all(|c| c.is_finite());
        (0..self.len()).find(|&i| {
            !(finite(&self.positions[i]) && finite(&self.tangents[i]) && finite(&self.normals[i]))
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FallbackCounts {
    pub tangents: usize,
    pub normals: usize,
}

/// Resumable path integrator.
///
/// Construction runs the warmup; samples are then produced in batches so a caller
/// can interleave other work or abandon the build between batches.
pub struct PathBuilder<F: VectorField> {
    field: F,
    count: usize,
    time_step: f64,
    sub_steps: usize,
    stepper: ExplicitEuler,
    state: State,
    path: AttractorPath,
    fallbacks: FallbackCounts,
}

impl<F: VectorField> PathBuilder<F> {
    pub fn new(field: F, count: usize, time_step: f64, sub_steps: usize) -> Result<Self> {
        if count < 2 {
            return Err(TubeError::InvalidCount(count));
        }
        if !(time_step.is_finite() && time_step > 0.0) {
            return Err(TubeError::InvalidTimeStep(time_step));
        }
        if sub_steps == 0 {
            return Err(TubeError::InvalidSubSteps(sub_steps));
        }

        let mut stepper = ExplicitEuler;
        let mut state = State::from(SEED_STATE);
        warm_up(
            &mut stepper,
            &field,
            &mut state,
            WARMUP_STEPS,
            time_step / sub_steps as f64,
        );

        Ok(Self {
            field,
            count,
            time_step,
            sub_steps,
            stepper,
            state,
            path: AttractorPath::with_capacity(count),
            fallbacks: FallbackCounts::default(),
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn samples_done(&self) -> usize {
        self.path.len()
    }

    pub fn is_done(&self) -> bool {
        self.path.len() >= self.count
    }

    pub fn fallbacks(&self) -> FallbackCounts {
        self.fallbacks
    }

    /// Produces up to `max_samples` further samples and returns how many were added.
    pub fn advance_batch(&mut self, max_samples: usize) -> usize {
        let remaining = self.count - self.path.len();
        let batch = max_samples.min(remaining);
        for _ in 0..batch {
            self.sample_next();
        }
        batch
    }

    /// Consumes the builder, rejecting unfinished or diverged paths.
    pub fn finish(self) -> Result<AttractorPath> {
        if !self.is_done() {
            return Err(TubeError::Cancelled {
                completed: self.path.len(),
            });
        }
        if let Some(sample) = self.path.first_non_finite() {
            warn!("Attractor integration diverged at sample {}", sample);
            return Err(TubeError::NumericalInstability { sample });
        }
        debug!(
            "Integrated {} samples ({} tangent and {} normal fallbacks)",
            self.path.len(),
            self.fallbacks.tangents,
            self.fallbacks.normals
        );
        Ok(self.path)
    }

    fn sample_next(&mut self) {
        let i = self.path.len();
        let old = self.state;
        let dt = self.time_step / self.sub_steps as f64;
        for _ in 0..self.sub_steps {
            self.stepper.step(&self.field, &mut self.state, dt);
        }
        let position = self.state;

        // Direction across the whole outer step, not the last sub-step.
        let tangent = match (position - old).try_normalize(DEGENERATE_EPS) {
            Some(tangent) => tangent,
            None => {
                self.fallbacks.tangents += 1;
                self.path.tangents.last().copied().unwrap_or_else(Vector3::z)
            }
        };

        let (candidate, previous) = if i == 0 {
            (Vector3::from(REFERENCE_NORMAL), None)
        } else {
            let prev_position = self.path.positions[i - 1];
            let prev_normal = self.path.normals[i - 1];
            let tip = self.field.advance(&(prev_position + prev_normal), self.time_step);
            (tip - position, Some(prev_normal))
        };
        let (normal, fell_back) = orthonormal_or_fallback(&candidate, &tangent, previous.as_ref());
        if fell_back {
            self.fallbacks.normals += 1;
        }

        self.path.positions.push(position);
        self.path.tangents.push(tangent);
        self.path.normals.push(normal);
    }
}

/// Integrates `count` samples, calling `on_progress(done, total)` after each one.
/// Returning `ControlFlow::Break` abandons the build.
pub fn build_path<F: VectorField>(
    field: F,
    count: usize,
    time_step: f64,
    sub_steps: usize,
    on_progress: Option<&mut dyn FnMut(usize, usize) -> ControlFlow<()>>,
) -> Result<AttractorPath> {
    let mut builder = PathBuilder::new(field, count, time_step, sub_steps)?;
    match on_progress {
        None => {
            builder.advance_batch(count);
        }
        Some(on_progress) => {
            while !builder.is_done() {
                builder.advance_batch(1);
                let done = builder.samples_done();
                if on_progress(done, count).is_break() {
                    warn!("Attractor build cancelled after {} of {} samples", done, count);
                    return Err(TubeError::Cancelled { completed: done });
                }
            }
        }
    }
    builder.finish()
}

/// Projects `candidate` onto the plane orthogonal to the unit `tangent` and normalizes it.
///
/// When the projection has no length, the previous normal is re-projected instead;
/// failing that, the canonical axis-derived orthogonal unit is used. The flag reports
/// whether a fallback was taken.
fn orthonormal_or_fallback(
    candidate: &Vector3<f64>,
    tangent: &Vector3<f64>,
    previous: Option<&Vector3<f64>>,
) -> (Vector3<f64>, bool) {
    if let Some(normal) = project_onto_plane(candidate, tangent).try_normalize(DEGENERATE_EPS) {
        return (normal, false);
    }
    let reprojected = previous
        .and_then(|prev| project_onto_plane(prev, tangent).try_normalize(DEGENERATE_EPS));
    match reprojected {
        Some(normal) => (normal, true),
        None => (canonical_orthogonal_unit(tangent), true),
    }
}

fn project_onto_plane(v: &Vector3<f64>, unit_normal: &Vector3<f64>) -> Vector3<f64> {
    v - unit_normal * v.dot(unit_normal)
}

/// Unit vector orthogonal to `basis`, from the coordinate axis whose projection is longest.
fn canonical_orthogonal_unit(basis: &Vector3<f64>) -> Vector3<f64> {
    let mut best: Option<(f64, Vector3<f64>)> = None;
    for axis in 0..3 {
        let candidate = project_onto_plane(&Vector3::ith(axis, 1.0), basis);
        let norm = candidate.norm();
        match &best {
            Some((best_norm, _)) if *best_norm >= norm => {}
            _ => best = Some((norm, candidate)),
        }
    }
    best.and_then(|(_, candidate)| candidate.try_normalize(DEGENERATE_EPS))
        .unwrap_or_else(Vector3::x)
}
