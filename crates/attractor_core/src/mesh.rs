//! Tube extrusion: sweeps a cross-section around the path frames and closes both ends.
//!
//! Layout of the output buffers:
//! - vertices `[i * F, (i + 1) * F)` form ring `i`, one per path sample;
//! - vertex `count * F` is the start-cap apex, `count * F + 1` the end-cap apex;
//! - indices hold `(count - 1) * F` lateral quads (two triangles each), then the
//!   `F` start-cap triangles, then the `F` end-cap triangles.
//!
//! Every ring and every band of lateral indices is written into its own disjoint
//! slice, so with the `parallel` feature both loops run on the rayon pool.

use log::debug;
use nalgebra::Vector3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::path::Frame;
use crate::shape::CrossSectionShape;

/// Flat render buffers: 3 floats per vertex position and normal, 3 indices per triangle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TubeMesh {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

impl TubeMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

pub fn expected_vertex_count(count: usize, facets: usize) -> usize {
    count * facets + 2
}

pub fn expected_index_count(count: usize, facets: usize) -> usize {
    (count - 1) * facets * 6 + facets * 6
}

/// Builds the tube mesh for `positions` and their `frames`.
///
/// Panics if the inputs break the extrusion contract (mismatched lengths, fewer than
/// two samples or three facets, or more vertices than 32-bit indices can address).
/// Callers validate settings before getting here.
pub fn extrude(
    positions: &[Vector3<f64>],
    frames: &[Frame],
    shape: &CrossSectionShape,
) -> TubeMesh {
    let count = positions.len();
    let facets = shape.facets();
    assert_eq!(frames.len(), count, "one frame per path sample");
    assert_eq!(shape.normals.len(), facets, "one normal per shape point");
    assert!(count >= 2, "a tube needs at least two rings");
    assert!(facets >= 3, "a ring needs at least three facets");

    let vertex_count = expected_vertex_count(count, facets);
    let index_count = expected_index_count(count, facets);
    assert!(
        u32::try_from(vertex_count - 1).is_ok(),
        "vertex count exceeds the 32-bit index range"
    );

    let ring_floats = count * facets * 3;
    let mut out_positions = vec![0.0f32; vertex_count * 3];
    let mut out_normals = vec![0.0f32; vertex_count * 3];
    {
        let (ring_positions, apex_positions) = out_positions.split_at_mut(ring_floats);
        let (ring_normals, apex_normals) = out_normals.split_at_mut(ring_floats);
        fill_rings(ring_positions, ring_normals, positions, frames, shape);

        let first = &frames[0];
        let last = &frames[count - 1];
        write_vec3(&mut apex_positions[0..3], &positions[0]);
        write_vec3(&mut apex_normals[0..3], &-first.tangent);
        write_vec3(&mut apex_positions[3..6], &positions[count - 1]);
        write_vec3(&mut apex_normals[3..6], &last.tangent);
    }

    let lateral_len = (count - 1) * facets * 6;
    let mut indices = vec![0u32; index_count];
    {
        let (lateral, caps) = indices.split_at_mut(lateral_len);
        fill_bands(lateral, facets);
        fill_caps(caps, count, facets);
    }

    assert_eq!(out_positions.len(), vertex_count * 3);
    assert_eq!(out_normals.len(), vertex_count * 3);
    assert_eq!(indices.len(), index_count);

    debug!(
        "Extruded tube with {} vertices and {} triangles",
        vertex_count,
        index_count / 3
    );

    TubeMesh {
        positions: out_positions,
        normals: out_normals,
        indices,
    }
}

fn fill_rings(
    out_positions: &mut [f32],
    out_normals: &mut [f32],
    positions: &[Vector3<f64>],
    frames: &[Frame],
    shape: &CrossSectionShape,
) {
    let stride = shape.facets() * 3;

    #[cfg(feature = "parallel")]
    let rings = out_positions
        .par_chunks_mut(stride)
        .zip(out_normals.par_chunks_mut(stride));
    #[cfg(not(feature = "parallel"))]
    let rings = out_positions
        .chunks_mut(stride)
        .zip(out_normals.chunks_mut(stride));

    rings.enumerate().for_each(|(i, (ring_positions, ring_normals))| {
        write_ring(ring_positions, ring_normals, &positions[i], &frames[i], shape);
    });
}

fn write_ring(
    ring_positions: &mut [f32],
    ring_normals: &mut [f32],
    center: &Vector3<f64>,
    frame: &Frame,
    shape: &CrossSectionShape,
) {
    let vertices = ring_positions
        .chunks_exact_mut(3)
        .zip(ring_normals.chunks_exact_mut(3));
    for ((out_p, out_n), (point, normal)) in vertices.zip(shape.points.iter().zip(&shape.normals)) {
        let p = center + frame.normal * point.x + frame.binormal * point.y;
        // Unit for radial profiles; left unnormalized otherwise.
        let n = frame.normal * normal.x + frame.binormal * normal.y;
        write_vec3(out_p, &p);
        write_vec3(out_n, &n);
    }
}

fn fill_bands(lateral: &mut [u32], facets: usize) {
    let stride = facets * 6;

    #[cfg(feature = "parallel")]
    let bands = lateral.par_chunks_mut(stride);
    #[cfg(not(feature = "parallel"))]
    let bands = lateral.chunks_mut(stride);

    bands
        .enumerate()
        .for_each(|(i, band)| write_band(band, i, facets));
}

fn write_band(band: &mut [u32], ring: usize, facets: usize) {
    let base = ring * facets;
    for (j, quad) in band.chunks_exact_mut(6).enumerate() {
        let p1 = (base + j) as u32;
        let p2 = (base + (j + 1) % facets) as u32;
        let p1next = p1 + facets as u32;
        let p2next = p2 + facets as u32;
        quad.copy_from_slice(&[p1, p2, p1next, p1next, p2, p2next]);
    }
}

fn fill_caps(caps: &mut [u32], count: usize, facets: usize) {
    let (start, end) = caps.split_at_mut(facets * 3);
    let start_apex = (count * facets) as u32;
    let end_apex = start_apex + 1;
    let last_base = (count - 1) * facets;

    // Reversed winding at the start so that cap faces away from the tube, along -T.
    for (j, tri) in start.chunks_exact_mut(3).enumerate() {
        let a = j as u32;
        let b = ((j + 1) % facets) as u32;
        tri.copy_from_slice(&[b, a, start_apex]);
    }
    for (j, tri) in end.chunks_exact_mut(3).enumerate() {
        let a = (last_base + j) as u32;
        let b = (last_base + (j + 1) % facets) as u32;
        tri.copy_from_slice(&[a, b, end_apex]);
    }
}

fn write_vec3(out: &mut [f32], v: &Vector3<f64>) {
    out[0] = v.x as f32;
    out[1] = v.y as f32;
    out[2] = v.z as f32;
}
