//! One-shot tube builds.

use attractor_core::{build, Attractor, AttractorTube, TubeError, TubeSettings};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::{js_error, maybe_init};

#[wasm_bindgen]
pub struct WasmAttractorTube {
    tube: AttractorTube,
}

pub(crate) fn build_named(
    count: u32,
    attractor: &str,
    radius: f64,
    time_step: f64,
    facets: u32,
) -> Result<AttractorTube, TubeError> {
    let attractor: Attractor = attractor.parse()?;
    build(TubeSettings::new(
        count as usize,
        attractor,
        radius,
        time_step,
        facets as usize,
    ))
}

impl WasmAttractorTube {
    pub(crate) fn from_tube(tube: AttractorTube) -> Self {
        Self { tube }
    }
}

#[wasm_bindgen]
impl WasmAttractorTube {
    #[wasm_bindgen(constructor)]
    pub fn new(
        count: u32,
        attractor: &str,
        radius: f64,
        time_step: f64,
        facets: u32,
    ) -> Result<WasmAttractorTube, JsValue> {
        maybe_init();
        let tube = build_named(count, attractor, radius, time_step, facets)
            .map_err(|e| js_error("Tube build failed", e))?;
        Ok(Self::from_tube(tube))
    }

    /// Builds from a settings object (`count`, `attractor`, `radius`, `timeStep`,
    /// `facets`, `subSteps`, `targetSize`, `profile`); missing fields take defaults.
    pub fn from_settings(settings_val: JsValue) -> Result<WasmAttractorTube, JsValue> {
        maybe_init();
        let settings: TubeSettings =
            from_value(settings_val).map_err(|e| js_error("Invalid tube settings", e))?;
        let tube = build(settings).map_err(|e| js_error("Tube build failed", e))?;
        Ok(Self::from_tube(tube))
    }

    pub fn positions(&self) -> Vec<f32> {
        self.tube.mesh().positions.clone()
    }

    pub fn normals(&self) -> Vec<f32> {
        self.tube.mesh().normals.clone()
    }

    pub fn indices(&self) -> Vec<u32> {
        self.tube.mesh().indices.clone()
    }

    pub fn vertex_count(&self) -> u32 {
        self.tube.mesh().vertex_count() as u32
    }

    pub fn triangle_count(&self) -> u32 {
        self.tube.mesh().triangle_count() as u32
    }

    /// `{ positions, normals, indices }` as plain arrays.
    #[wasm_bindgen(js_name = getGeometry)]
    pub fn get_geometry(&self) -> Result<JsValue, JsValue> {
        to_value(&self.tube.geometry()).map_err(|e| js_error("Serialization error", e))
    }

    /// Min and max corners of the normalized path, flattened `[min.xyz, max.xyz]`.
    pub fn bounds(&self) -> Vec<f64> {
        let bounds = self.tube.bounds();
        bounds.min.iter().chain(bounds.max.iter()).copied().collect()
    }
}
