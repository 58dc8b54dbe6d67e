//! Stepped runner: integrates a tube path in caller-sized batches.
//!
//! Each `run_steps` call is a cancellation point; dropping the runner (or calling
//! `cancel`) abandons the build without further work.

use attractor_core::path::PathBuilder;
use attractor_core::{Attractor, AttractorTube, TubeError, TubeSettings};
use log::info;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::tube::WasmAttractorTube;
use crate::{js_error, maybe_init};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TubeProgress {
    pub done: bool,
    pub samples_done: usize,
    pub total: usize,
}

#[wasm_bindgen]
pub struct WasmTubeRunner {
    settings: TubeSettings,
    builder: Option<PathBuilder<Attractor>>,
    result: Option<AttractorTube>,
    progress: TubeProgress,
}

impl WasmTubeRunner {
    pub(crate) fn with_settings(settings: TubeSettings) -> Result<Self, TubeError> {
        settings.validate()?;
        let builder = PathBuilder::new(
            settings.attractor,
            settings.count,
            settings.time_step,
            settings.sub_steps,
        )?;
        Ok(Self {
            settings,
            builder: Some(builder),
            result: None,
            progress: TubeProgress {
                done: false,
                samples_done: 0,
                total: settings.count,
            },
        })
    }

    /// Integrates up to `batch_size` samples; extrudes the mesh once the path is complete.
    pub(crate) fn advance(&mut self, batch_size: usize) -> Result<TubeProgress, TubeError> {
        if self.progress.done {
            return Ok(self.progress);
        }
        let builder = self.builder.as_mut().ok_or(TubeError::Cancelled {
            completed: self.progress.samples_done,
        })?;
        builder.advance_batch(batch_size.max(1));
        self.progress.samples_done = builder.samples_done();

        if builder.is_done() {
            if let Some(builder) = self.builder.take() {
                let path = builder.finish()?;
                self.result = Some(AttractorTube::from_path(self.settings, path)?);
                self.progress.done = true;
            }
        }
        Ok(self.progress)
    }

    pub(crate) fn take_tube(&mut self) -> Option<AttractorTube> {
        self.result.take()
    }
}

#[wasm_bindgen]
impl WasmTubeRunner {
    #[wasm_bindgen(constructor)]
    pub fn new(settings_val: JsValue) -> Result<WasmTubeRunner, JsValue> {
        maybe_init();
        let settings: TubeSettings =
            from_value(settings_val).map_err(|e| js_error("Invalid tube settings", e))?;
        Self::with_settings(settings).map_err(|e| js_error("Invalid tube settings", e))
    }

    pub fn is_done(&self) -> bool {
        self.progress.done
    }

    pub fn run_steps(&mut self, batch_size: u32) -> Result<JsValue, JsValue> {
        let progress = self
            .advance(batch_size as usize)
            .map_err(|e| js_error("Tube build failed", e))?;
        to_value(&progress).map_err(|e| js_error("Serialization error", e))
    }

    pub fn get_progress(&self) -> Result<JsValue, JsValue> {
        to_value(&self.progress).map_err(|e| js_error("Serialization error", e))
    }

    /// Drops the in-flight integration; later `run_steps` calls fail.
    pub fn cancel(&mut self) {
        if self.builder.take().is_some() {
            info!(
                "Tube build cancelled after {} of {} samples",
                self.progress.samples_done, self.progress.total
            );
        }
    }

    pub fn get_result(&mut self) -> Result<WasmAttractorTube, JsValue> {
        self.take_tube()
            .map(WasmAttractorTube::from_tube)
            .ok_or_else(|| JsValue::from_str("Runner has no finished tube"))
    }
}
