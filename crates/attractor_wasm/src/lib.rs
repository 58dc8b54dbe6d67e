//! WASM bindings for building attractor tubes from JavaScript.
//!
//! `WasmAttractorTube` builds in one call; `WasmTubeRunner` integrates in batches so
//! an interactive caller can report progress and drop a build midway.

use std::sync::Once;

use attractor_core::Attractor;
use wasm_bindgen::prelude::*;

mod runner;
mod tube;

pub use runner::WasmTubeRunner;
pub use tube::WasmAttractorTube;

static INIT: Once = Once::new();

pub(crate) fn maybe_init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        #[cfg(target_arch = "wasm32")]
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    });
}

pub(crate) fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

/// Display names of the supported attractors, in selection-list order.
#[wasm_bindgen]
pub fn attractor_names() -> Vec<String> {
    Attractor::ALL.iter().map(|a| a.name().to_string()).collect()
}

/// Identifiers accepted by the constructors, parallel to `attractor_names`.
#[wasm_bindgen]
pub fn attractor_ids() -> Vec<String> {
    Attractor::ALL.iter().map(|a| a.id().to_string()).collect()
}
