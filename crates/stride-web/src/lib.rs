//! WASM bridge: exposes one animation runner to a browser-side rasterizer.
//!
//! Usage from JS:
//!
//! ```text
//! stride_init();
//! stride_load_rig(rigJson);
//! stride_load_clip(clipJson);
//! // per animation frame
//! stride_tick(dt);
//! const parts = new Float32Array(memory.buffer, stride_get_instances_ptr(), stride_get_instance_count() * 4);
//! ```

pub mod runner;

pub use runner::AnimationRunner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<AnimationRunner> = RefCell::new(AnimationRunner::new());
}

fn with_runner<R>(f: impl FnOnce(&mut AnimationRunner) -> R) -> R {
    RUNNER.with(|cell| f(&mut cell.borrow_mut()))
}

fn to_js(err: stride_engine::StrideError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub fn stride_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("stride: initialized");
}

#[wasm_bindgen]
pub fn stride_load_rig(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.load_rig(json)).map_err(to_js)
}

#[wasm_bindgen]
pub fn stride_load_clip(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.load_clip(json)).map_err(to_js)
}

#[wasm_bindgen]
pub fn stride_set_preset(name: &str) {
    with_runner(|r| r.set_preset(name));
}

#[wasm_bindgen]
pub fn stride_set_config(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.set_config(json)).map_err(to_js)
}

#[wasm_bindgen]
pub fn stride_set_origin(x: f32, y: f32) {
    with_runner(|r| r.set_origin(x, y));
}

#[wasm_bindgen]
pub fn stride_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn stride_seek(time: f32) {
    with_runner(|r| r.seek(time));
}

#[wasm_bindgen]
pub fn stride_time() -> f32 {
    with_runner(|r| r.time())
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn stride_get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn stride_get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

/// Part names in instance order.
#[wasm_bindgen]
pub fn stride_part_names() -> js_sys::Array {
    with_runner(|r| {
        r.part_names()
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect()
    })
}
