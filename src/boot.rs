//! Progress reporting to the optional `window.__HL_BOOT` loader that
//! `index.html` installs before the wasm module starts.

use hand_ledger_core::ContentError;

#[cfg(target_arch = "wasm32")]
use std::cell::Cell;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

const LOADER_KEY: &str = "__HL_BOOT";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BootPhase {
    Options,
    Content,
    Mount,
}

impl BootPhase {
    fn label(self) -> &'static str {
        match self {
            BootPhase::Options => "options",
            BootPhase::Content => "content",
            BootPhase::Mount => "mount",
        }
    }

    fn detail(self) -> &'static str {
        match self {
            BootPhase::Options => "reading query options",
            BootPhase::Content => "checking pages",
            BootPhase::Mount => "binding the journal",
        }
    }
}

#[cfg(target_arch = "wasm32")]
thread_local! {
    static READY_SENT: Cell<bool> = const { Cell::new(false) };
}

#[cfg(target_arch = "wasm32")]
fn loader() -> Option<Object> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(LOADER_KEY)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    value.dyn_into::<Object>().ok()
}

#[cfg(target_arch = "wasm32")]
fn call(method: &str, args: &[&str]) {
    let Some(loader) = loader() else {
        return;
    };
    let Ok(func) = Reflect::get(&loader, &JsValue::from_str(method))
        .and_then(|value| value.dyn_into::<Function>().map_err(JsValue::from))
    else {
        return;
    };
    let array: Array = args.iter().map(|arg| JsValue::from_str(arg)).collect();
    let _ = func.apply(&loader, &array);
}

#[cfg(not(target_arch = "wasm32"))]
fn call(method: &str, args: &[&str]) {
    let _ = (LOADER_KEY, method, args);
}

pub(crate) fn set_phase(phase: BootPhase) {
    call("setPhase", &[phase.label(), phase.detail()]);
}

/// Reports bad page content. The journal is not mounted after this.
pub(crate) fn fail_content(err: &ContentError) {
    let hint = match err {
        ContentError::Empty => "add at least one page",
        ContentError::BlankId { .. } => "give every page an id",
        ContentError::DuplicateId { .. } => "page ids must be unique",
    };
    gloo::console::error!("journal content", err.to_string());
    call("fail", &[BootPhase::Content.label(), &err.to_string(), hint]);
}

pub(crate) fn ready() {
    #[cfg(target_arch = "wasm32")]
    {
        if READY_SENT.with(|flag| flag.replace(true)) {
            return;
        }
    }
    call("ready", &[]);
}
