//! In-browser evaluation of generated component source.
//!
//! The source is sanitized by `artifact::compile`, wrapped in a scoped
//! function via the `Function` constructor, and invoked with the render
//! helpers published on `window.SlideRuntime`. Both construction and
//! invocation go through `Reflect` so a syntax error or a throw comes
//! back as a `CompileError` instead of aborting the caller.

#[cfg(feature = "hydrate")]
use artifact::compile::{CompileError, SCOPE_NAMES, prepare_source};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

/// Name of the global object holding the scope values handed to compiled
/// components, in `SCOPE_NAMES` order.
#[cfg(feature = "hydrate")]
const RUNTIME_GLOBAL: &str = "SlideRuntime";

/// A successfully compiled component, ready to render into a host element.
#[cfg(feature = "hydrate")]
pub struct RenderableComponent {
    render: js_sys::Function,
    raw_source: String,
}

#[cfg(feature = "hydrate")]
impl RenderableComponent {
    /// Invoke the component and append its DOM output to `host`. Replaces
    /// any previous output.
    pub fn mount(&self, host: &web_sys::Element) -> Result<(), CompileError> {
        let output = js_sys::Reflect::apply(&self.render, &JsValue::NULL, &js_sys::Array::new())
            .map_err(|err| self.error(&err))?;
        let node: web_sys::Node = output
            .dyn_into()
            .map_err(|_| CompileError::new("component did not return a DOM node", &self.raw_source))?;
        host.set_inner_html("");
        host.append_child(&node)
            .map_err(|err| self.error(&err))?;
        Ok(())
    }

    fn error(&self, err: &JsValue) -> CompileError {
        CompileError::new(describe(err), &self.raw_source)
    }
}

/// Compile and execute generated source. `Ok(None)` means the source ran
/// but yielded no component (no `export default` and nothing returned).
#[cfg(feature = "hydrate")]
pub fn compile_and_run(raw_source: &str) -> Result<Option<RenderableComponent>, CompileError> {
    let body = prepare_source(raw_source);

    let global = js_sys::global();
    let ctor = js_sys::Reflect::get(&global, &JsValue::from_str("Function"))
        .ok()
        .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
        .ok_or_else(|| CompileError::new("Function constructor unavailable", raw_source))?;

    // new Function(...SCOPE_NAMES, body) — Reflect::construct surfaces
    // syntax errors as Err instead of trapping.
    let args = js_sys::Array::new();
    for name in SCOPE_NAMES {
        args.push(&JsValue::from_str(name));
    }
    args.push(&JsValue::from_str(&body));
    let compiled = js_sys::Reflect::construct(&ctor, &args)
        .map_err(|err| CompileError::new(describe(&err), raw_source))?;
    let compiled: js_sys::Function = compiled
        .dyn_into()
        .map_err(|_| CompileError::new("Function constructor returned a non-function", raw_source))?;

    let result = js_sys::Reflect::apply(&compiled, &JsValue::NULL, &scope_values(raw_source)?)
        .map_err(|err| CompileError::new(describe(&err), raw_source))?;

    if result.is_null() || result.is_undefined() {
        return Ok(None);
    }
    let render: js_sys::Function = result
        .dyn_into()
        .map_err(|_| CompileError::new("compiled source did not produce a component", raw_source))?;
    Ok(Some(RenderableComponent { render, raw_source: raw_source.to_owned() }))
}

/// Look up the scope values on `window.SlideRuntime`, in declaration order.
/// Missing entries become `undefined`, matching how a plain destructure of
/// the runtime object would behave.
#[cfg(feature = "hydrate")]
fn scope_values(raw_source: &str) -> Result<js_sys::Array, CompileError> {
    let window =
        web_sys::window().ok_or_else(|| CompileError::new("no window", raw_source))?;
    let runtime = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_GLOBAL))
        .map_err(|err| CompileError::new(describe(&err), raw_source))?;
    if runtime.is_null() || runtime.is_undefined() {
        return Err(CompileError::new("SlideRuntime is not installed", raw_source));
    }

    let values = js_sys::Array::new();
    for name in SCOPE_NAMES {
        let value = js_sys::Reflect::get(&runtime, &JsValue::from_str(name))
            .unwrap_or(JsValue::UNDEFINED);
        values.push(&value);
    }
    Ok(values)
}

/// Human-readable message for a thrown value. Prefers `Error.message`.
#[cfg(feature = "hydrate")]
fn describe(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| "unknown evaluation error".to_owned())
}
