//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js drawing functions are supplied by the dashboard page as
//! `window.*` globals (`renderStateMap`, `renderGlobe`, `renderBarChart`,
//! `renderHeatmap`, `renderStackedArea`, `renderRaindrops`,
//! `renderDotMatrix`). Each takes `(containerId, dataJson, configJson)`.
//! The state map reports clicks by calling `window.gsdToggleState(name)`,
//! which [`register_state_click_handler`] installs.

use anyhow::{anyhow, Context};
use std::io::Read;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Name of the global the map calls on click.
pub const STATE_CLICK_HANDLER: &str = "gsdToggleState";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GSD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON payload for embedding in a single-quoted JS string.
pub fn escape_single_quoted(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Build the polling snippet that waits for D3, the page's render function
/// and the container element before calling the renderer.
pub fn render_script(function: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let escaped_data = escape_single_quoted(data_json);
    let escaped_config = escape_single_quoted(config_json);
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof d3 !== 'undefined' &&
                    typeof window.{function} === 'function' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[GSD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("[GSD Debug] js_bridge: {} into #{}", function, container_id);
    call_js(&render_script(function, container_id, data_json, config_json));
}

/// Choropleth of every state, colored by the active metric.
pub fn render_state_map(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderStateMap", container_id, data_json, config_json);
}

/// Rotating emissions globe.
pub fn render_globe(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderGlobe", container_id, data_json, config_json);
}

/// Bar chart of the selected states.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Region-by-year solar generation heatmap.
pub fn render_heatmap(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderHeatmap", container_id, data_json, config_json);
}

/// Monthly solar generation stacked by state.
pub fn render_stacked_area(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderStackedArea", container_id, data_json, config_json);
}

/// Water-use raindrops for one state.
pub fn render_raindrops(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderRaindrops", container_id, data_json, config_json);
}

/// Irrigation-method dot matrix.
pub fn render_dot_matrix(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderDotMatrix", container_id, data_json, config_json);
}

fn js_err(context: &str, err: JsValue) -> anyhow::Error {
    anyhow!("{}: {:?}", context, err)
}

/// Fetch a dataset served alongside the WASM bundle. URLs ending in `.gz`
/// are gunzipped before decoding.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_err(url, e))?
        .dyn_into::<web_sys::Response>()
        .map_err(|e| js_err(url, e))?;
    if !response.ok() {
        anyhow::bail!("{} returned HTTP {}", url, response.status());
    }

    let buffer = response.array_buffer().map_err(|e| js_err(url, e))?;
    let buffer = JsFuture::from(buffer).await.map_err(|e| js_err(url, e))?;
    let array = js_sys::Uint8Array::new(&buffer);
    let mut bytes = vec![0u8; array.length() as usize];
    array.copy_to(&mut bytes);
    log::info!("[GSD Debug] js_bridge: fetched {} ({} bytes)", url, bytes.len());

    decode_body(url, &bytes)
}

/// Decode a fetched body, decompressing gzip by extension.
pub fn decode_body(url: &str, bytes: &[u8]) -> anyhow::Result<String> {
    if url.ends_with(".gz") {
        let mut text = String::new();
        flate2::read::GzDecoder::new(bytes)
            .read_to_string(&mut text)
            .with_context(|| format!("failed to decompress {}", url))?;
        Ok(text)
    } else {
        String::from_utf8(bytes.to_vec()).with_context(|| format!("{} is not UTF-8", url))
    }
}

/// Install `window.gsdToggleState(name)` so the map can report clicks.
///
/// The closure lives for the rest of the page.
pub fn register_state_click_handler(mut on_click: impl FnMut(String) + 'static) -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let handler = Closure::wrap(Box::new(move |name: JsValue| match name.as_string() {
        Some(name) => on_click(name),
        None => log::warn!("[GSD Debug] js_bridge: ignoring non-string map click"),
    }) as Box<dyn FnMut(JsValue)>);
    js_sys::Reflect::set(
        &window,
        &JsValue::from_str(STATE_CLICK_HANDLER),
        handler.as_ref().unchecked_ref(),
    )
    .map_err(|e| js_err("register click handler", e))?;
    handler.forget();
    Ok(())
}
