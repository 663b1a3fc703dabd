//! Bridge to `plotly::bindings::react`, with a stub for non-wasm
//! targets so rust-analyzer and `cargo test` on the host still see the
//! API.

#[cfg(target_family = "wasm")]
pub use plotly::bindings::react;

#[cfg(not(target_family = "wasm"))]
/// Stub for non-wasm builds; rendering only exists in the browser.
pub async fn react(_div_id: &str, _plot: &plotly::Plot) {
    panic!("plotly::bindings::react is only available when targeting WASM");
}
