//! Installs the `log` backend for the current target: the browser console for the web build,
//! the terminal and a log file for the native harness.

#[cfg(not(target_family = "wasm"))]
pub mod console;
#[cfg(target_family = "wasm")]
pub mod wasm;
