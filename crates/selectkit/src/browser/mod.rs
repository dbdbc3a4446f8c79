//! Browser runtime for selectkit controls.
//!
//! This module provides the bridge between a [`Control`](crate::Control) and
//! the DOM: it reads the native `<select>`, builds the visual tree next to it,
//! and turns DOM events into control events.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod custom_select;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use custom_select::CustomSelect;
#[cfg(target_arch = "wasm32")]
pub use native::DomNativeSelect;
