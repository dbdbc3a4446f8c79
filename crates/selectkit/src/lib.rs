//! selectkit: custom-styled dropdowns that mirror a native `<select>`.
//!
//! The model, state machine and markup live in `selectkit-core` and are
//! re-exported here. On `wasm32` the [`browser`] module binds a control to a
//! real document.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { CustomSelect } from './selectkit.js';
//!
//! await init();
//! for (const el of document.querySelectorAll('select[data-custom]')) {
//!     const select = new CustomSelect(el);
//!     select.on_change((json) => console.log(JSON.parse(json).value));
//! }
//! ```
//!
//! A control stays live for the rest of the page once constructed; the
//! `CustomSelect` object is only a handle and may be discarded or freed.

pub use selectkit_core::*;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{CustomSelect, DomNativeSelect};
