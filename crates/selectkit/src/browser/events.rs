//! Browser event handling - converts web events to selectkit keys.

use selectkit_core::{Key, Modifiers};
use web_sys::KeyboardEvent;

/// Convert a `web_sys` `KeyboardEvent` to a [`Key`].
pub fn key_from_event(event: &KeyboardEvent) -> Key {
    let modifiers = Modifiers {
        ctrl: event.ctrl_key(),
        alt: event.alt_key(),
        meta: event.meta_key(),
    };
    Key::from_dom(&event.code(), &event.key(), modifiers)
}

/// Whether the browser's default action for `key` must be suppressed.
///
/// Space and the arrow keys would otherwise scroll the page.
pub const fn suppresses_default(key: Key) -> bool {
    matches!(key, Key::Space | Key::ArrowUp | Key::ArrowDown)
}

/// Milliseconds on the page clock, for type-ahead timing.
pub fn now_ms() -> u64 {
    let ms = web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now());
    ms as u64
}
