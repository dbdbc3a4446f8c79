//! Core types for selectkit custom dropdowns.
//!
//! A [`Control`] mirrors a native choice control (`<select>`) and exposes a
//! richer interactive surface:
//! - Model and selection: [`Control`], [`SelectOption`], [`NativeSelect`]
//! - Interaction: [`SelectEvent`], [`Key`], [`ListState`], type-ahead search
//! - Presentation: [`ControlView`], [`ViewChange`], [`markup`]
//! - Configuration and errors: [`SelectConfig`], [`SelectError`]
//!
//! Nothing here touches a real document; the `selectkit` crate binds a
//! control to the browser DOM.

mod config;
mod control;
mod error;
mod event;
mod icon;
pub mod markup;
mod native;
mod option;
pub mod scroll;
mod typeahead;
mod view;

pub use config::{ClassNames, IconConfig, SelectConfig, DEFAULT_DEBOUNCE_MS};
pub use control::{Control, ListState, Outcome, ScrollRequest, SelectionChanged};
pub use error::SelectError;
pub use event::{Key, Modifiers, SelectEvent};
pub use icon::{ClassIcon, IconResolver};
pub use native::{MemoryNativeSelect, NativeSelect};
pub use option::{NativeOption, NativeOptionRef, RowId, SelectOption};
pub use typeahead::{Debounce, DebounceHandle, TypeAhead};
pub use view::{ControlView, LabelView, RowView, ViewChange};
