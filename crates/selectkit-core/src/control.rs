//! The selectable control: one native choice control and its model.
//!
//! A [`Control`] keeps three representations of the current selection in
//! agreement: the [`SelectOption`] flags, the native control (through
//! [`NativeSelect`]), and the visual rows (through [`Control::view`]). It also
//! owns the list visibility state and the type-ahead buffer.
//!
//! # Example
//!
//! ```
//! use selectkit_core::{Control, Key, MemoryNativeSelect, SelectConfig, SelectEvent};
//!
//! let native = MemoryNativeSelect::new()
//!     .option("us", "United States")
//!     .option("uy", "Uruguay");
//! let mut control = Control::new(native, SelectConfig::default()).unwrap();
//!
//! control.handle(&SelectEvent::key(Key::Char('u')), 0).unwrap();
//! control.handle(&SelectEvent::key(Key::Char('r')), 100).unwrap();
//! assert_eq!(control.value(), "uy");
//! ```

use crate::config::SelectConfig;
use crate::error::SelectError;
use crate::event::{Key, SelectEvent};
use crate::icon::{ClassIcon, IconResolver};
use crate::native::NativeSelect;
use crate::option::{RowId, SelectOption};
use crate::typeahead::{DebounceHandle, TypeAhead};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Visibility of the option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListState {
    /// List hidden
    #[default]
    Closed,
    /// List visible
    Open,
}

impl ListState {
    /// The opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Check if open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Message emitted when the selection changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChanged {
    /// The newly selected value
    pub value: String,
    /// Index of the selected option
    pub index: usize,
}

/// Request to bring a row into the visible part of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollRequest {
    /// Row to reveal
    pub row: RowId,
}

/// What an operation did, for the host to act on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Set when the selected option changed
    pub changed: Option<SelectionChanged>,
    /// Whether the list visibility changed
    pub visibility_changed: bool,
    /// Row to scroll into view
    pub scroll: Option<ScrollRequest>,
    /// Type-ahead timer to (re)schedule; supersedes any pending one
    pub search_timer: Option<DebounceHandle>,
}

/// A custom dropdown bound to a native choice control.
pub struct Control<N> {
    native: N,
    options: Vec<SelectOption>,
    selected: usize,
    state: ListState,
    /// Option index per row
    rows: Vec<usize>,
    row_by_value: HashMap<String, RowId>,
    has_icon: bool,
    icons: Box<dyn IconResolver>,
    typeahead: TypeAhead,
    config: SelectConfig,
}

impl<N: fmt::Debug> fmt::Debug for Control<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("native", &self.native)
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("state", &self.state)
            .field("has_icon", &self.has_icon)
            .field("query", &self.typeahead.query())
            .finish_non_exhaustive()
    }
}

impl<N: NativeSelect> Control<N> {
    /// Read the native control's options and build the model.
    ///
    /// When the native control reports no selected option the first one is
    /// selected; when it reports several, the last one wins. Either repair is
    /// written back to the native control.
    pub fn new(native: N, config: SelectConfig) -> Result<Self, SelectError> {
        let natives = native.options();
        if natives.is_empty() {
            return Err(SelectError::NoOptions);
        }

        let mut options = Vec::with_capacity(natives.len());
        let mut seen = HashMap::with_capacity(natives.len());
        for (index, opt) in natives.into_iter().enumerate() {
            if seen.insert(opt.value.clone(), index).is_some() {
                return Err(SelectError::DuplicateValue(opt.value));
            }
            options.push(SelectOption::from_native(opt, index));
        }

        let mut rows = Vec::new();
        let mut row_by_value = HashMap::new();
        for (index, opt) in options.iter().enumerate().filter(|(_, o)| o.has_row()) {
            row_by_value.insert(opt.value.clone(), RowId(rows.len()));
            rows.push(index);
        }

        let has_icon = native.has_attribute(&config.icon.attribute);
        let icons = Box::new(ClassIcon::from_config(&config.icon));
        let typeahead = TypeAhead::new(config.debounce_ms);

        let mut control = Self {
            native,
            options,
            selected: 0,
            state: ListState::Closed,
            rows,
            row_by_value,
            has_icon,
            icons,
            typeahead,
            config,
        };
        control.normalize_selection();
        tracing::debug!(
            options = control.options.len(),
            rows = control.rows.len(),
            selected = %control.value(),
            has_icon,
            "control created"
        );
        Ok(control)
    }

    /// Replace the icon resolver.
    #[must_use]
    pub fn with_icon_resolver(mut self, icons: impl IconResolver + 'static) -> Self {
        self.icons = Box::new(icons);
        self
    }

    /// Enforce exactly one selected option on model and native control.
    fn normalize_selection(&mut self) {
        let flagged: Vec<usize> = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, o)| o.selected)
            .map(|(i, _)| i)
            .collect();

        let selected = match flagged.as_slice() {
            [] => {
                tracing::warn!("no option selected; selecting the first");
                0
            }
            [only] => *only,
            [.., last] => {
                tracing::warn!(count = flagged.len(), "several options selected; keeping the last");
                *last
            }
        };

        for (index, opt) in self.options.iter_mut().enumerate() {
            let want = index == selected;
            if opt.selected || want {
                opt.selected = want;
                self.native.set_selected(opt.element, want);
            }
        }
        self.selected = selected;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All options in document order.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Index of the selected option.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected option.
    #[must_use]
    pub fn selected_option(&self) -> &SelectOption {
        &self.options[self.selected]
    }

    /// Value of the selected option.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.selected_option().value
    }

    /// Label of the selected option.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.selected_option().label
    }

    /// Current list visibility.
    #[must_use]
    pub const fn state(&self) -> ListState {
        self.state
    }

    /// Check if the list is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Whether rows and label carry icons.
    #[must_use]
    pub const fn has_icon(&self) -> bool {
        self.has_icon
    }

    /// Icon classes for a value, empty when icons are disabled.
    #[must_use]
    pub fn icon_classes(&self, value: &str) -> Vec<String> {
        if self.has_icon {
            self.icons.icon_classes(value)
        } else {
            Vec::new()
        }
    }

    /// Row showing the option with `value`, if it has one.
    #[must_use]
    pub fn row_for(&self, value: &str) -> Option<RowId> {
        self.row_by_value.get(value).copied()
    }

    /// Option shown by a row.
    #[must_use]
    pub fn row_option(&self, row: RowId) -> Option<&SelectOption> {
        self.rows.get(row.0).map(|&i| &self.options[i])
    }

    /// Number of visual rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows with their options, in list order.
    pub fn rows(&self) -> impl Iterator<Item = (RowId, &SelectOption)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(row, &i)| (RowId(row), &self.options[i]))
    }

    /// Current type-ahead text.
    #[must_use]
    pub fn search_query(&self) -> &str {
        self.typeahead.query()
    }

    /// Get the native control.
    #[must_use]
    pub const fn native(&self) -> &N {
        &self.native
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &SelectConfig {
        &self.config
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select the option with `value`.
    ///
    /// Selecting the current value changes nothing but still asks for its row
    /// to be revealed.
    pub fn select(&mut self, value: &str) -> Result<Outcome, SelectError> {
        let Some(index) = self.options.iter().position(|o| o.value == value) else {
            tracing::warn!(value, "select rejected: unknown value");
            return Err(SelectError::UnknownValue(value.to_string()));
        };
        Ok(self.select_index(index))
    }

    fn select_index(&mut self, index: usize) -> Outcome {
        let previous = self.selected;
        if previous != index {
            let prev = &mut self.options[previous];
            prev.selected = false;
            self.native.set_selected(prev.element, false);
        }

        let next = &mut self.options[index];
        next.selected = true;
        self.native.set_selected(next.element, true);
        self.selected = index;

        let value = self.options[index].value.clone();
        let scroll = self.row_for(&value).map(|row| ScrollRequest { row });
        let changed = (previous != index).then(|| {
            tracing::debug!(value = %value, index, "selection changed");
            SelectionChanged { value, index }
        });

        Outcome {
            changed,
            scroll,
            ..Outcome::default()
        }
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Show the list. Returns true if the state changed.
    pub fn open(&mut self) -> bool {
        self.set_state(ListState::Open)
    }

    /// Hide the list. Returns true if the state changed.
    pub fn close(&mut self) -> bool {
        self.set_state(ListState::Closed)
    }

    /// Flip the list visibility.
    pub fn toggle(&mut self) {
        self.set_state(self.state.toggled());
    }

    fn set_state(&mut self, state: ListState) -> bool {
        if self.state == state {
            return false;
        }
        tracing::debug!(?state, "list visibility");
        self.state = state;
        true
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Apply one interaction. `now_ms` is the host clock, used by type-ahead.
    pub fn handle(&mut self, event: &SelectEvent, now_ms: u64) -> Result<Outcome, SelectError> {
        let outcome = match event {
            SelectEvent::LabelClick => self.toggled_outcome(),
            SelectEvent::RowClick { value } => {
                let mut outcome = self.select(value)?;
                outcome.visibility_changed = self.close();
                outcome
            }
            SelectEvent::FocusOut => Outcome {
                visibility_changed: self.close(),
                ..Outcome::default()
            },
            SelectEvent::KeyDown { key } => self.key_down(*key, now_ms),
        };
        Ok(outcome)
    }

    fn toggled_outcome(&mut self) -> Outcome {
        self.toggle();
        Outcome {
            visibility_changed: true,
            ..Outcome::default()
        }
    }

    fn key_down(&mut self, key: Key, now_ms: u64) -> Outcome {
        match key {
            Key::Space => self.toggled_outcome(),
            Key::ArrowUp => match self.selected.checked_sub(1) {
                Some(prev) => self.select_index(prev),
                None => Outcome::default(),
            },
            Key::ArrowDown => {
                let next = self.selected + 1;
                if next < self.options.len() {
                    self.select_index(next)
                } else {
                    Outcome::default()
                }
            }
            Key::Enter | Key::Escape => Outcome {
                visibility_changed: self.close(),
                ..Outcome::default()
            },
            Key::Char(ch) => {
                let handle = self.typeahead.push(ch, now_ms);
                let mut outcome = match self.typeahead.find(&self.options) {
                    Some(index) => self.select_index(index),
                    None => Outcome::default(),
                };
                outcome.search_timer = Some(handle);
                outcome
            }
            Key::Other => Outcome::default(),
        }
    }

    /// Reset the type-ahead buffer if its window elapsed by `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.typeahead.tick(now_ms)
    }

    /// Reset the type-ahead buffer when the host timer for `handle` fires.
    pub fn expire_search(&mut self, handle: DebounceHandle) -> bool {
        self.typeahead.expire(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::MemoryNativeSelect;
    use crate::option::NativeOptionRef;
    use proptest::prelude::*;

    fn countries() -> MemoryNativeSelect {
        MemoryNativeSelect::new()
            .option("", "Select a country")
            .selected_option("us", "United States")
            .option("uy", "Uruguay")
            .option("gb", "United Kingdom")
    }

    fn control(native: MemoryNativeSelect) -> Control<MemoryNativeSelect> {
        Control::new(native, SelectConfig::default()).unwrap()
    }

    fn assert_consistent(c: &Control<MemoryNativeSelect>) {
        let flagged: Vec<usize> = c
            .options()
            .iter()
            .enumerate()
            .filter(|(_, o)| o.selected)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(flagged, vec![c.selected_index()]);
        assert_eq!(c.native().selected_values(), vec![c.value()]);
        let view = c.view();
        let marked: Vec<&str> = view
            .rows
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.value.as_str())
            .collect();
        if c.selected_option().has_row() {
            assert_eq!(marked, vec![c.value()]);
        } else {
            assert!(marked.is_empty());
        }
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_control_new() {
        let c = control(countries());
        assert_eq!(c.options().len(), 4);
        assert_eq!(c.value(), "us");
        assert_eq!(c.label(), "United States");
        assert_eq!(c.selected_index(), 1);
        assert_eq!(c.state(), ListState::Closed);
        assert!(!c.has_icon());
        assert_consistent(&c);
    }

    #[test]
    fn test_control_new_skips_rows_for_empty_values() {
        let c = control(countries());
        assert_eq!(c.row_count(), 3);
        assert_eq!(c.row_for(""), None);
        assert_eq!(c.row_for("us"), Some(RowId(0)));
        assert_eq!(c.row_for("gb"), Some(RowId(2)));
        assert_eq!(c.row_option(RowId(1)).map(|o| o.value.as_str()), Some("uy"));
        assert!(c.row_option(RowId(3)).is_none());

        let values: Vec<&str> = c.rows().map(|(_, o)| o.value.as_str()).collect();
        assert_eq!(values, vec!["us", "uy", "gb"]);
    }

    #[test]
    fn test_control_new_keeps_native_references() {
        let c = control(countries());
        for (i, opt) in c.options().iter().enumerate() {
            assert_eq!(opt.element, NativeOptionRef(i));
        }
    }

    #[test]
    fn test_control_new_no_options() {
        let err = Control::new(MemoryNativeSelect::new(), SelectConfig::default()).unwrap_err();
        assert_eq!(err, SelectError::NoOptions);
    }

    #[test]
    fn test_control_new_duplicate_value() {
        let native = MemoryNativeSelect::new().option("a", "A").option("a", "Again");
        let err = Control::new(native, SelectConfig::default()).unwrap_err();
        assert_eq!(err, SelectError::DuplicateValue("a".to_string()));
    }

    #[test]
    fn test_control_new_without_selection_picks_first() {
        let c = control(MemoryNativeSelect::new().option("a", "A").option("b", "B"));
        assert_eq!(c.value(), "a");
        assert_consistent(&c);
    }

    #[test]
    fn test_control_new_multiple_selected_keeps_last() {
        let native = MemoryNativeSelect::new()
            .selected_option("a", "A")
            .option("b", "B")
            .selected_option("c", "C");
        let c = control(native);
        assert_eq!(c.value(), "c");
        assert_consistent(&c);
    }

    #[test]
    fn test_control_new_icon_attribute() {
        let c = control(countries().attribute("data-icon"));
        assert!(c.has_icon());
        assert_eq!(c.icon_classes("us"), vec!["icon", "icon-us"]);

        let c = control(countries());
        assert!(c.icon_classes("us").is_empty());
    }

    #[test]
    fn test_control_custom_icon_resolver() {
        let c = control(countries().attribute("data-icon"))
            .with_icon_resolver(ClassIcon::new("flag", "flag-"));
        assert_eq!(c.icon_classes("uy"), vec!["flag", "flag-uy"]);
    }

    // =========================================================================
    // Select
    // =========================================================================

    #[test]
    fn test_select_changes_all_representations() {
        let mut c = control(countries());
        let outcome = c.select("uy").unwrap();

        assert_eq!(c.value(), "uy");
        assert_eq!(
            outcome.changed,
            Some(SelectionChanged {
                value: "uy".to_string(),
                index: 2
            })
        );
        assert_eq!(outcome.scroll, Some(ScrollRequest { row: RowId(1) }));
        assert!(!outcome.visibility_changed);
        assert_consistent(&c);
    }

    #[test]
    fn test_select_current_value_is_idempotent() {
        let mut c = control(countries());
        let outcome = c.select("us").unwrap();
        assert!(outcome.changed.is_none());
        assert_eq!(outcome.scroll, Some(ScrollRequest { row: RowId(0) }));
        assert_eq!(c.value(), "us");
        assert_consistent(&c);
    }

    #[test]
    fn test_select_unknown_value_fails_without_change() {
        let mut c = control(countries());
        let err = c.select("fr").unwrap_err();
        assert_eq!(err, SelectError::UnknownValue("fr".to_string()));
        assert_eq!(c.value(), "us");
        assert_consistent(&c);
    }

    #[test]
    fn test_select_placeholder_has_no_row() {
        let mut c = control(countries());
        let outcome = c.select("").unwrap();
        assert_eq!(c.label(), "Select a country");
        assert!(outcome.scroll.is_none());
        assert_consistent(&c);
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    #[test]
    fn test_list_state_toggled() {
        assert_eq!(ListState::Closed.toggled(), ListState::Open);
        assert_eq!(ListState::Open.toggled(), ListState::Closed);
        assert!(ListState::Open.is_open());
        assert!(!ListState::default().is_open());
    }

    #[test]
    fn test_open_close() {
        let mut c = control(countries());
        assert!(c.open());
        assert!(!c.open());
        assert!(c.is_open());
        assert!(c.close());
        assert!(!c.close());
        c.toggle();
        assert!(c.is_open());
    }

    #[test]
    fn test_label_click_twice_restores_visibility() {
        let mut c = control(countries());
        let before = c.state();
        let first = c.handle(&SelectEvent::LabelClick, 0).unwrap();
        assert!(first.visibility_changed);
        assert!(c.is_open());
        c.handle(&SelectEvent::LabelClick, 0).unwrap();
        assert_eq!(c.state(), before);
    }

    #[test]
    fn test_space_toggles() {
        let mut c = control(countries());
        c.handle(&SelectEvent::key(Key::Space), 0).unwrap();
        assert!(c.is_open());
        c.handle(&SelectEvent::key(Key::Space), 0).unwrap();
        assert!(!c.is_open());
    }

    #[test]
    fn test_enter_escape_focus_out_close() {
        for event in [
            SelectEvent::key(Key::Enter),
            SelectEvent::key(Key::Escape),
            SelectEvent::FocusOut,
        ] {
            let mut c = control(countries());
            c.open();
            let outcome = c.handle(&event, 0).unwrap();
            assert!(outcome.visibility_changed, "{event:?}");
            assert!(!c.is_open(), "{event:?}");

            // Already closed: nothing to report
            let outcome = c.handle(&event, 0).unwrap();
            assert!(!outcome.visibility_changed, "{event:?}");
        }
    }

    #[test]
    fn test_row_click_selects_and_closes() {
        let mut c = control(countries());
        c.open();
        let outcome = c.handle(&SelectEvent::row("gb"), 0).unwrap();
        assert_eq!(c.value(), "gb");
        assert!(!c.is_open());
        assert!(outcome.visibility_changed);
        assert_eq!(outcome.changed.map(|m| m.index), Some(3));
        assert_consistent(&c);
    }

    #[test]
    fn test_row_click_unknown_value_keeps_list_open() {
        let mut c = control(countries());
        c.open();
        let err = c.handle(&SelectEvent::row("fr"), 0).unwrap_err();
        assert!(matches!(err, SelectError::UnknownValue(_)));
        assert!(c.is_open());
    }

    // =========================================================================
    // Arrow navigation
    // =========================================================================

    #[test]
    fn test_arrow_down_moves_to_next() {
        let mut c = control(countries());
        c.handle(&SelectEvent::key(Key::ArrowDown), 0).unwrap();
        assert_eq!(c.value(), "uy");
        assert_consistent(&c);
    }

    #[test]
    fn test_arrow_down_at_last_is_noop() {
        let mut c = control(countries());
        c.select("gb").unwrap();
        let outcome = c.handle(&SelectEvent::key(Key::ArrowDown), 0).unwrap();
        assert_eq!(outcome, Outcome::default());
        assert_eq!(c.value(), "gb");
        assert_consistent(&c);
    }

    #[test]
    fn test_arrow_up_reaches_placeholder() {
        let mut c = control(countries());
        c.handle(&SelectEvent::key(Key::ArrowUp), 0).unwrap();
        assert_eq!(c.value(), "");
        assert_consistent(&c);
    }

    #[test]
    fn test_arrow_up_at_first_is_noop() {
        let mut c = control(countries());
        c.select("").unwrap();
        let outcome = c.handle(&SelectEvent::key(Key::ArrowUp), 0).unwrap();
        assert_eq!(outcome, Outcome::default());
        assert_eq!(c.selected_index(), 0);
    }

    #[test]
    fn test_arrows_keep_visibility() {
        let mut c = control(countries());
        c.open();
        let outcome = c.handle(&SelectEvent::key(Key::ArrowDown), 0).unwrap();
        assert!(!outcome.visibility_changed);
        assert!(c.is_open());
    }

    // =========================================================================
    // Type-ahead
    // =========================================================================

    #[test]
    fn test_type_ahead_refines_within_window() {
        let native = MemoryNativeSelect::new()
            .option("us", "United States")
            .option("uy", "Uruguay");
        let mut c = control(native);
        c.select("uy").unwrap();

        c.handle(&SelectEvent::key(Key::Char('U')), 1_000).unwrap();
        assert_eq!(c.value(), "us");
        c.handle(&SelectEvent::key(Key::Char('n')), 1_200).unwrap();
        assert_eq!(c.value(), "us");
        assert_eq!(c.search_query(), "un");
    }

    #[test]
    fn test_type_ahead_buffer_resets_after_window() {
        let native = MemoryNativeSelect::new()
            .option("us", "United States")
            .option("uy", "Uruguay");
        let mut c = control(native);

        c.handle(&SelectEvent::key(Key::Char('u')), 0).unwrap();
        c.handle(&SelectEvent::key(Key::Char('r')), 100).unwrap();
        assert_eq!(c.value(), "uy");

        // Idle for more than 500ms
        c.handle(&SelectEvent::key(Key::Char('u')), 700).unwrap();
        assert_eq!(c.search_query(), "u");
        assert_eq!(c.value(), "us");
    }

    #[test]
    fn test_type_ahead_no_match_keeps_selection() {
        let mut c = control(countries());
        let outcome = c.handle(&SelectEvent::key(Key::Char('z')), 0).unwrap();
        assert!(outcome.changed.is_none());
        assert!(outcome.search_timer.is_some());
        assert_eq!(c.value(), "us");
        assert_eq!(c.search_query(), "z");
    }

    #[test]
    fn test_type_ahead_matches_placeholder_label() {
        let mut c = control(countries());
        c.handle(&SelectEvent::key(Key::Char('s')), 0).unwrap();
        assert_eq!(c.value(), "");
    }

    #[test]
    fn test_type_ahead_timer_restarts_each_key() {
        let mut c = control(countries());
        let first = c
            .handle(&SelectEvent::key(Key::Char('u')), 0)
            .unwrap()
            .search_timer
            .unwrap();
        let second = c
            .handle(&SelectEvent::key(Key::Char('n')), 10)
            .unwrap()
            .search_timer
            .unwrap();
        assert_ne!(first, second);
        assert!(!c.expire_search(first));
        assert_eq!(c.search_query(), "un");
        assert!(c.expire_search(second));
        assert_eq!(c.search_query(), "");
    }

    #[test]
    fn test_type_ahead_at_clock_limit() {
        let mut c = control(countries());
        c.select("gb").unwrap();
        let outcome = c.handle(&SelectEvent::key(Key::Char('u')), u64::MAX).unwrap();
        assert!(outcome.search_timer.is_some());
        assert_eq!(c.value(), "us");
        assert!(c.tick(u64::MAX));
        assert_eq!(c.search_query(), "");
    }

    #[test]
    fn test_tick_expires_buffer() {
        let mut c = control(countries());
        c.handle(&SelectEvent::key(Key::Char('u')), 0).unwrap();
        assert!(!c.tick(100));
        assert!(c.tick(500));
        assert_eq!(c.search_query(), "");
    }

    #[test]
    fn test_custom_debounce_window() {
        let native = MemoryNativeSelect::new()
            .option("us", "United States")
            .option("uy", "Uruguay");
        let mut c = Control::new(native, SelectConfig::new().debounce_ms(100)).unwrap();
        c.handle(&SelectEvent::key(Key::Char('u')), 0).unwrap();
        c.handle(&SelectEvent::key(Key::Char('r')), 150).unwrap();
        // Window elapsed, so "r" alone matches nothing
        assert_eq!(c.search_query(), "r");
        assert_eq!(c.value(), "us");
    }

    #[test]
    fn test_other_key_ignored() {
        let mut c = control(countries());
        let outcome = c.handle(&SelectEvent::key(Key::Other), 0).unwrap();
        assert_eq!(outcome, Outcome::default());
        assert_eq!(c.search_query(), "");
    }

    // =========================================================================
    // Properties
    // =========================================================================

    fn event_strategy() -> impl Strategy<Value = SelectEvent> {
        prop_oneof![
            Just(SelectEvent::LabelClick),
            Just(SelectEvent::FocusOut),
            Just(SelectEvent::key(Key::Space)),
            Just(SelectEvent::key(Key::ArrowUp)),
            Just(SelectEvent::key(Key::ArrowDown)),
            Just(SelectEvent::key(Key::Enter)),
            Just(SelectEvent::key(Key::Escape)),
            prop::char::range('a', 'z').prop_map(|c| SelectEvent::key(Key::Char(c))),
            prop::sample::select(vec!["", "us", "uy", "gb", "fr"]).prop_map(SelectEvent::row),
        ]
    }

    proptest! {
        #[test]
        fn prop_exactly_one_selected(events in prop::collection::vec(event_strategy(), 0..40)) {
            let mut c = control(countries());
            let mut now = 0;
            for event in &events {
                now += 120;
                let _ = c.handle(event, now);
                let selected = c.options().iter().filter(|o| o.selected).count();
                prop_assert_eq!(selected, 1);
                prop_assert_eq!(c.native().selected_values(), vec![c.value()]);
            }
        }

        #[test]
        fn prop_select_existing_value(index in 0usize..4) {
            let mut c = control(countries());
            let value = c.options()[index].value.clone();
            c.select(&value).unwrap();
            prop_assert_eq!(c.selected_index(), index);
            for (i, opt) in c.options().iter().enumerate() {
                prop_assert_eq!(opt.selected, i == index);
                prop_assert_eq!(c.native().is_selected(i), i == index);
            }
        }
    }
}
