//! Presentation projection of a control.
//!
//! [`ControlView`] is derived from the model alone. Backends keep the last
//! view they applied and ask [`ControlView::diff`] for the updates needed to
//! reach the next one.

use crate::control::Control;
use crate::native::NativeSelect;
use crate::option::RowId;
use serde::{Deserialize, Serialize};

/// Content of the label-display region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelView {
    /// Selected option's label
    pub text: String,
    /// Icon classes; empty for no icon
    pub icon: Vec<String>,
}

/// One option row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowView {
    /// Row handle
    pub id: RowId,
    /// Option value, also the row's `data-value`
    pub value: String,
    /// Option label
    pub label: String,
    /// Icon classes; empty for no icon
    pub icon: Vec<String>,
    /// Whether this row carries the selected marker
    pub selected: bool,
}

/// Everything a backend needs to draw a control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlView {
    /// Label region
    pub label: LabelView,
    /// Rows in list order
    pub rows: Vec<RowView>,
    /// Whether the list is shown
    pub open: bool,
    /// Index of the selected option
    pub selected: usize,
}

/// A single presentation update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewChange {
    /// Rebuild the label region
    Label(LabelView),
    /// Add or remove the selected marker on a row
    RowSelected {
        /// Row to update
        row: RowId,
        /// New marker state
        selected: bool,
    },
    /// Show or hide the list
    Visibility {
        /// New visibility
        open: bool,
    },
}

impl ControlView {
    /// Updates that turn `previous` into `self`.
    ///
    /// Both views must come from the same control, so rows line up by
    /// position.
    #[must_use]
    pub fn diff(&self, previous: &Self) -> Vec<ViewChange> {
        let mut changes = Vec::new();
        if self.label != previous.label {
            changes.push(ViewChange::Label(self.label.clone()));
        }
        for (row, old) in self.rows.iter().zip(&previous.rows) {
            if row.selected != old.selected {
                changes.push(ViewChange::RowSelected {
                    row: row.id,
                    selected: row.selected,
                });
            }
        }
        if self.open != previous.open {
            changes.push(ViewChange::Visibility { open: self.open });
        }
        changes
    }

    /// The row carrying the selected marker, if any.
    #[must_use]
    pub fn selected_row(&self) -> Option<&RowView> {
        self.rows.iter().find(|r| r.selected)
    }
}

impl<N: NativeSelect> Control<N> {
    /// Project the model into a [`ControlView`].
    #[must_use]
    pub fn view(&self) -> ControlView {
        let selected = self.selected_option();
        let label = LabelView {
            text: selected.label.clone(),
            icon: self.icon_classes(&selected.value),
        };
        let rows = self
            .rows()
            .map(|(id, opt)| RowView {
                id,
                value: opt.value.clone(),
                label: opt.label.clone(),
                icon: self.icon_classes(&opt.value),
                selected: opt.selected,
            })
            .collect();

        ControlView {
            label,
            rows,
            open: self.is_open(),
            selected: self.selected_index(),
        }
    }
}
