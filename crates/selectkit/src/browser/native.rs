//! `NativeSelect` over a real `<select>` element.

use selectkit_core::{NativeOption, NativeOptionRef, NativeSelect};
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

/// The hidden native control a [`CustomSelect`](super::CustomSelect) keeps in
/// sync for form submission.
#[derive(Debug, Clone)]
pub struct DomNativeSelect {
    element: HtmlSelectElement,
}

impl DomNativeSelect {
    /// Wrap a `<select>` element.
    #[must_use]
    pub const fn new(element: HtmlSelectElement) -> Self {
        Self { element }
    }

    /// Get the wrapped element.
    #[must_use]
    pub const fn element(&self) -> &HtmlSelectElement {
        &self.element
    }

    fn option(&self, index: usize) -> Option<HtmlOptionElement> {
        let index = u32::try_from(index).ok()?;
        self.element.item(index)?.dyn_into::<HtmlOptionElement>().ok()
    }
}

impl NativeSelect for DomNativeSelect {
    fn options(&self) -> Vec<NativeOption> {
        (0..self.element.length())
            .filter_map(|i| self.element.item(i))
            .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
            .map(|opt| NativeOption::new(opt.value(), opt.label()).selected(opt.selected()))
            .collect()
    }

    fn set_selected(&mut self, option: NativeOptionRef, selected: bool) {
        if let Some(opt) = self.option(option.0) {
            opt.set_selected(selected);
        }
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.element.has_attribute(name)
    }
}
