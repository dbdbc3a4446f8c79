//! Custom dropdown bound to a native `<select>` element.
//!
//! Construction reads the native options, inserts the visual container right
//! after the (now hidden) native element and registers the handlers. The
//! handlers own the control and live as long as the page, so the returned
//! [`CustomSelect`] is only a handle and may be dropped.

use super::app::{report, to_js};
use super::dom;
use super::events::{key_from_event, now_ms, suppresses_default};
use super::native::DomNativeSelect;
use selectkit_core::markup;
use selectkit_core::scroll::{self, Extent};
use selectkit_core::{
    ClassNames, Control, ControlView, DebounceHandle, Outcome, RowId, SelectConfig, SelectError,
    SelectEvent, SelectionChanged, ViewChange,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventInit, EventTarget, HtmlElement, HtmlSelectElement,
    KeyboardEvent,
};

/// State shared between the JS handle and the DOM listeners.
struct Bound {
    control: Control<DomNativeSelect>,
    /// Last view written to the DOM
    applied: ControlView,
    document: Document,
    native: HtmlSelectElement,
    container: HtmlElement,
    label: Element,
    list: HtmlElement,
    /// Row elements indexed by `RowId`
    rows: Vec<HtmlElement>,
    classes: ClassNames,
    timer: Option<(i32, DebounceHandle)>,
    timer_callback: Closure<dyn FnMut()>,
    on_change: Option<js_sys::Function>,
}

impl Bound {
    /// Bring the DOM up to date after an operation.
    fn render(&mut self, outcome: &Outcome) -> Option<SelectionChanged> {
        let next = self.control.view();
        for change in next.diff(&self.applied) {
            if let Err(err) = self.apply(&change) {
                report(&err);
            }
        }
        self.applied = next;

        if let Some(request) = outcome.scroll {
            self.reveal(request.row);
        }
        if let Some(handle) = outcome.search_timer {
            self.restart_timer(handle);
        }
        outcome.changed.clone()
    }

    fn apply(&self, change: &ViewChange) -> Result<(), JsValue> {
        match change {
            ViewChange::Label(label) => {
                dom::replace_children(&self.document, &self.label, &markup::label_content(label))
            }
            ViewChange::RowSelected { row, selected } => {
                if let Some(el) = self.rows.get(row.0) {
                    el.class_list()
                        .toggle_with_force(&self.classes.selected, *selected)?;
                }
                Ok(())
            }
            ViewChange::Visibility { open } => {
                self.list
                    .class_list()
                    .toggle_with_force(&self.classes.show, *open)?;
                Ok(())
            }
        }
    }

    /// Scroll the list so `row` is visible, moving as little as possible.
    fn reveal(&self, row: RowId) {
        let Some(el) = self.rows.get(row.0) else {
            return;
        };
        let list_rect = self.list.get_bounding_client_rect();
        let row_rect = el.get_bounding_client_rect();
        let scroll_top = self.list.scroll_top() as f32;
        let content_top = list_rect.top() + f64::from(self.list.client_top());

        let viewport = Extent::new(scroll_top, self.list.client_height() as f32);
        let target = Extent::new(
            (row_rect.top() - content_top) as f32 + scroll_top,
            row_rect.height() as f32,
        );
        if let Some(top) = scroll::nearest(viewport, target) {
            self.list.set_scroll_top(top.round() as i32);
        }
    }

    /// Cancel the pending type-ahead timer and schedule a new one.
    fn restart_timer(&mut self, handle: DebounceHandle) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some((id, _)) = self.timer.take() {
            window.clear_timeout_with_handle(id);
        }
        let delay = i32::try_from(self.control.config().debounce_ms).unwrap_or(i32::MAX);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.timer_callback.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(id) => self.timer = Some((id, handle)),
            Err(err) => report(&err),
        }
    }

    fn expire_timer(&mut self) {
        if let Some((_, handle)) = self.timer.take() {
            self.control.expire_search(handle);
        }
    }
}

/// Run an operation on the control, update the DOM, then notify listeners.
///
/// Notification happens after the borrow is released so `change` listeners
/// may call back into the [`CustomSelect`].
fn dispatch(
    bound: &Rc<RefCell<Bound>>,
    op: impl FnOnce(&mut Control<DomNativeSelect>) -> Result<Outcome, SelectError>,
) -> Result<(), JsValue> {
    let (changed, native, callback) = {
        let Ok(mut b) = bound.try_borrow_mut() else {
            return Err(JsValue::from_str("custom select is already handling an event"));
        };
        let outcome = op(&mut b.control).map_err(to_js)?;
        let changed = b.render(&outcome);
        (changed, b.native.clone(), b.on_change.clone())
    };

    if let Some(changed) = changed {
        notify(&native, callback.as_ref(), &changed);
    }
    Ok(())
}

fn notify(native: &HtmlSelectElement, callback: Option<&js_sys::Function>, changed: &SelectionChanged) {
    let init = EventInit::new();
    init.set_bubbles(true);
    match Event::new_with_event_init_dict("change", &init) {
        Ok(event) => {
            if let Err(err) = native.dispatch_event(&event) {
                report(&err);
            }
        }
        Err(err) => report(&err),
    }

    if let Some(callback) = callback {
        let json = serde_json::to_string(changed).unwrap_or_default();
        if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
            report(&err);
        }
    }
}

/// Register a page-lifetime DOM listener that feeds translated events to the
/// control.
fn listen(
    target: &EventTarget,
    name: &str,
    bound: &Rc<RefCell<Bound>>,
    mut translate: impl FnMut(&Event) -> Option<SelectEvent> + 'static,
) -> Result<(), JsValue> {
    let bound = Rc::clone(bound);
    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(select_event) = translate(&event) else {
            return;
        };
        if let Err(err) = dispatch(&bound, |control| control.handle(&select_event, now_ms())) {
            report(&err);
        }
    });
    target.add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}

fn translate_key(event: &Event) -> Option<SelectEvent> {
    let key = key_from_event(event.dyn_ref::<KeyboardEvent>()?);
    if suppresses_default(key) {
        event.prevent_default();
    }
    Some(SelectEvent::key(key))
}

/// Handle to a custom dropdown replacing one native `<select>`.
#[wasm_bindgen]
pub struct CustomSelect {
    bound: Rc<RefCell<Bound>>,
}

#[wasm_bindgen]
impl CustomSelect {
    /// Enhance a `<select>` element with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(select: HtmlSelectElement) -> Result<CustomSelect, JsValue> {
        Self::build(select, SelectConfig::default())
    }

    /// Enhance a `<select>` element with a JSON configuration.
    pub fn with_config(select: HtmlSelectElement, config: &str) -> Result<CustomSelect, JsValue> {
        let config = SelectConfig::from_json(config).map_err(to_js)?;
        Self::build(select, config)
    }

    /// Value of the selected option.
    pub fn value(&self) -> String {
        self.bound.borrow().control.value().to_string()
    }

    /// Label of the selected option.
    pub fn label(&self) -> String {
        self.bound.borrow().control.label().to_string()
    }

    /// Select the option with `value`.
    pub fn set_value(&self, value: &str) -> Result<(), JsValue> {
        dispatch(&self.bound, |control| control.select(value))
    }

    /// Check if the option list is shown.
    pub fn is_open(&self) -> bool {
        self.bound.borrow().control.is_open()
    }

    /// Show the option list.
    pub fn open(&self) -> Result<(), JsValue> {
        dispatch(&self.bound, |control| {
            Ok(Outcome {
                visibility_changed: control.open(),
                ..Outcome::default()
            })
        })
    }

    /// Hide the option list.
    pub fn close(&self) -> Result<(), JsValue> {
        dispatch(&self.bound, |control| {
            Ok(Outcome {
                visibility_changed: control.close(),
                ..Outcome::default()
            })
        })
    }

    /// Register a callback receiving `SelectionChanged` JSON on every change.
    pub fn on_change(&self, callback: js_sys::Function) {
        self.bound.borrow_mut().on_change = Some(callback);
    }

    /// Pending type-ahead input; empty once the search window has passed.
    pub fn search_query(&self) -> String {
        self.bound.borrow().control.search_query().to_string()
    }

    /// Current view as JSON.
    pub fn view_json(&self) -> String {
        serde_json::to_string(&self.bound.borrow().applied).unwrap_or_default()
    }

    /// The visual container element.
    pub fn container(&self) -> HtmlElement {
        self.bound.borrow().container.clone()
    }
}

impl CustomSelect {
    fn build(select: HtmlSelectElement, config: SelectConfig) -> Result<Self, JsValue> {
        let document = select
            .owner_document()
            .ok_or("select element has no owner document")?;
        let control = Control::new(DomNativeSelect::new(select.clone()), config).map_err(to_js)?;
        let classes = control.config().classes.clone();
        let view = control.view();

        let container = dom::build_html(&document, &markup::container_shell(&classes))?;
        let label = dom::build(&document, &markup::label(&view.label, &classes))?;
        let list = dom::build_html(&document, &markup::list_shell(view.open, &classes))?;
        let mut rows = Vec::with_capacity(view.rows.len());
        for row in &view.rows {
            let el = dom::build_html(&document, &markup::row(row, &classes))?;
            list.append_child(&el)?;
            rows.push(el);
        }
        container.append_child(&label)?;
        container.append_child(&list)?;

        let row_values: Vec<String> = view.rows.iter().map(|r| r.value.clone()).collect();
        let bound = Rc::new_cyclic(|weak: &Weak<RefCell<Bound>>| {
            let weak = weak.clone();
            let timer_callback = Closure::<dyn FnMut()>::new(move || {
                if let Some(bound) = weak.upgrade() {
                    if let Ok(mut b) = bound.try_borrow_mut() {
                        b.expire_timer();
                    }
                }
            });
            RefCell::new(Bound {
                control,
                applied: view,
                document,
                native: select.clone(),
                container: container.clone(),
                label: label.clone(),
                list,
                rows: rows.clone(),
                classes,
                timer: None,
                timer_callback,
                on_change: None,
            })
        });

        listen(&label, "click", &bound, |_| Some(SelectEvent::LabelClick))?;
        listen(&container, "blur", &bound, |_| Some(SelectEvent::FocusOut))?;
        listen(&container, "keydown", &bound, translate_key)?;
        for (el, value) in rows.iter().zip(row_values) {
            listen(el, "click", &bound, move |_| Some(SelectEvent::row(value.clone())))?;
        }

        select.style().set_property("display", "none")?;
        select.after_with_node_1(&container)?;
        tracing::debug!(value = %bound.borrow().control.value(), "custom select attached");

        Ok(Self { bound })
    }
}
