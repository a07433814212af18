//! `SubheaderSpanObserver` - keeps a grouped table's subheader span in sync
//! with the container width.
//!
//! The observer measures once on creation, then again on every
//! `ResizeObserver` notification for the container. The JS callback fires only
//! when the span actually changes:
//!
//! ```javascript
//! import init, { SubheaderSpanObserver } from 'tablegroup';
//! await init();
//! const observer = new SubheaderSpanObserver(container, (span, colSpan) => {
//!     setSubheaderColSpan(colSpan);
//! });
//! // later
//! observer.disconnect();
//! ```

mod measure;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, ResizeObserver};

use crate::layout::{SpanConfig, SpanTracker};

/// State shared with the resize callback.
struct ObserverState {
    container: Element,
    tracker: SpanTracker,
    callback: Function,
}

/// Measure and, on change, notify the JS callback with `(span, colSpan)`.
///
/// The borrow is released before the callback runs so the callback may read
/// the observer back.
fn refresh(state: &Rc<RefCell<ObserverState>>) -> Result<(), JsValue> {
    let (callback, span, display_span) = {
        let mut s = state.borrow_mut();
        let measurement = measure::measure_header(&s.container)?;
        let Some(span) = s.tracker.observe(&measurement) else {
            return Ok(());
        };
        (s.callback.clone(), span, s.tracker.display_span())
    };
    callback.call2(
        &JsValue::NULL,
        &JsValue::from(span),
        &JsValue::from(display_span),
    )?;
    Ok(())
}

#[wasm_bindgen]
pub struct SubheaderSpanObserver {
    state: Rc<RefCell<ObserverState>>,
    observer: ResizeObserver,
    _on_resize: Closure<dyn FnMut(Array, ResizeObserver)>,
}

#[wasm_bindgen]
impl SubheaderSpanObserver {
    /// Start observing `container`.
    ///
    /// `config` is an optional `{ reservedColumns, minDisplaySpan }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: Element,
        callback: Function,
        config: JsValue,
    ) -> Result<SubheaderSpanObserver, JsValue> {
        console_error_panic_hook::set_once();

        let config: SpanConfig = if config.is_undefined() || config.is_null() {
            SpanConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        let state = Rc::new(RefCell::new(ObserverState {
            container: container.clone(),
            tracker: SpanTracker::new(config),
            callback,
        }));

        let state_ref = Rc::clone(&state);
        let on_resize = Closure::wrap(Box::new(move |_entries: Array, _observer: ResizeObserver| {
            if let Err(e) = refresh(&state_ref) {
                web_sys::console::warn_2(&JsValue::from_str("subheader span refresh failed:"), &e);
            }
        }) as Box<dyn FnMut(Array, ResizeObserver)>);

        let observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;
        refresh(&state)?;
        observer.observe(&container);

        Ok(Self {
            state,
            observer,
            _on_resize: on_resize,
        })
    }

    /// Measure now, outside of a resize notification (e.g. after rows change).
    pub fn refresh(&self) -> Result<(), JsValue> {
        refresh(&self.state)
    }

    /// Last raw span; `undefined` before the first measurement.
    #[wasm_bindgen(getter)]
    pub fn span(&self) -> Option<i32> {
        self.state.borrow().tracker.current()
    }

    /// Last span clamped for use as a `colSpan` attribute.
    #[wasm_bindgen(getter, js_name = colSpan)]
    pub fn col_span(&self) -> u32 {
        self.state.borrow().tracker.display_span()
    }

    /// Stop observing; the callback will not fire again.
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for SubheaderSpanObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
