use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// One callback registered for a set of event types on one target.
///
/// Dropping the guard removes every registration it made, so a component
/// that keeps the guard in its effect teardown cannot leak listeners across
/// mount/unmount cycles.
pub struct ListenerGuard {
    target: EventTarget,
    events: Vec<&'static str>,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    pub fn attach<F>(target: &EventTarget, events: &[&'static str], handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let mut guard = Self {
            target: target.clone(),
            events: Vec::with_capacity(events.len()),
            callback,
        };

        for &event in events {
            guard
                .target
                .add_event_listener_with_callback(event, guard.callback.as_ref().unchecked_ref())
                .map_err(|e| SiteError::Listener {
                    event,
                    detail: format!("{:?}", e),
                })?;
            // Only what was actually registered gets removed on drop.
            guard.events.push(event);
        }

        Ok(guard)
    }

    pub fn events(&self) -> &[&'static str] {
        &self.events
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        for event in self.events.drain(..) {
            if let Err(e) = self
                .target
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())
            {
                warn!("Failed to remove `{}` listener: {:?}", event, e);
            }
        }
    }
}
