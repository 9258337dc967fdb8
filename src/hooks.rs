use chronomaster::defaults::REFRESH_INTERVAL_MS;
use gloo_timers::callback::Interval;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;
use yew::prelude::*;

/// Re-renders the calling component every [`REFRESH_INTERVAL_MS`] while
/// `active` is true.
///
/// The interval lives inside the effect and is dropped by its destructor,
/// which runs when `active` changes or the component unmounts. Dropping a
/// gloo `Interval` clears it, so no tick can fire after either of those.
/// Ticks only schedule a render; they never touch stopwatch state.
#[hook]
pub fn use_refresh(active: bool) {
    let redraw = use_force_update();

    use_effect_with(active, move |&active| {
        let interval = active.then(|| {
            debug!("Display refresh started");
            Interval::new(REFRESH_INTERVAL_MS, move || redraw.force_update())
        });
        move || {
            if interval.is_some() {
                debug!("Display refresh stopped");
            }
            drop(interval);
        }
    });
}

/// Listens for `event` on the document for the lifetime of the component.
///
/// The listener always dispatches to the callback from the latest render,
/// so handlers see current state without re-registering on every render.
#[hook]
pub fn use_document_listener(event: &'static str, callback: Callback<Event>) {
    let latest = use_mut_ref(|| callback.clone());
    *latest.borrow_mut() = callback;

    use_effect_with(event, move |&event| {
        let listener = Closure::<dyn Fn(Event)>::new(move |e: Event| {
            // Clone out first: emitting may re-render and replace `latest`.
            let cb = latest.borrow().clone();
            cb.emit(e);
        });

        let document = gloo_utils::document();
        let registered = document
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .map_err(|e| warn!("Could not listen for {}: {:?}", event, e))
            .is_ok();

        move || {
            if registered {
                document
                    .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
                    .ok();
            }
            drop(listener);
        }
    });
}
