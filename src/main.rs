//! Main module for the ChronoMaster stopwatch using Yew.
//! Wires UI components, hooks and browser side effects around the core
//! stopwatch from the library crate.

use chronomaster::{
    export_file_name, render_report,
    shortcuts::{is_text_entry, Shortcut},
    store::LocalStore,
    theme::{load_theme, save_theme},
    Phase, Stopwatch,
};
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod interop;

use components::{ControlPanel, LapList, LoadingOverlay, StatsPanel, TimerDisplay};
use config::*;
use hooks::{use_document_listener, use_refresh};

type SharedStopwatch = Rc<RefCell<Stopwatch>>;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Build a callback that mutates the stopwatch and then re-renders.
fn stopwatch_action(
    stopwatch: &SharedStopwatch,
    redraw: &UseForceUpdateHandle,
    action: impl Fn(&mut Stopwatch) + 'static,
) -> Callback<()> {
    let stopwatch = stopwatch.clone();
    let redraw = redraw.clone();
    Callback::from(move |_| {
        action(&mut stopwatch.borrow_mut());
        redraw.force_update();
    })
}

fn record_lap(stopwatch: &mut Stopwatch) {
    if let Err(e) = stopwatch.lap() {
        warn!("{}", e);
    }
}

fn export_laps(stopwatch: &Stopwatch) {
    match render_report(stopwatch.laps().all(), &interop::local_timestamp()) {
        Ok(report) => {
            let file_name = export_file_name(&interop::iso_timestamp());
            interop::download_text(&file_name, &report);
            info!("Exported {} laps to {}", stopwatch.laps().count(), file_name);
        }
        Err(e) => warn!("{}", e),
    }
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let stopwatch = use_mut_ref(Stopwatch::with_system_clock);
    let redraw = use_force_update();
    let theme = use_state(|| load_theme(&LocalStore));
    let fullscreen = use_state(|| false);
    let loading = use_state(|| true);

    // Snapshot for this render. Everything below reads from here.
    let (elapsed, phase, controls, laps, best_number, best, average) = {
        let sw = stopwatch.borrow();
        let ledger = sw.laps();
        (
            sw.elapsed(),
            sw.phase(),
            sw.controls(),
            Rc::new(ledger.all().to_vec()),
            ledger.best_lap().map(|l| l.number),
            ledger.best(),
            ledger.average(),
        )
    };
    let running = phase == Phase::Running;
    let lap_count = laps.len();

    use_refresh(running);

    // Hide the loading overlay after the startup delay
    {
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(LOADING_DELAY_MS).await;
                loading.set(false);
            });
            || ()
        });
    }

    // Apply the theme to the document whenever it changes
    use_effect_with(*theme, move |theme| {
        interop::apply_theme_attribute(theme.as_str());
        || ()
    });

    let on_start = stopwatch_action(&stopwatch, &redraw, |sw| sw.start());
    let on_pause = stopwatch_action(&stopwatch, &redraw, |sw| sw.pause());
    let on_reset = stopwatch_action(&stopwatch, &redraw, |sw| sw.reset());
    let on_lap = stopwatch_action(&stopwatch, &redraw, record_lap);
    let on_clear = stopwatch_action(&stopwatch, &redraw, |sw| {
        if interop::confirm(CLEAR_LAPS_PROMPT) {
            sw.clear_laps();
        }
    });
    let on_export = {
        let stopwatch = stopwatch.clone();
        Callback::from(move |_| export_laps(&stopwatch.borrow()))
    };

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggle();
            save_theme(&LocalStore, next);
            theme.set(next);
        })
    };

    // --- Document listeners ---
    {
        let fullscreen = fullscreen.clone();
        let on_fullscreen_change = Callback::from(move |_| fullscreen.set(interop::is_fullscreen()));
        use_document_listener(FULLSCREEN_CHANGE_EVENT, on_fullscreen_change.clone());
        use_document_listener(WEBKIT_FULLSCREEN_CHANGE_EVENT, on_fullscreen_change);
    }
    {
        let stopwatch = stopwatch.clone();
        let redraw = redraw.clone();
        let toggle_theme = toggle_theme.clone();
        use_document_listener(
            "keydown",
            Callback::from(move |e: web_sys::Event| {
                let Some(key) = e.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let typing = e
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .is_some_and(|el| is_text_entry(&el.tag_name()));
                if typing {
                    return;
                }
                let Some(shortcut) = Shortcut::from_key(&key.code(), key.ctrl_key(), key.meta_key())
                else {
                    return;
                };
                e.prevent_default();

                let controls = stopwatch.borrow().controls();
                if !shortcut.is_enabled(&controls) {
                    return;
                }
                match shortcut {
                    Shortcut::StartPause => stopwatch.borrow_mut().toggle(),
                    Shortcut::Reset => stopwatch.borrow_mut().reset(),
                    Shortcut::Lap => record_lap(&mut stopwatch.borrow_mut()),
                    Shortcut::Fullscreen => interop::toggle_fullscreen(),
                    Shortcut::Theme => toggle_theme.emit(()),
                }
                redraw.force_update();
            }),
        );
    }

    html! {
        <div class={classes!("app-container", (*fullscreen).then_some("fullscreen-mode"))}>
            <LoadingOverlay visible={*loading} />
            <header class="app-header">
                <h1>{ APP_TITLE }</h1>
                <div class="header-actions">
                    <button id="themeToggle" class="icon-btn"
                        onclick={toggle_theme.reform(|_| ())}>
                        <span class="theme-icon">{ (*theme).icon() }</span>
                    </button>
                    <button id="fullscreenBtn" class="icon-btn"
                        onclick={Callback::from(|_| interop::toggle_fullscreen())}>
                        <span class="fullscreen-icon">{ "⛶" }</span>
                    </button>
                </div>
            </header>

            <TimerDisplay {elapsed} {running} status={phase.status_text()} />

            <ControlPanel
                {controls}
                {running}
                start_label={phase.start_label()}
                {on_start}
                {on_pause}
                {on_reset}
                {on_lap}
            />

            <StatsPanel count={lap_count} {best} {average} />

            <LapList {laps} {best_number} {controls} {on_clear} {on_export} />
        </div>
    }
}

#[function_component]
pub fn App() -> Html {
    html! { <Main /> }
}

/// Entry point: installs the panic hook and renders the App component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
