//! Pure Yew view components for the stopwatch UI.
//!
//! This module contains stateless components that render based on props;
//! all decisions about what is enabled or shown come from the core crate.

use crate::config::EMPTY_LAPS_MESSAGE;
use chronomaster::{format_hms_cs, format_stat, Controls, Lap, TimeParts};
use std::rc::Rc;
use std::time::Duration;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimerDisplayProps {
    pub elapsed: Duration,
    pub running: bool,
    pub status: AttrValue,
}

#[function_component(TimerDisplay)]
pub fn timer_display(props: &TimerDisplayProps) -> Html {
    let parts = TimeParts::from_duration(props.elapsed);
    html! {
        <div class="timer-section">
            <div id="timerDisplay" class={classes!("timer-display", props.running.then_some("running"))}>
                <span class="hours">{ parts.hours }</span>
                <span class="separator">{ ":" }</span>
                <span class="minutes">{ parts.minutes }</span>
                <span class="separator">{ ":" }</span>
                <span class="seconds">{ parts.seconds }</span>
                <span class="separator">{ "." }</span>
                <span class="milliseconds">{ parts.centis }</span>
            </div>
            <div id="timerStatus" class="timer-status">{ props.status.clone() }</div>
        </div>
    }
}

/// Start/pause/reset/lap buttons.
#[derive(Properties, PartialEq)]
pub struct ControlPanelProps {
    pub controls: Controls,
    pub start_label: AttrValue,
    pub running: bool,
    pub on_start: Callback<()>,
    pub on_pause: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_lap: Callback<()>,
}

#[function_component(ControlPanel)]
pub fn control_panel(props: &ControlPanelProps) -> Html {
    let start_icon = if props.running { "⏸" } else { "▶" };
    html! {
        <div class="controls">
            <button id="startBtn" class="btn btn-start"
                disabled={!props.controls.start}
                onclick={props.on_start.reform(|_| ())}>
                <span class="btn-icon">{ start_icon }</span>
                <span class="btn-text">{ props.start_label.clone() }</span>
            </button>
            <button id="pauseBtn" class="btn btn-pause"
                disabled={!props.controls.pause}
                onclick={props.on_pause.reform(|_| ())}>
                <span class="btn-icon">{ "⏸" }</span>
                <span class="btn-text">{ "Pause" }</span>
            </button>
            <button id="resetBtn" class="btn btn-reset"
                disabled={!props.controls.reset}
                onclick={props.on_reset.reform(|_| ())}>
                <span class="btn-icon">{ "↺" }</span>
                <span class="btn-text">{ "Reset" }</span>
            </button>
            <button id="lapBtn" class="btn btn-lap"
                disabled={!props.controls.lap}
                onclick={props.on_lap.reform(|_| ())}>
                <span class="btn-icon">{ "⚑" }</span>
                <span class="btn-text">{ "Lap" }</span>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub count: usize,
    pub best: Option<Duration>,
    pub average: Option<Duration>,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    html! {
        <div id="statsSection" class="stats-section">
            <div class="stat">
                <span class="stat-label">{ "Total Laps" }</span>
                <span id="totalLaps" class="stat-value">{ props.count }</span>
            </div>
            <div class="stat">
                <span class="stat-label">{ "Best Lap" }</span>
                <span id="bestLap" class="stat-value">{ format_stat(props.best) }</span>
            </div>
            <div class="stat">
                <span class="stat-label">{ "Average" }</span>
                <span id="avgLap" class="stat-value">{ format_stat(props.average) }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LapListProps {
    pub laps: Rc<Vec<Lap>>,
    pub best_number: Option<usize>,
    pub controls: Controls,
    pub on_clear: Callback<()>,
    pub on_export: Callback<()>,
}

/// Lap history, newest first.
#[function_component(LapList)]
pub fn lap_list(props: &LapListProps) -> Html {
    html! {
        <div class="laps-section">
            <div class="laps-header">
                <h3>{ "Lap Times" }</h3>
                <div class="laps-actions">
                    <button id="clearLapsBtn" class="btn-small"
                        disabled={!props.controls.clear_laps}
                        onclick={props.on_clear.reform(|_| ())}>
                        { "Clear" }
                    </button>
                    <button id="exportBtn" class="btn-small"
                        disabled={!props.controls.export}
                        onclick={props.on_export.reform(|_| ())}>
                        { "Export" }
                    </button>
                </div>
            </div>
            <div id="lapTimes" class="lap-times">
                if props.laps.is_empty() {
                    <div id="emptyState" class="empty-state">{ EMPTY_LAPS_MESSAGE }</div>
                } else {
                    { props.laps.iter().rev().map(|lap| {
                        render_lap_row(lap, props.best_number == Some(lap.number))
                    }).collect::<Html>() }
                }
            </div>
        </div>
    }
}

fn render_lap_row(lap: &Lap, is_best: bool) -> Html {
    html! {
        <div key={lap.number} class={classes!("lap-item", is_best.then_some("best"))}>
            <div class="lap-info">
                <span class="lap-number">{ format!("#{}", lap.number) }</span>
                <span class="lap-time">{ format_hms_cs(lap.total) }</span>
            </div>
            <span class="lap-split">{ format!("+{}", format_hms_cs(lap.split)) }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    pub visible: bool,
}

#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    html! {
        <div id="loadingOverlay" class={classes!("loading-overlay", (!props.visible).then_some("hidden"))}>
            <div class="spinner"></div>
        </div>
    }
}
