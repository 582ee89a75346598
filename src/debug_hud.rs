use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, PointerEvent};
use yew::prelude::*;

use crate::input::{self, PointerKind};
use crate::journal_core::JournalSnapshot;

const PATH_DEPTH: usize = 3;
const CAPTURED_EVENTS: [&str; 4] = ["click", "keydown", "pointerdown", "pointerup"];

#[derive(Clone, Debug, PartialEq)]
struct LastInput {
    kind: String,
    target: String,
    path: Vec<String>,
}

impl LastInput {
    fn from_event(event: &Event) -> Self {
        let kind = if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            format!("keydown: {}", key.key())
        } else if let Some(pointer) = event.dyn_ref::<PointerEvent>() {
            let kind = PointerKind::from_pointer_type(&pointer.pointer_type());
            format!("{} ({})", event.type_(), kind.label())
        } else {
            event.type_()
        };
        Self {
            kind,
            target: input::describe_target(event),
            path: input::describe_path(event, PATH_DEPTH),
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct DebugHudProps {
    pub(crate) snapshot: JournalSnapshot,
}

/// Read-only overlay with the journal state and the last input the document
/// saw. It never receives pointer events itself.
#[function_component(DebugHud)]
pub(crate) fn debug_hud(props: &DebugHudProps) -> Html {
    let last_input = use_state(|| None::<LastInput>);
    {
        let last_input = last_input.clone();
        use_effect_with((), move |_| {
            let document = web_sys::window().and_then(|window| window.document());
            let listeners: Vec<EventListener> = document
                .map(|document| {
                    CAPTURED_EVENTS
                        .into_iter()
                        .map(|name| {
                            let last_input = last_input.clone();
                            let options = EventListenerOptions {
                                phase: EventListenerPhase::Capture,
                                passive: true,
                            };
                            EventListener::new_with_options(
                                &document,
                                name,
                                options,
                                move |event: &Event| {
                                    last_input.set(Some(LastInput::from_event(event)));
                                },
                            )
                        })
                        .collect()
                })
                .unwrap_or_default();
            move || drop(listeners)
        });
    }

    let snapshot = props.snapshot;
    let state = snapshot.state;
    let flag = |value: bool| if value { "true" } else { "false" };
    let direction = state
        .flip_direction
        .map(|direction| direction.label())
        .unwrap_or("-");
    let outcome = snapshot
        .last_outcome
        .map(|outcome| outcome.label())
        .unwrap_or("-");
    let drag = if snapshot.gesture.is_dragging {
        format!("{:.0}px", snapshot.gesture.drag_x)
    } else {
        "-".to_string()
    };
    let last = match &*last_input {
        Some(last) => {
            let path = if last.path.is_empty() {
                html! {}
            } else {
                html! { <div class="hud-path">{ format!("path: {}", last.path.join(" → ")) }</div> }
            };
            html! {
                <div class="hud-last">
                    <div class="hud-label">{ "last input" }</div>
                    <div class="hud-kind">{ last.kind.clone() }</div>
                    <div class="hud-target">{ format!("→ {}", last.target) }</div>
                    { path }
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <aside class="debug-hud" style="pointer-events:none;" aria-hidden="true">
            <div class="hud-title">{ "Debug HUD" }</div>
            <div>{ format!("isOpen: {}", flag(snapshot.cover_open)) }</div>
            <div>{ format!("currentPage: {} / {}", state.current_page, snapshot.total_pages) }</div>
            <div>{ format!("isFlipping: {}", flag(state.is_flipping)) }</div>
            <div>{ format!("direction: {direction}") }</div>
            <div>{ format!("drag: {drag}") }</div>
            <div>{ format!("last outcome: {outcome}") }</div>
            { last }
        </aside>
    }
}
