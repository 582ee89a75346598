use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use hand_ledger_core::{
    page_indicator, stack_visuals, FlipDirection, JournalInput, PageFace, PageVisual,
    PaperTexture, SwipeGestureState, PAGE_TURN_MS,
};
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, PointerEvent};
use yew::prelude::*;

use crate::app_runtime;
use crate::content::JournalPage;
use crate::debug_hud::DebugHud;
use crate::input;
use crate::journal_core::{JournalCore, JournalSnapshot};

const PAGE_TURN_EASING: &str = "cubic-bezier(0.645, 0.045, 0.355, 1)";
const COVER_OPEN_DEG: f32 = -170.0;
const DRAG_TILT_RATIO: f32 = 6.0;
const DRAG_TILT_MAX_DEG: f32 = 30.0;

type Pages = Rc<Vec<JournalPage>>;

#[derive(Properties)]
pub(crate) struct AppProps {
    pub(crate) core: Rc<JournalCore>,
    pub(crate) pages: Pages,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core) && Rc::ptr_eq(&self.pages, &other.pages)
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let core = props.core.clone();
    let snapshot = use_state(|| core.snapshot());
    {
        let core = core.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let core_for_cb = core.clone();
            let subscription = core.subscribe(Rc::new(move || {
                snapshot.set(core_for_cb.snapshot());
            }));
            move || drop(subscription)
        });
    }
    let show_hud = app_runtime::debug_hud_enabled();
    let snapshot = *snapshot;

    html! {
        <main class="app">
            <Journal core={core} pages={props.pages.clone()} {snapshot} />
            if show_hud {
                <DebugHud {snapshot} />
            }
        </main>
    }
}

#[derive(Properties)]
struct JournalProps {
    core: Rc<JournalCore>,
    pages: Pages,
    snapshot: JournalSnapshot,
}

impl PartialEq for JournalProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
            && Rc::ptr_eq(&self.pages, &other.pages)
            && self.snapshot == other.snapshot
    }
}

#[function_component(Journal)]
fn journal(props: &JournalProps) -> Html {
    let open = props.snapshot.cover_open;
    let on_toggle = {
        let core = props.core.clone();
        Callback::from(move |_: ()| core.toggle_cover())
    };
    html! {
        <div class={classes!("journal", open.then_some("journal-open"))}>
            if open {
                <div class="back-cover">
                    <div class="spine" />
                </div>
                <PageStack
                    core={props.core.clone()}
                    pages={props.pages.clone()}
                    snapshot={props.snapshot}
                />
                <div class="gutter-shadow" />
            }
            <Cover {open} {on_toggle} />
            if open {
                <NavControls core={props.core.clone()} snapshot={props.snapshot} />
            }
            <Hints {open} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CoverProps {
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(Cover)]
fn cover(props: &CoverProps) -> Html {
    let rotation = if props.open { COVER_OPEN_DEG } else { 0.0 };
    let style = format!(
        "transform:rotateY({rotation:.1}deg);transition:transform {PAGE_TURN_MS}ms {PAGE_TURN_EASING};"
    );
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                on_toggle.emit(());
            }
        })
    };
    html! {
        <div
            class="cover"
            role="button"
            tabindex="0"
            aria-label="Journal cover"
            aria-expanded={props.open.to_string()}
            {style}
            {onclick}
            {onkeydown}
        >
            <div class="cover-face cover-front">
                <div class="cover-border" />
                <h1 class="vintage-serif">{ "Hand Ledger" }</h1>
                <div class="cover-rule" />
                <p class="handwriting">{ "A Junk Journal" }</p>
            </div>
            <div class="cover-face cover-inside">
                <p class="handwriting">{ "This journal belongs to..." }</p>
                <div class="signature-line" />
                <p class="handwriting faded">
                    { "\"Every page tells a story, every pocket holds a secret.\"" }
                </p>
            </div>
        </div>
    }
}

#[derive(Properties)]
struct PageStackProps {
    core: Rc<JournalCore>,
    pages: Pages,
    snapshot: JournalSnapshot,
}

impl PartialEq for PageStackProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
            && Rc::ptr_eq(&self.pages, &other.pages)
            && self.snapshot == other.snapshot
    }
}

#[function_component(PageStack)]
fn page_stack(props: &PageStackProps) -> Html {
    {
        let core = props.core.clone();
        use_effect_with((), move |_| {
            let document = web_sys::window().and_then(|window| window.document());
            let listener = document.map(|document| {
                EventListener::new_with_options(
                    &document,
                    "keydown",
                    EventListenerOptions::enable_prevent_default(),
                    move |event: &Event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if core.apply(JournalInput::Key(input::key_press(event))) {
                            event.prevent_default();
                        }
                    },
                )
            });
            move || drop(listener)
        });
    }
    {
        let core = props.core.clone();
        use_effect_with((), move |_| {
            let listeners: Vec<EventListener> = web_sys::window()
                .map(|window| {
                    let on_move = {
                        let core = core.clone();
                        EventListener::new(&window, "pointermove", move |event: &Event| {
                            if !core.is_dragging() {
                                return;
                            }
                            if let Some(event) = event.dyn_ref::<PointerEvent>() {
                                if event.is_primary() {
                                    core.apply(input::drag_move(event));
                                }
                            }
                        })
                    };
                    let on_up = {
                        let core = core.clone();
                        EventListener::new(&window, "pointerup", move |event: &Event| {
                            if let Some(event) = event.dyn_ref::<PointerEvent>() {
                                if event.is_primary() {
                                    core.apply(input::drag_end(event));
                                }
                            }
                        })
                    };
                    let on_cancel = {
                        let core = core.clone();
                        EventListener::new(&window, "pointercancel", move |_event: &Event| {
                            core.apply(JournalInput::DragCancel);
                        })
                    };
                    vec![on_move, on_up, on_cancel]
                })
                .unwrap_or_default();
            move || drop(listeners)
        });
    }

    let on_pointer_down = {
        let core = props.core.clone();
        Callback::from(move |event: PointerEvent| {
            if input::is_primary_press(&event) {
                core.apply(input::drag_start(&event));
            }
        })
    };

    let snapshot = props.snapshot;
    let gesture = snapshot.gesture;
    let visuals = stack_visuals(&snapshot.state, snapshot.total_pages);
    let pages = props.pages.iter().zip(visuals).map(|(page, visual)| {
        let on_click = {
            let core = props.core.clone();
            let page_index = visual.index;
            Callback::from(move |event: MouseEvent| {
                core.apply(JournalInput::PageClick {
                    page_index,
                    interactive: input::target_is_interactive(&event),
                    time_ms: event.time_stamp(),
                });
            })
        };
        html! {
            <Page
                key={page.id}
                {visual}
                texture={page.texture}
                front={page.front.clone()}
                back={page.back.clone()}
                tilt_deg={drag_tilt(&visual, gesture)}
                {on_click}
            />
        }
    });

    html! {
        <div
            class={classes!("page-stack", gesture.is_dragging.then_some("page-stack-dragging"))}
            onpointerdown={on_pointer_down}
        >
            { for pages }
        </div>
    }
}

/// Lifts the page a drag would turn, so the sheet follows the finger.
fn drag_tilt(visual: &PageVisual, gesture: SwipeGestureState) -> f32 {
    if !gesture.is_dragging {
        return 0.0;
    }
    let tilt = (gesture.drag_x / DRAG_TILT_RATIO).clamp(-DRAG_TILT_MAX_DEG, DRAG_TILT_MAX_DEG);
    match visual.click_direction {
        Some(FlipDirection::Forward) if tilt < 0.0 => tilt,
        Some(FlipDirection::Backward) if tilt > 0.0 => tilt,
        _ => 0.0,
    }
}

#[derive(Properties, PartialEq)]
struct PageProps {
    visual: PageVisual,
    texture: PaperTexture,
    front: Html,
    back: Html,
    tilt_deg: f32,
    on_click: Callback<MouseEvent>,
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    let visual = props.visual;
    let rotation = visual.rotation_deg + props.tilt_deg;
    let transition = if props.tilt_deg == 0.0 {
        format!("transform {PAGE_TURN_MS}ms {PAGE_TURN_EASING}")
    } else {
        "none".to_string()
    };
    let pointer = if visual.catches_pointer() {
        ""
    } else {
        "pointer-events:none;"
    };
    let style = format!(
        "z-index:{};transform:rotateY({rotation:.1}deg);transition:{transition};{pointer}",
        visual.z_index
    );
    let hidden = |face: PageFace| (visual.visible_face != face).to_string();
    html! {
        <div
            class={classes!(
                "page",
                props.texture.class_name(),
                visual.is_clickable().then_some("page-clickable"),
            )}
            {style}
            aria-label={format!("Page {}", visual.index + 1)}
            data-page-index={visual.index.to_string()}
            data-page-state={visual.phase.label()}
            onclick={props.on_click.clone()}
        >
            <div class="page-face page-front" aria-hidden={hidden(PageFace::Front)}>
                { props.front.clone() }
            </div>
            <div class="page-face page-back" aria-hidden={hidden(PageFace::Back)}>
                { props.back.clone() }
            </div>
        </div>
    }
}

#[derive(Properties)]
struct NavControlsProps {
    core: Rc<JournalCore>,
    snapshot: JournalSnapshot,
}

impl PartialEq for NavControlsProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core) && self.snapshot == other.snapshot
    }
}

#[function_component(NavControls)]
fn nav_controls(props: &NavControlsProps) -> Html {
    let indicator = page_indicator(&props.snapshot.state, props.snapshot.total_pages);
    let step = |direction: FlipDirection| {
        let core = props.core.clone();
        Callback::from(move |_: MouseEvent| {
            core.apply(JournalInput::Step(direction));
        })
    };
    html! {
        <nav class="journal-nav" aria-label="Page navigation">
            <button
                class="nav-prev"
                aria-label="Previous page"
                disabled={!indicator.can_previous}
                onclick={step(FlipDirection::Backward)}
            >
                { "← prev" }
            </button>
            <span class="page-indicator" aria-live="polite">{ indicator.label }</span>
            <button
                class="nav-next"
                aria-label="Next page"
                disabled={!indicator.can_next}
                onclick={step(FlipDirection::Forward)}
            >
                { "next →" }
            </button>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HintsProps {
    open: bool,
}

#[function_component(Hints)]
fn hints(props: &HintsProps) -> Html {
    let text = if props.open {
        "Arrow keys or swipe to turn pages"
    } else {
        "Click to open"
    };
    html! { <div class="journal-hint typewriter">{ text }</div> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hand_ledger_core::{page_visual, JournalState};

    fn state(current_page: usize) -> JournalState {
        JournalState {
            current_page,
            ..JournalState::default()
        }
    }

    fn dragging(drag_x: f32) -> SwipeGestureState {
        SwipeGestureState {
            is_dragging: true,
            drag_x,
        }
    }

    #[wasm_bindgen_test::wasm_bindgen_test]
    fn drag_tilts_only_the_page_it_would_turn() {
        let active = page_visual(1, &state(1), 3);
        let previous = page_visual(0, &state(1), 3);
        let upcoming = page_visual(2, &state(1), 3);

        assert_eq!(drag_tilt(&active, dragging(-60.0)), -10.0);
        assert_eq!(drag_tilt(&active, dragging(60.0)), 0.0);
        assert_eq!(drag_tilt(&previous, dragging(60.0)), 10.0);
        assert_eq!(drag_tilt(&upcoming, dragging(-60.0)), 0.0);
        assert_eq!(drag_tilt(&active, dragging(-900.0)), -DRAG_TILT_MAX_DEG);
        assert_eq!(drag_tilt(&active, SwipeGestureState::default()), 0.0);
    }
}
