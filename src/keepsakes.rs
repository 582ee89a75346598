//! Nested controls that live on a page. Every one of them carries
//! `data-page-interactive`, so taps and drags on them never turn the page.

use std::cell::RefCell;
use std::rc::Rc;

use hand_ledger_core::keepsake::DEFAULT_MAX_PULL_PX;
use hand_ledger_core::layout::shade_hex;
use hand_ledger_core::{
    next_fold, BellyBandState, DragKeepsake, FoldEdge, PullDirection, PullTabState, PullTabView,
};
use web_sys::Element;
use yew::prelude::*;

use crate::input;

#[derive(Properties, PartialEq)]
pub(crate) struct PocketProps {
    pub(crate) label: AttrValue,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Pocket)]
pub(crate) fn pocket(props: &PocketProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    html! {
        <div class={classes!("pocket", open.then_some("pocket-open"))} data-page-interactive="">
            <button
                class="pocket-flap"
                aria-expanded={open.to_string()}
                aria-label={format!("{} pocket", props.label)}
                onclick={toggle}
            >
                { props.label.clone() }
            </button>
            if *open {
                <div class="pocket-contents">{ for props.children.iter() }</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct EnvelopeProps {
    pub(crate) addressee: AttrValue,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Envelope)]
pub(crate) fn envelope(props: &EnvelopeProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    html! {
        <div
            class={classes!("envelope", open.then_some("envelope-open"))}
            role="button"
            tabindex="0"
            aria-label={format!("Letter to {}", props.addressee)}
            aria-expanded={open.to_string()}
            data-page-interactive=""
            onclick={toggle}
        >
            <div class="envelope-flap" />
            <div class="envelope-body">{ props.addressee.clone() }</div>
            if *open {
                <div class="envelope-letter">{ for props.children.iter() }</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TagProps {
    pub(crate) front: AttrValue,
    pub(crate) back: AttrValue,
    #[prop_or(8.0)]
    pub(crate) rotation_deg: f32,
}

/// Luggage tag that turns over when tapped.
#[function_component(Tag)]
pub(crate) fn tag(props: &TagProps) -> Html {
    let turned = use_state(|| false);
    let toggle = {
        let turned = turned.clone();
        Callback::from(move |_: MouseEvent| turned.set(!*turned))
    };
    let text = if *turned {
        props.back.clone()
    } else {
        props.front.clone()
    };
    html! {
        <div
            class={classes!("tag", turned.then_some("tag-turned"))}
            role="switch"
            aria-checked={turned.to_string()}
            aria-label="Tag"
            data-page-interactive=""
            style={format!("transform:rotate({:.1}deg);", props.rotation_deg)}
            onclick={toggle}
        >
            <span class="tag-hole" />
            <span class="tag-text">{ text }</span>
        </div>
    }
}

fn activate_on_key(on_activate: Callback<()>) -> Callback<KeyboardEvent> {
    Callback::from(move |event: KeyboardEvent| {
        if matches!(event.key().as_str(), "Enter" | " ") {
            event.prevent_default();
            on_activate.emit(());
        }
    })
}

struct DragCallbacks {
    down: Callback<PointerEvent>,
    moved: Callback<PointerEvent>,
    up: Callback<PointerEvent>,
    cancel: Callback<PointerEvent>,
}

/// Wires pointer events on `node` into a keepsake's drag state and
/// re-renders through `view` after every change.
fn drag_callbacks<S>(
    state: Rc<RefCell<S>>,
    view: UseStateHandle<S::View>,
    node: NodeRef,
) -> DragCallbacks
where
    S: DragKeepsake + 'static,
    S::View: 'static,
{
    let down = {
        let state = state.clone();
        let view = view.clone();
        Callback::from(move |event: PointerEvent| {
            if !input::is_primary_press(&event) {
                return;
            }
            input::capture_pointer(node.cast::<Element>(), &event);
            let (x, y, time_ms) = input::pointer_point(&event);
            let next = {
                let mut keepsake = state.borrow_mut();
                keepsake.begin(x, y, time_ms);
                keepsake.view()
            };
            view.set(next);
        })
    };
    let moved = {
        let state = state.clone();
        let view = view.clone();
        Callback::from(move |event: PointerEvent| {
            let (x, y, time_ms) = input::pointer_point(&event);
            let next = {
                let mut keepsake = state.borrow_mut();
                if !keepsake.is_dragging() {
                    return;
                }
                keepsake.update(x, y, time_ms);
                keepsake.view()
            };
            view.set(next);
        })
    };
    let up = {
        let state = state.clone();
        let view = view.clone();
        Callback::from(move |event: PointerEvent| {
            let (x, y, time_ms) = input::pointer_point(&event);
            let next = {
                let mut keepsake = state.borrow_mut();
                if !keepsake.is_dragging() {
                    return;
                }
                keepsake.end(x, y, time_ms);
                keepsake.view()
            };
            view.set(next);
        })
    };
    let cancel = Callback::from(move |_: PointerEvent| {
        let next = {
            let mut keepsake = state.borrow_mut();
            keepsake.cancel();
            keepsake.view()
        };
        view.set(next);
    });
    DragCallbacks {
        down,
        moved,
        up,
        cancel,
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PullTabProps {
    #[prop_or(PullDirection::Down)]
    pub(crate) direction: PullDirection,
    #[prop_or(DEFAULT_MAX_PULL_PX)]
    pub(crate) max_pull: f32,
    pub(crate) hidden: Html,
    #[prop_or_default]
    pub(crate) children: Children,
}

/// Tab that is dragged out to reveal what is tucked behind it.
#[function_component(PullTab)]
pub(crate) fn pull_tab(props: &PullTabProps) -> Html {
    let direction = props.direction;
    let max_pull = props.max_pull;
    let state = use_mut_ref(move || PullTabState::new(direction, max_pull));
    let view = use_state(PullTabView::default);
    let handle = use_node_ref();
    let drag = drag_callbacks(state.clone(), view.clone(), handle.clone());
    let onkeydown = {
        let view = view.clone();
        activate_on_key(Callback::from(move |_| {
            let next = {
                let mut tab = state.borrow_mut();
                tab.toggle();
                tab.view()
            };
            view.set(next);
        }))
    };

    let current = *view;
    let extent = if direction.is_vertical() {
        "height"
    } else {
        "width"
    };
    let reveal_style = format!("opacity:{:.2};{extent}:{max_pull:.0}px;", current.progress);
    let handle_style = format!(
        "transform:{};{}",
        direction.translate(current.position),
        if current.dragging {
            "transition:none;"
        } else {
            ""
        }
    );
    html! {
        <div
            class={classes!(
                "pull-tab",
                direction.class_name(),
                current.pulled.then_some("pull-tab-out"),
            )}
            data-page-interactive=""
        >
            <div class="pull-tab-body">
                { for props.children.iter() }
                <div class="pull-tab-reveal" style={reveal_style}>
                    { props.hidden.clone() }
                </div>
            </div>
            <div
                ref={handle}
                class="pull-tab-handle"
                role="button"
                tabindex="0"
                aria-label="Pull tab"
                aria-expanded={current.pulled.to_string()}
                style={handle_style}
                onpointerdown={drag.down}
                onpointermove={drag.moved}
                onpointerup={drag.up}
                onpointercancel={drag.cancel}
                {onkeydown}
            >
                <span class="pull-tab-arrow">{ direction.arrow() }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SlideRevealProps {
    pub(crate) hidden: Html,
    #[prop_or(true)]
    pub(crate) horizontal: bool,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(SlideReveal)]
pub(crate) fn slide_reveal(props: &SlideRevealProps) -> Html {
    let revealed = use_state(|| false);
    let toggle = {
        let revealed = revealed.clone();
        Callback::from(move |_: ()| revealed.set(!*revealed))
    };
    let onclick = toggle.reform(|_: MouseEvent| ());
    let onkeydown = activate_on_key(toggle);
    let axis = if props.horizontal { "X" } else { "Y" };
    let (cover, hidden) = if *revealed {
        ("-100%", "0")
    } else {
        ("0", "100%")
    };
    html! {
        <div
            class={classes!("slide-reveal", revealed.then_some("slide-reveal-open"))}
            role="button"
            tabindex="0"
            aria-expanded={revealed.to_string()}
            data-page-interactive=""
            {onclick}
            {onkeydown}
        >
            <div class="slide-reveal-cover" style={format!("transform:translate{axis}({cover});")}>
                { for props.children.iter() }
            </div>
            <div class="slide-reveal-hidden" style={format!("transform:translate{axis}({hidden});")}>
                { props.hidden.clone() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct FlipOutProps {
    pub(crate) front: Html,
    pub(crate) back: Html,
    #[prop_or(FoldEdge::Right)]
    pub(crate) fold_from: FoldEdge,
    #[prop_or(200.0)]
    pub(crate) width: f32,
    #[prop_or(150.0)]
    pub(crate) height: f32,
    #[prop_or(AttrValue::Static("#f5f0e1"))]
    pub(crate) color: AttrValue,
}

/// Folded flap that opens out along its hinge to show a second panel.
#[function_component(FlipOut)]
pub(crate) fn flip_out(props: &FlipOutProps) -> Html {
    let unfolded = use_state(|| false);
    let toggle = {
        let unfolded = unfolded.clone();
        Callback::from(move |_: ()| unfolded.set(!*unfolded))
    };
    let onclick = toggle.reform(|_: MouseEvent| ());
    let onkeydown = activate_on_key(toggle);
    let edge = props.fold_from;
    let open = *unfolded;
    let (width, height) = (props.width, props.height);
    let (outer_w, outer_h) = edge.footprint(width, height, open);
    let size = format!("width:{width:.0}px;height:{height:.0}px;");
    let cross = if edge.is_horizontal() { "top" } else { "left" };
    let back_style = format!(
        "{size}background:{};{}:0;{cross}:0;opacity:{};",
        props.color,
        edge.side(),
        if open { 1 } else { 0 }
    );
    let (anchor, shift) = edge.panel_anchor(width, height);
    let panel_style = format!(
        "{size}background:{};transform-origin:{};{anchor}:{:.0}px;{cross}:0;transform:{};",
        props.color,
        edge.transform_origin(),
        if open { shift } else { 0.0 },
        if open { edge.unfolded_rotation() } else { "none" },
    );
    let underside = format!(
        "background:{};transform:{};",
        shade_hex(&props.color, -10),
        if edge.is_horizontal() {
            "rotateY(180deg)"
        } else {
            "rotateX(180deg)"
        }
    );
    html! {
        <div
            class={classes!("flip-out", open.then_some("flip-out-open"))}
            role="button"
            tabindex="0"
            aria-expanded={open.to_string()}
            aria-label="Foldable content section"
            data-page-interactive=""
            style={format!("width:{outer_w:.0}px;height:{outer_h:.0}px;")}
            {onclick}
            {onkeydown}
        >
            <div class="flip-out-back" style={back_style}>{ props.back.clone() }</div>
            <div class="flip-out-panel" style={panel_style}>
                <div class="flip-out-face" style={format!("background:{};", props.color)}>
                    { props.front.clone() }
                </div>
                <div class="flip-out-face" style={underside} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AccordionFlipOutProps {
    pub(crate) panels: Vec<Html>,
    #[prop_or(AttrValue::Static("#f5f0e1"))]
    pub(crate) color: AttrValue,
    #[prop_or(150.0)]
    pub(crate) panel_width: f32,
    #[prop_or(200.0)]
    pub(crate) panel_height: f32,
}

#[function_component(AccordionFlipOut)]
pub(crate) fn accordion_flip_out(props: &AccordionFlipOutProps) -> Html {
    let expanded = use_state(|| 0usize);
    let count = props.panels.len();
    let advance = {
        let expanded = expanded.clone();
        Callback::from(move |_: ()| expanded.set(next_fold(*expanded, count)))
    };
    let onclick = advance.reform(|_: MouseEvent| ());
    let onkeydown = activate_on_key(advance);
    let open = *expanded;
    let width = props.panel_width * (open + 1) as f32;
    let panels = props.panels.iter().enumerate().map(|(index, panel)| {
        let transform = if index < open {
            format!(
                "translateX({:.0}px) rotateY(-180deg)",
                index as f32 * props.panel_width
            )
        } else {
            "none".to_string()
        };
        let style = format!(
            "width:{:.0}px;height:{:.0}px;background:{};z-index:{};transform:{transform};transition-delay:{:.1}s;",
            props.panel_width,
            props.panel_height,
            shade_hex(&props.color, -5 * index as i32),
            count - index,
            index as f32 * 0.1,
        );
        html! {
            <div
                class={classes!("accordion-panel", (index == open).then_some("accordion-next"))}
                {style}
            >
                { panel.clone() }
            </div>
        }
    });
    html! {
        <div
            class="accordion-flip-out"
            role="button"
            tabindex="0"
            aria-expanded={(open > 0).to_string()}
            aria-label={format!(
                "Accordion panels, {open} of {} expanded",
                count.saturating_sub(1)
            )}
            data-page-interactive=""
            style={format!("width:{width:.0}px;height:{:.0}px;", props.panel_height)}
            {onclick}
            {onkeydown}
        >
            { for panels }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct BellyBandProps {
    pub(crate) hidden: Html,
    #[prop_or(true)]
    pub(crate) exit_right: bool,
    #[prop_or(60.0)]
    pub(crate) height: f32,
    #[prop_or(AttrValue::Static("#f5f0e1"))]
    pub(crate) color: AttrValue,
    #[prop_or_default]
    pub(crate) children: Children,
}

/// Paper band around a keepsake. Slide or tap it off to see underneath.
#[function_component(BellyBand)]
pub(crate) fn belly_band(props: &BellyBandProps) -> Html {
    let exit_right = props.exit_right;
    let state = use_mut_ref(move || BellyBandState::new(exit_right));
    let view = use_state(move || BellyBandState::new(exit_right).view());
    let band = use_node_ref();
    let drag = drag_callbacks(state.clone(), view.clone(), band.clone());
    let onkeydown = {
        let view = view.clone();
        activate_on_key(Callback::from(move |_| {
            let next = {
                let mut band = state.borrow_mut();
                band.slide_off();
                band.view()
            };
            view.set(next);
        }))
    };

    let current = *view;
    let band_style = format!(
        "height:{:.0}px;background-color:{};opacity:{:.2};transform:translateX({:.1}px);{}",
        props.height,
        props.color,
        current.opacity,
        current.position,
        if current.dragging {
            "transition:none;"
        } else {
            ""
        }
    );
    let hidden_opacity = if current.removed { 1.0 } else { 0.3 };
    let hint = if exit_right { "→" } else { "←" };
    html! {
        <div
            class={classes!("belly-band", current.removed.then_some("belly-band-off"))}
            data-page-interactive=""
        >
            <div class="belly-band-hidden" style={format!("opacity:{hidden_opacity};")}>
                { props.hidden.clone() }
            </div>
            <div
                ref={band}
                class="belly-band-strip"
                role="button"
                tabindex="0"
                aria-label="Slide the band off"
                aria-pressed={current.removed.to_string()}
                style={band_style}
                onpointerdown={drag.down}
                onpointermove={drag.moved}
                onpointerup={drag.up}
                onpointercancel={drag.cancel}
                {onkeydown}
            >
                { for props.children.iter() }
                if !current.removed {
                    <span class="belly-band-hint">{ hint }</span>
                }
            </div>
        </div>
    }
}
