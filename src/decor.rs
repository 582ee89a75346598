use hand_ledger_core::layout::{
    doily_path, grid_layout, rand_range, resolve_z_index, scatter_layout, shade_hex,
    torn_edge_clip_path, DepthLevel, GridConfig, ScatterConfig, TornEdge,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LayerProps {
    pub(crate) depth: DepthLevel,
    #[prop_or_default]
    pub(crate) z_index: Option<i32>,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Layer)]
pub(crate) fn layer(props: &LayerProps) -> Html {
    let z_index = resolve_z_index(props.depth, props.z_index);
    html! {
        <div class={classes!("layer", props.class.clone())} style={format!("z-index:{z_index};")}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ScatterProps {
    #[prop_or(42)]
    pub(crate) seed: u32,
    #[prop_or_default]
    pub(crate) children: Children,
}

/// Places each child at a seeded position, angle and scale.
#[function_component(Scatter)]
pub(crate) fn scatter(props: &ScatterProps) -> Html {
    let config = ScatterConfig {
        seed: props.seed,
        ..ScatterConfig::default()
    };
    let placements = scatter_layout(props.children.len(), &config);
    html! {
        <div class="collage collage-scatter">
            { for props.children.iter().zip(placements).map(|(child, placement)| html! {
                <div class="collage-item" style={placement.style()}>{ child }</div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct GridCollageProps {
    #[prop_or(3)]
    pub(crate) columns: usize,
    #[prop_or(0.0)]
    pub(crate) jitter: f32,
    #[prop_or(123)]
    pub(crate) seed: u32,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(GridCollage)]
pub(crate) fn grid_collage(props: &GridCollageProps) -> Html {
    let config = GridConfig {
        columns: props.columns,
        jitter: props.jitter,
        seed: props.seed,
        ..GridConfig::default()
    };
    let placements = grid_layout(props.children.len(), &config);
    html! {
        <div class="collage collage-grid">
            { for props.children.iter().zip(placements).map(|(child, placement)| html! {
                <div class="collage-item" style={placement.style()}>{ child }</div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct StampProps {
    pub(crate) label: AttrValue,
    #[prop_or(AttrValue::Static("#8b3a3a"))]
    pub(crate) ink: AttrValue,
    #[prop_or(-6.0)]
    pub(crate) rotation_deg: f32,
}

#[function_component(VintageStamp)]
pub(crate) fn vintage_stamp(props: &StampProps) -> Html {
    let style = format!(
        "color:{};border-color:{};transform:rotate({:.1}deg);",
        props.ink, props.ink, props.rotation_deg
    );
    html! {
        <div class="stamp" {style} aria-hidden="true">
            <span class="stamp-label">{ props.label.clone() }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct WaxSealProps {
    pub(crate) initial: char,
    #[prop_or(AttrValue::Static("#7a1f1f"))]
    pub(crate) color: AttrValue,
}

#[function_component(WaxSeal)]
pub(crate) fn wax_seal(props: &WaxSealProps) -> Html {
    html! {
        <div class="wax-seal" style={format!("background:{};", props.color)} aria-hidden="true">
            <span>{ props.initial }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TapeProps {
    #[prop_or(0.0)]
    pub(crate) rotation_deg: f32,
    #[prop_or(AttrValue::Static("rgba(244, 232, 193, 0.75)"))]
    pub(crate) color: AttrValue,
}

#[function_component(Tape)]
pub(crate) fn tape(props: &TapeProps) -> Html {
    let style = format!(
        "background:{};transform:rotate({:.1}deg);",
        props.color, props.rotation_deg
    );
    html! { <div class="tape" {style} aria-hidden="true" /> }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CoffeeStainProps {
    pub(crate) seed: u32,
    #[prop_or(120.0)]
    pub(crate) size_px: f32,
}

#[function_component(CoffeeStain)]
pub(crate) fn coffee_stain(props: &CoffeeStainProps) -> Html {
    let opacity = rand_range(props.seed, 0, 0.12, 0.28);
    let rotation = rand_range(props.seed, 1, 0.0, 360.0);
    let ring = rand_range(props.seed, 2, 6.0, 14.0);
    let style = format!(
        "width:{size:.0}px;height:{size:.0}px;opacity:{opacity:.2};border-width:{ring:.0}px;transform:rotate({rotation:.0}deg);",
        size = props.size_px,
    );
    html! { <div class="coffee-stain" {style} aria-hidden="true" /> }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TornPaperProps {
    #[prop_or(TornEdge::Bottom)]
    pub(crate) edge: TornEdge,
    pub(crate) seed: u32,
    #[prop_or(14)]
    pub(crate) teeth: usize,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(TornPaper)]
pub(crate) fn torn_paper(props: &TornPaperProps) -> Html {
    let clip = torn_edge_clip_path(props.edge, props.seed, props.teeth);
    html! {
        <div class={classes!("torn-paper", props.class.clone())} style={format!("clip-path:{clip};")}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReceiptKind {
    Store,
    Ledger,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LineItem {
    pub(crate) name: &'static str,
    pub(crate) price: &'static str,
}

#[derive(Properties, PartialEq)]
pub(crate) struct ReceiptProps {
    #[prop_or(ReceiptKind::Store)]
    pub(crate) kind: ReceiptKind,
    #[prop_or(AttrValue::Static("GENERAL STORE"))]
    pub(crate) store: AttrValue,
    #[prop_or(AttrValue::Static("Nov 15, 1923"))]
    pub(crate) date: AttrValue,
    pub(crate) items: Vec<LineItem>,
    pub(crate) total: AttrValue,
    #[prop_or(0.0)]
    pub(crate) rotation_deg: f32,
    #[prop_or(5)]
    pub(crate) seed: u32,
}

/// Till receipt or ledger slip with torn top and bottom edges.
#[function_component(Receipt)]
pub(crate) fn receipt(props: &ReceiptProps) -> Html {
    let top = torn_edge_clip_path(TornEdge::Top, props.seed, 20);
    let bottom = torn_edge_clip_path(TornEdge::Bottom, props.seed.wrapping_add(1), 20);
    let rows = props.items.iter().map(|item| {
        html! {
            <div class="receipt-row">
                <span>{ item.name }</span>
                <span>{ format!("${}", item.price) }</span>
            </div>
        }
    });
    let body = match props.kind {
        ReceiptKind::Store => html! {
            <>
                <div class="receipt-head">
                    <div class="receipt-store">{ props.store.clone() }</div>
                    <div class="receipt-date">{ props.date.clone() }</div>
                </div>
                { for rows }
                <div class="receipt-row receipt-total">
                    <span>{ "TOTAL" }</span>
                    <span>{ format!("${}", props.total) }</span>
                </div>
                <div class="receipt-foot">{ "Thank You" }</div>
            </>
        },
        ReceiptKind::Ledger => html! {
            <div class="receipt-ledger">{ for rows }</div>
        },
    };
    html! {
        <div
            class="receipt typewriter"
            style={format!("transform:rotate({:.1}deg);", props.rotation_deg)}
            aria-hidden="true"
        >
            <div class="receipt-edge receipt-edge-top" style={format!("clip-path:{top};")} />
            <div class="receipt-body">{ body }</div>
            <div class="receipt-edge receipt-edge-bottom" style={format!("clip-path:{bottom};")} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TicketStubProps {
    #[prop_or(AttrValue::Static("RAFFLE"))]
    pub(crate) event: AttrValue,
    #[prop_or(AttrValue::Static("0742"))]
    pub(crate) number: AttrValue,
    #[prop_or(0.0)]
    pub(crate) rotation_deg: f32,
}

#[function_component(TicketStub)]
pub(crate) fn ticket_stub(props: &TicketStubProps) -> Html {
    html! {
        <div
            class="ticket-stub typewriter"
            style={format!("transform:rotate({:.1}deg);", props.rotation_deg)}
            aria-hidden="true"
        >
            <div class="ticket-stub-event">{ props.event.clone() }</div>
            <div class="ticket-stub-number">{ props.number.clone() }</div>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LaceKind {
    Corner,
    Doily,
}

#[derive(Properties, PartialEq)]
pub(crate) struct LaceProps {
    #[prop_or(LaceKind::Corner)]
    pub(crate) kind: LaceKind,
    #[prop_or(80.0)]
    pub(crate) size: f32,
    #[prop_or(0.9)]
    pub(crate) opacity: f32,
    #[prop_or(AttrValue::Static("#f5f0e8"))]
    pub(crate) color: AttrValue,
}

const DOILY_PETALS: usize = 12;

#[function_component(Lace)]
pub(crate) fn lace(props: &LaceProps) -> Html {
    let color = props.color.to_string();
    let edge = shade_hex(&color, -20);
    let thread = shade_hex(&color, -25);
    let style = format!(
        "width:{size:.0}px;height:{size:.0}px;opacity:{:.2};",
        props.opacity,
        size = props.size
    );
    let art = match props.kind {
        LaceKind::Corner => {
            let holes = (0..5).map(|i| {
                let i = i as f32;
                html! {
                    <>
                        <circle cx={format!("{}", 15.0 + i * 12.0)} cy={format!("{}", 10.0 + i * 15.0)} r="3" fill="none" stroke={thread.clone()} stroke-width="0.5" />
                        <circle cx={format!("{}", 8.0 + i * 10.0)} cy={format!("{}", 20.0 + i * 15.0)} r="2" fill="none" stroke={thread.clone()} stroke-width="0.5" />
                    </>
                }
            });
            html! {
                <svg viewBox="0 0 100 100">
                    <path d="M 0 0 L 100 0 Q 90 10, 80 20 Q 60 40, 40 60 Q 20 80, 0 100 Z" fill={color.clone()} stroke={edge.clone()} stroke-width="0.5" />
                    <path d="M 10 0 Q 20 15, 15 25 Q 25 35, 20 45 Q 30 55, 25 65 Q 35 75, 30 85 Q 20 95, 0 90" fill="none" stroke={shade_hex(&color, -30)} stroke-width="1" />
                    { for holes }
                </svg>
            }
        }
        LaceKind::Doily => {
            let center = props.size / 2.0;
            let spokes = (0..DOILY_PETALS).map(|i| {
                let angle = i as f32 * std::f32::consts::TAU / DOILY_PETALS as f32;
                let (sin, cos) = angle.sin_cos();
                let inner = props.size * 0.15;
                let outer = props.size * 0.4;
                html! {
                    <line
                        x1={format!("{:.2}", center + cos * inner)}
                        y1={format!("{:.2}", center + sin * inner)}
                        x2={format!("{:.2}", center + cos * outer)}
                        y2={format!("{:.2}", center + sin * outer)}
                        stroke={shade_hex(&color, -15)}
                        stroke-width="0.5"
                    />
                }
            });
            html! {
                <svg viewBox={format!("0 0 {0:.0} {0:.0}", props.size)}>
                    <path d={doily_path(center, props.size * 0.48, DOILY_PETALS)} fill={color.clone()} stroke={edge.clone()} stroke-width="0.5" />
                    <path d={doily_path(center, props.size * 0.35, DOILY_PETALS)} fill="none" stroke={thread.clone()} stroke-width="1" />
                    <circle cx={format!("{center:.2}")} cy={format!("{center:.2}")} r={format!("{:.2}", props.size * 0.25)} fill="none" stroke={edge.clone()} stroke-width="0.5" />
                    { for spokes }
                </svg>
            }
        }
    };
    html! { <div class="lace" {style} aria-hidden="true">{ art }</div> }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EphemeraKind {
    Paper,
    Card,
    Clipping,
    Label,
}

impl EphemeraKind {
    fn class_name(self) -> &'static str {
        match self {
            EphemeraKind::Paper => "ephemera-paper",
            EphemeraKind::Card => "ephemera-card",
            EphemeraKind::Clipping => "ephemera-clipping",
            EphemeraKind::Label => "ephemera-label",
        }
    }

    fn border_shade(self) -> Option<i32> {
        match self {
            EphemeraKind::Card => Some(-20),
            EphemeraKind::Label => Some(-15),
            EphemeraKind::Paper | EphemeraKind::Clipping => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct EphemeraProps {
    #[prop_or(EphemeraKind::Paper)]
    pub(crate) kind: EphemeraKind,
    #[prop_or(150.0)]
    pub(crate) width: f32,
    #[prop_or(100.0)]
    pub(crate) height: f32,
    #[prop_or(0.0)]
    pub(crate) rotation_deg: f32,
    #[prop_or(AttrValue::Static("#f8f4e8"))]
    pub(crate) color: AttrValue,
    #[prop_or(true)]
    pub(crate) aged: bool,
    #[prop_or(false)]
    pub(crate) taped: bool,
    #[prop_or(11)]
    pub(crate) seed: u32,
    #[prop_or_default]
    pub(crate) children: Children,
}

/// Scrap of paper, card or newsprint that holds other content.
#[function_component(Ephemera)]
pub(crate) fn ephemera(props: &EphemeraProps) -> Html {
    let mut style = format!(
        "width:{:.0}px;height:{:.0}px;background-color:{};transform:rotate({:.1}deg);",
        props.width, props.height, props.color, props.rotation_deg
    );
    if let Some(shade) = props.kind.border_shade() {
        style.push_str(&format!("border:1px solid {};", shade_hex(&props.color, shade)));
    }
    if props.kind == EphemeraKind::Clipping {
        let clip = torn_edge_clip_path(TornEdge::Right, props.seed, 10);
        style.push_str(&format!("clip-path:{clip};"));
    }
    html! {
        <div
            class={classes!("ephemera", props.kind.class_name(), props.aged.then_some("aged"))}
            {style}
        >
            <div class="ephemera-content">{ for props.children.iter() }</div>
            if props.taped {
                <Tape rotation_deg={-45.0} />
                <Tape rotation_deg={45.0} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PostcardProps {
    #[prop_or(AttrValue::Static("Wish you were here!"))]
    pub(crate) message: AttrValue,
    #[prop_or(AttrValue::Static("My Dearest"))]
    pub(crate) to: AttrValue,
    #[prop_or(true)]
    pub(crate) stamped: bool,
    #[prop_or(0.0)]
    pub(crate) rotation_deg: f32,
}

#[function_component(Postcard)]
pub(crate) fn postcard(props: &PostcardProps) -> Html {
    html! {
        <div
            class="postcard"
            style={format!("transform:rotate({:.1}deg);", props.rotation_deg)}
            aria-hidden="true"
        >
            <div class="postcard-message handwriting">{ props.message.clone() }</div>
            <div class="postcard-divider" />
            <div class="postcard-address">
                if props.stamped {
                    <div class="postcard-stamp">{ "5¢" }</div>
                    <div class="postcard-postmark">{ "NOV 23" }</div>
                }
                <div class="postcard-to vintage-serif">{ props.to.clone() }</div>
                <div class="postcard-line" />
                <div class="postcard-line" />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MusicScrapProps {
    #[prop_or(AttrValue::Static("Nocturne"))]
    pub(crate) title: AttrValue,
    #[prop_or(0.0)]
    pub(crate) rotation_deg: f32,
}

/// Torn strip of sheet music: a title over ruled staves.
#[function_component(MusicScrap)]
pub(crate) fn music_scrap(props: &MusicScrapProps) -> Html {
    html! {
        <div
            class="music-scrap"
            style={format!("transform:rotate({:.1}deg);", props.rotation_deg)}
            aria-hidden="true"
        >
            <div class="music-title vintage-serif">{ props.title.clone() }</div>
            <div class="music-staff" />
            <div class="music-staff" />
        </div>
    }
}
