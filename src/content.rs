use hand_ledger_core::layout::{DepthLevel, TornEdge};
use hand_ledger_core::PaperTexture;
use yew::prelude::*;

use hand_ledger_core::{FoldEdge, PullDirection};

use crate::decor::{
    CoffeeStain, Ephemera, EphemeraKind, GridCollage, Lace, LaceKind, Layer, LineItem,
    MusicScrap, Postcard, Receipt, ReceiptKind, Scatter, Tape, TicketStub, TornPaper,
    VintageStamp, WaxSeal,
};
use crate::keepsakes::{
    AccordionFlipOut, BellyBand, Envelope, FlipOut, Pocket, PullTab, SlideReveal, Tag,
};

pub(crate) struct JournalPage {
    pub(crate) id: &'static str,
    pub(crate) texture: PaperTexture,
    pub(crate) front: Html,
    pub(crate) back: Html,
}

pub(crate) fn journal_pages() -> Vec<JournalPage> {
    vec![
        welcome(),
        travel_memories(),
        nature_collection(),
        music_and_art(),
        recipes(),
        photo_scatter(),
        pull_and_fold(),
        keepsakes_showcase(),
        layering_demo(),
    ]
}

fn blank_back(note: &'static str) -> Html {
    html! {
        <div class="page-inner page-blank">
            <p class="typewriter faded">{ note }</p>
        </div>
    }
}

fn welcome() -> JournalPage {
    JournalPage {
        id: "welcome",
        texture: PaperTexture::Cream,
        front: html! {
            <div class="page-inner">
                <h2 class="vintage-serif">{ "Welcome" }</h2>
                <p class="handwriting">
                    { "This is your junk journal. Each page is a canvas for memories, ephemera, and beautiful chaos." }
                </p>
                <p class="typewriter faded page-foot">{ "click or swipe to turn pages" }</p>
            </div>
        },
        back: blank_back("a space for something special"),
    }
}

fn travel_memories() -> JournalPage {
    JournalPage {
        id: "travel-memories",
        texture: PaperTexture::Aged,
        front: html! {
            <div class="page-inner">
                <h2 class="vintage-serif">{ "Travel Memories" }</h2>
                <div class="layer-stack">
                    <Layer depth={DepthLevel::Decoration} class={classes!("at-top-right")}>
                        <VintageStamp label="AIR MAIL" rotation_deg={12.0} />
                    </Layer>
                    <Layer depth={DepthLevel::Content} class={classes!("at-left")}>
                        <TornPaper seed={1847} class={classes!("ticket")}>
                            <p class="typewriter">{ "TRAIN No. 1847" }</p>
                        </TornPaper>
                    </Layer>
                    <Layer depth={DepthLevel::Interactive} class={classes!("at-center")}>
                        <Pocket label="Boarding pass">
                            <p class="typewriter">{ "Flight 742" }</p>
                            <p class="typewriter faded">{ "CDG → JFK" }</p>
                        </Pocket>
                    </Layer>
                    <Layer depth={DepthLevel::Overlay} class={classes!("at-bottom")}>
                        <Tape rotation_deg={-3.0} />
                        <p class="handwriting">{ "The best journey is the one that takes you home" }</p>
                    </Layer>
                </div>
            </div>
        },
        back: html! {
            <div class="page-inner">
                <Envelope addressee="Mom">
                    <p class="handwriting">{ "Wish you were here. The light in Lisbon is gold at six." }</p>
                </Envelope>
            </div>
        },
    }
}

fn nature_collection() -> JournalPage {
    JournalPage {
        id: "nature-collection",
        texture: PaperTexture::Cream,
        front: html! {
            <div class="page-inner">
                <h2 class="vintage-serif">{ "Pressed & Found" }</h2>
                <GridCollage columns={2} jitter={4.0}>
                    <div class="specimen">{ "fern" }</div>
                    <div class="specimen">{ "clover" }</div>
                    <div class="specimen">{ "maple" }</div>
                    <div class="specimen">{ "lavender" }</div>
                </GridCollage>
            </div>
        },
        back: html! {
            <div class="page-inner">
                <Tag front="Collected June" back="Hollow Creek trail" />
                <CoffeeStain seed={7} />
            </div>
        },
    }
}

fn recipes() -> JournalPage {
    JournalPage {
        id: "recipes",
        texture: PaperTexture::Stained,
        front: html! {
            <div class="page-inner">
                <h2 class="vintage-serif">{ "Grandma's Kitchen" }</h2>
                <TornPaper edge={TornEdge::Top} seed={31} class={classes!("recipe-card")}>
                    <p class="handwriting">{ "Apple cake" }</p>
                    <ul class="typewriter">
                        <li>{ "3 apples, sliced thin" }</li>
                        <li>{ "1 cup flour" }</li>
                        <li>{ "a good pinch of cinnamon" }</li>
                    </ul>
                </TornPaper>
                <CoffeeStain seed={12} size_px={90.0} />
            </div>
        },
        back: blank_back("recipe cards go here"),
    }
}

fn photo_scatter() -> JournalPage {
    JournalPage {
        id: "photo-scatter",
        texture: PaperTexture::Aged,
        front: html! {
            <div class="page-inner">
                <h2 class="vintage-serif">{ "Summer Snapshots" }</h2>
                <Scatter seed={2024}>
                    <div class="polaroid">{ "beach" }</div>
                    <div class="polaroid">{ "pier" }</div>
                    <div class="polaroid">{ "bonfire" }</div>
                    <div class="polaroid">{ "sunset" }</div>
                </Scatter>
            </div>
        },
        back: html! {
            <div class="page-inner">
                <Tape rotation_deg={4.0} />
                <p class="handwriting">{ "Every page tells a story." }</p>
            </div>
        },
    }
}

fn keepsakes_showcase() -> JournalPage {
    JournalPage {
        id: "keepsakes",
        texture: PaperTexture::Dark,
        front: html! {
            <div class="page-inner">
                <h2 class="vintage-serif">{ "Keepsakes" }</h2>
                <Pocket label="Ticket stubs">
                    <p class="typewriter">{ "ADMIT ONE" }</p>
                </Pocket>
                <Envelope addressee="Future me">
                    <p class="handwriting">{ "Open on a rainy day." }</p>
                </Envelope>
                <Tag front="Fragile" back="Handle with care" rotation_deg={-6.0} />
            </div>
        },
        back: html! {
            <div class="page-inner page-blank">
                <WaxSeal initial={'H'} />
                <p class="typewriter faded">{ "the end, for now" }</p>
            </div>
        },
    }
}

fn music_and_art() -> JournalPage {
    JournalPage {
        id: "music-and-art",
        texture: PaperTexture::Aged,
        front: html! {
            <div class="page-inner">
                <h2 class="vintage-serif">{ "Music & Art" }</h2>
                <div class="layer-stack">
                    <Layer depth={DepthLevel::Base} class={classes!("at-left")}>
                        <MusicScrap rotation_deg={-2.0} />
                    </Layer>
                    <Layer depth={DepthLevel::Content} class={classes!("at-top-right")}>
                        <Ephemera kind={EphemeraKind::Card} width={100.0} height={80.0} rotation_deg={5.0}>
                            <p class="typewriter faded">{ "Practice daily" }</p>
                        </Ephemera>
                    </Layer>
                    <Layer depth={DepthLevel::Decoration} class={classes!("at-center")}>
                        <VintageStamp label="CONCERT" ink="#4a3728" rotation_deg={15.0} />
                    </Layer>
                    <Layer depth={DepthLevel::Overlay} class={classes!("at-bottom")}>
                        <p class="handwriting">{ "\"Music expresses that which cannot be said...\"" }</p>
                    </Layer>
                    <Layer depth={DepthLevel::Base} class={classes!("at-bottom-right")}>
                        <Lace size={70.0} opacity={0.4} />
                    </Layer>
                </div>
            </div>
        },
        back: html! {
            <div class="page-inner">
                <h2 class="vintage-serif">{ "Art Notes" }</h2>
                <p class="typewriter faded">{ "PALETTE: autumn tones" }</p>
                <FlipOut
                    front={html! { <p class="vintage-serif">{ "Art Tip" }</p> }}
                    back={html! {
                        <p class="handwriting">
                            { "Don't be afraid of mistakes. They lead to the best discoveries." }
                        </p>
                    }}
                    fold_from={FoldEdge::Top}
                    width={240.0}
                    height={70.0}
                />
            </div>
        },
    }
}

fn pull_and_fold() -> JournalPage {
    JournalPage {
        id: "pull-and-fold",
        texture: PaperTexture::Cream,
        front: html! {
            <div class="page-inner">
                <h2 class="vintage-serif">{ "Tucked Away" }</h2>
                <div class="widget-grid">
                    <PullTab hidden={html! { <p class="handwriting">{ "Meet me at the pier at noon." }</p> }}>
                        <p class="typewriter">{ "pull the tab" }</p>
                    </PullTab>
                    <FlipOut
                        front={html! { <p class="handwriting">{ "Click to reveal" }</p> }}
                        back={html! { <p class="handwriting">{ "Hidden message!" }</p> }}
                        width={130.0}
                        height={80.0}
                    />
                    <BellyBand
                        hidden={html! { <WaxSeal initial={'M'} /> }}
                        color="#8b2323"
                    >
                        <span class="typewriter">{ "slide me off" }</span>
                    </BellyBand>
                    <SlideReveal hidden={html! { <p class="handwriting">{ "Aug 14, the night train" }</p> }}>
                        <TicketStub event="ADMIT ONE" number="4521" />
                    </SlideReveal>
                </div>
            </div>
        },
        back: html! {
            <div class="page-inner">
                <h2 class="vintage-serif">{ "Folded Map" }</h2>
                <AccordionFlipOut
                    panels={vec![
                        html! { <p class="typewriter">{ "Lisbon" }</p> },
                        html! { <p class="typewriter">{ "Porto" }</p> },
                        html! { <p class="typewriter">{ "Coimbra" }</p> },
                    ]}
                    panel_width={90.0}
                    panel_height={120.0}
                />
                <PullTab direction={PullDirection::Right} max_pull={110.0} hidden={html! {
                    <p class="typewriter faded">{ "14 km" }</p>
                }}>
                    <p class="handwriting">{ "distance" }</p>
                </PullTab>
            </div>
        },
    }
}

fn layering_demo() -> JournalPage {
    JournalPage {
        id: "layering-demo",
        texture: PaperTexture::Cream,
        front: html! {
            <div class="page-inner">
                <h2 class="vintage-serif">{ "Layers" }</h2>
                <div class="layer-stack">
                    <Layer depth={DepthLevel::Base} class={classes!("at-left")}>
                        <MusicScrap title="Étude" rotation_deg={-3.0} />
                    </Layer>
                    <Layer depth={DepthLevel::Content} class={classes!("at-center")}>
                        <Ephemera kind={EphemeraKind::Clipping} width={110.0} height={70.0} taped={true}>
                            <p class="handwriting">{ "Layered!" }</p>
                        </Ephemera>
                    </Layer>
                    <Layer depth={DepthLevel::Decoration} class={classes!("at-top-right")}>
                        <VintageStamp label="POSTAGE" rotation_deg={-8.0} />
                    </Layer>
                    <Layer depth={DepthLevel::Interactive} class={classes!("at-bottom")}>
                        <TicketStub event="DEMO" number="001" rotation_deg={3.0} />
                    </Layer>
                </div>
                <p class="typewriter faded">{ "base → content → decoration → interactive" }</p>
            </div>
        },
        back: html! {
            <div class="page-inner">
                <h2 class="vintage-serif">{ "Odds & Ends" }</h2>
                <Scatter seed={7742}>
                    <Receipt
                        items={vec![
                            LineItem { name: "Dry Goods", price: "0.45" },
                            LineItem { name: "Tea", price: "0.25" },
                            LineItem { name: "Sugar", price: "0.15" },
                        ]}
                        total="0.85"
                        rotation_deg={4.0}
                    />
                    <Receipt
                        kind={ReceiptKind::Ledger}
                        items={vec![
                            LineItem { name: "Rent", price: "12.00" },
                            LineItem { name: "Coal", price: "1.10" },
                        ]}
                        total="13.10"
                        seed={9}
                    />
                    <Postcard to="Aunt Rose" rotation_deg={-6.0} />
                    <Ephemera kind={EphemeraKind::Label} width={70.0} height={40.0} aged={false}>
                        <p class="typewriter">{ "Label" }</p>
                    </Ephemera>
                    <Ephemera>
                        <Lace kind={LaceKind::Doily} size={80.0} />
                    </Ephemera>
                </Scatter>
            </div>
        },
    }
}
