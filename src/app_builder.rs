use std::rc::Rc;

use hand_ledger_core::{validate_page_ids, FlipCommand, FlipOutcome};

use crate::app_router;
use crate::app_runtime;
use crate::boot::{self, BootPhase};
use crate::content::{self, JournalPage};
use crate::journal_core::JournalCore;
use crate::yew_app::{App, AppProps};

const ROOT_ID: &str = "journal-root";

pub(crate) fn run() {
    boot::set_phase(BootPhase::Options);
    let init = app_router::load_init_config();
    app_runtime::set_init_config(init.clone());

    boot::set_phase(BootPhase::Content);
    let pages = content::journal_pages();
    if let Err(err) = validate_page_ids(pages.iter().map(|page| page.id)) {
        boot::fail_content(&err);
        return;
    }

    let core = JournalCore::new(pages.len());
    if init.starts_open() {
        core.set_cover_open(true);
    }
    if let Some(page) = init.options.start_page {
        if core.execute(FlipCommand::GoTo(page)) == FlipOutcome::OutOfBounds {
            gloo::console::warn!(
                "query",
                format!("page {} is past the last page ({})", page + 1, pages.len())
            );
        }
    }

    boot::set_phase(BootPhase::Mount);
    mount(core, pages);
    boot::ready();
}

fn mount(core: Rc<JournalCore>, pages: Vec<JournalPage>) {
    let props = AppProps {
        core,
        pages: Rc::new(pages),
    };
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(ROOT_ID));
    match root {
        Some(root) => {
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => {
            yew::Renderer::<App>::with_props(props).render();
        }
    }
}
