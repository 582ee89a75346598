use std::cell::RefCell;

use crate::app_router::{self, InitConfig};

thread_local! {
    static INIT_CONFIG: RefCell<Option<InitConfig>> = const { RefCell::new(None) };
}

pub(crate) fn set_init_config(config: InitConfig) {
    INIT_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
}

/// Options captured at boot. Falls back to reading the URL again when the
/// app was mounted without going through `app_builder::run`.
pub(crate) fn init_config() -> InitConfig {
    INIT_CONFIG
        .with(|slot| slot.borrow().clone())
        .unwrap_or_else(app_router::load_init_config)
}

pub(crate) fn debug_hud_enabled() -> bool {
    init_config().options.debug_hud
}
