use hand_ledger_core::config::{DEBUG_PARAM, OPEN_PARAM, PAGE_PARAM};
use hand_ledger_core::JournalOptions;
use web_sys::UrlSearchParams;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct InitConfig {
    pub(crate) options: JournalOptions,
}

impl InitConfig {
    /// The cover starts open when asked to, or when a start page is given.
    pub(crate) fn starts_open(&self) -> bool {
        self.options.start_open || self.options.start_page.is_some()
    }
}

pub(crate) fn load_init_config() -> InitConfig {
    let Some(search) = location_search() else {
        return InitConfig::default();
    };
    parse_init_config(&search)
}

fn location_search() -> Option<String> {
    let window = web_sys::window()?;
    window.location().search().ok()
}

fn parse_init_config(search: &str) -> InitConfig {
    let search = search.trim();
    if search.is_empty() {
        return InitConfig::default();
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        gloo::console::warn!("query", "unreadable search string", search.to_string());
        return InitConfig::default();
    };
    let pairs: Vec<(&str, String)> = [DEBUG_PARAM, OPEN_PARAM, PAGE_PARAM]
        .into_iter()
        .filter_map(|key| params.get(key).map(|value| (key, value)))
        .collect();
    let (options, errors) = JournalOptions::from_params(
        pairs.iter().map(|(key, value)| (*key, value.as_str())),
    );
    for error in errors {
        gloo::console::warn!("query", error.to_string());
    }
    InitConfig { options }
}
