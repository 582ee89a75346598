mod app_builder;
mod app_router;
mod app_runtime;
mod boot;
mod content;
mod debug_hud;
mod decor;
mod input;
mod journal_core;
mod keepsakes;
mod timer;
mod yew_app;

fn main() {
    app_builder::run();
}
