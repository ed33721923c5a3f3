mod app;
mod config;
mod effects;
mod event;
mod input;
mod logging;
mod persistence;
mod terminal;
mod ui;

pub use app::run_app;
