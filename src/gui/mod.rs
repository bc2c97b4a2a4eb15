//! Desktop client built on egui/eframe

mod components;
mod constants;
mod manager;

pub use manager::run_gui;
