//! GUI-specific constants for layout, status colors and labels

/// Window limits (initial size comes from config)
pub const WINDOW_MIN_WIDTH: f32 = 420.0;
pub const WINDOW_MIN_HEIGHT: f32 = 480.0;

/// Layout spacing
pub const PADDING: f32 = 8.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Status colors
pub const STATUS_OK: egui::Color32 = egui::Color32::from_rgb(0, 170, 0);
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
pub const STATUS_MUTED: egui::Color32 = egui::Color32::from_rgb(140, 140, 140);

/// Labels
pub const APP_TITLE: &str = "Transformers Database";
pub const LIST_TAB: &str = "Transformers";
pub const ADD_TAB: &str = "Add New Transformer";
pub const EDIT_TAB: &str = "Edit Transformer";
pub const SEARCH_HINT: &str = "Search by name, faction, etc...";
