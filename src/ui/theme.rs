// HookLog - ui/theme.rs
//
// Colour scheme, status colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::StatusClass;
use egui::Color32;

/// Foreground colour for a status class.
pub fn status_colour(class: StatusClass, dark_mode: bool) -> Color32 {
    match (class, dark_mode) {
        (StatusClass::Positive, true) => Color32::from_rgb(74, 222, 128), // Green 400
        (StatusClass::Positive, false) => Color32::from_rgb(22, 163, 74), // Green 600
        (StatusClass::Negative, true) => Color32::from_rgb(248, 113, 113), // Red 400
        (StatusClass::Negative, false) => Color32::from_rgb(220, 38, 38), // Red 600
        (StatusClass::Pending, true) => Color32::from_rgb(250, 204, 21), // Yellow 400
        (StatusClass::Pending, false) => Color32::from_rgb(202, 138, 4), // Yellow 600
    }
}

/// Badge background for a status class (subtle tint).
pub fn status_bg_colour(class: StatusClass) -> Color32 {
    match class {
        StatusClass::Positive => Color32::from_rgba_premultiplied(22, 163, 74, 40),
        StatusClass::Negative => Color32::from_rgba_premultiplied(220, 38, 38, 40),
        StatusClass::Pending => Color32::from_rgba_premultiplied(202, 138, 4, 40),
    }
}

/// Colour of the failure message in the list area.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(239, 68, 68); // Red 500

/// Background of the payload block in the detail window.
pub const PAYLOAD_BG: Color32 = Color32::from_rgb(17, 24, 39); // Gray 900

/// Payload text colour (terminal green on dark background).
pub const PAYLOAD_TEXT: Color32 = Color32::from_rgb(74, 222, 128); // Green 400

/// Apply dark or light visuals to the context.
pub fn apply_visuals(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}

/// Layout constants.
pub const ROW_SPACING: [f32; 2] = [16.0, 8.0];
pub const DETAIL_WINDOW_WIDTH: f32 = 640.0;
pub const PAYLOAD_MAX_HEIGHT: f32 = 320.0;
