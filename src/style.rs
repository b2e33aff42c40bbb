use eframe::egui;

// --- Sizing ---
pub const ICON_SIZE: f32 = 16.0;
pub const ICON_COL_WIDTH: f32 = 30.0;
pub const MODIFIED_COL_WIDTH: f32 = 130.0;
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_SPACING: f32 = 4.0;

// --- Toast ---
pub const TOAST_OFFSET: f32 = -32.0;

// --- Icon tints ---
pub const DARK_ICON: egui::Color32 = egui::Color32::from_rgb(40, 40, 40);
pub const LIGHT_ICON: egui::Color32 = egui::Color32::from_rgb(230, 230, 230);

/// True when `color` reads as dark (perceived luminance below one half).
pub fn is_color_dark(color: egui::Color32) -> bool {
    let darkness = 1.0
        - (0.299 * color.r() as f64 + 0.587 * color.g() as f64 + 0.114 * color.b() as f64)
            / 255.0;
    darkness >= 0.5
}

/// Icon tint that matches the surrounding text: dark glyphs next to dark text.
pub fn icon_color(text_color: egui::Color32) -> egui::Color32 {
    if is_color_dark(text_color) {
        DARK_ICON
    } else {
        LIGHT_ICON
    }
}

pub fn truncated_label(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}
