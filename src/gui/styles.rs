use egui::{Color32, Rounding, Stroke, Style, Visuals};

pub fn setup_custom_style(ctx: &egui::Context) {
    let mut style = Style {
        visuals: Visuals::dark(),
        ..Default::default()
    };

    // Card-table dark theme
    style.visuals.window_fill = Color32::from_rgb(14, 26, 20);
    style.visuals.panel_fill = Color32::from_rgb(18, 32, 25);
    style.visuals.faint_bg_color = Color32::from_rgb(24, 40, 32);
    style.visuals.extreme_bg_color = Color32::from_rgb(10, 20, 15);

    style.visuals.override_text_color = Some(Color32::from_rgb(240, 240, 235));

    // Button styling
    style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(40, 58, 48);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::from_rgb(200, 200, 195));
    style.visuals.widgets.inactive.rounding = Rounding::same(5.0);

    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(52, 74, 61);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::from_rgb(240, 240, 235));
    style.visuals.widgets.hovered.rounding = Rounding::same(5.0);

    style.visuals.widgets.active.bg_fill = ACCENT_BLUE;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.rounding = Rounding::same(5.0);

    style.visuals.selection.bg_fill = ACCENT_BLUE;
    style.visuals.selection.stroke = Stroke::new(1.5, ACCENT_BLUE);

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}

pub const ACCENT_BLUE: Color32 = Color32::from_rgb(30, 110, 200);
pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(76, 175, 80);
pub const ERROR_RED: Color32 = Color32::from_rgb(244, 67, 54);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(165, 175, 168);
pub const TILE_BACK_BG: Color32 = Color32::from_rgb(34, 52, 70);
pub const TILE_FACE_BG: Color32 = Color32::from_rgb(42, 46, 52);
pub const TILE_BORDER: Color32 = Color32::from_rgb(60, 80, 100);
