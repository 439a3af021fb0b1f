use egui::{RichText, Vec2};
use std::path::Path;

use crate::game::Card;
use crate::gui::styles;

pub const TILE_SIZE: Vec2 = Vec2::new(110.0, 140.0);

pub struct CardTile;

impl CardTile {
    /// Draw one grid slot. Returns true when the tile was pressed; the
    /// board decides whether the press means anything.
    ///
    /// An empty slot (matched-away pair) renders as a gap of the same size
    /// so the rest of the grid never moves.
    pub fn show(ui: &mut egui::Ui, card: Option<&Card>) -> bool {
        let card = match card {
            Some(card) => card,
            None => {
                ui.allocate_exact_size(TILE_SIZE, egui::Sense::hover());
                return false;
            }
        };

        if card.is_face_up() {
            Self::face(ui, card)
        } else {
            Self::back(ui)
        }
    }

    fn back(ui: &mut egui::Ui) -> bool {
        let button = egui::Button::new(
            RichText::new("✦")
                .size(26.0)
                .color(styles::TEXT_SECONDARY),
        )
        .fill(styles::TILE_BACK_BG)
        .stroke(egui::Stroke::new(1.0, styles::TILE_BORDER))
        .rounding(egui::Rounding::same(6.0))
        .min_size(TILE_SIZE);

        ui.add(button).clicked()
    }

    fn face(ui: &mut egui::Ui, card: &Card) -> bool {
        let path = Path::new(card.image());

        if path.exists() {
            let image = egui::Image::new(format!("file://{}", card.image()))
                .fit_to_exact_size(TILE_SIZE);
            ui.add(egui::ImageButton::new(image).rounding(6.0)).clicked()
        } else {
            // Missing artwork degrades to a labeled tile; asset failures
            // are the framework's problem, not the game's.
            let label = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("?");
            let button = egui::Button::new(
                RichText::new(label).size(15.0).color(egui::Color32::WHITE),
            )
            .fill(styles::TILE_FACE_BG)
            .stroke(egui::Stroke::new(1.5, styles::ACCENT_BLUE))
            .rounding(egui::Rounding::same(6.0))
            .min_size(TILE_SIZE);

            ui.add(button).clicked()
        }
    }
}
