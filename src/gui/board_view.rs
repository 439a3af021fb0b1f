use egui::RichText;

use crate::game::Board;

use super::components::CardTile;
use super::styles;

const TILE_SPACING: f32 = 10.0;

#[derive(Default)]
pub struct BoardView;

impl BoardView {
    pub fn ui(&mut self, ui: &mut egui::Ui, board: &Board) -> Option<BoardAction> {
        let mut action = None;

        ui.add_space(10.0);

        let columns = board.columns();
        for (row_idx, row) in board.slots().chunks(columns).enumerate() {
            ui.horizontal(|ui| {
                for (col_idx, slot) in row.iter().enumerate() {
                    if CardTile::show(ui, slot.as_ref()) {
                        action = Some(BoardAction::Flip(row_idx * columns + col_idx));
                    }
                    ui.add_space(TILE_SPACING);
                }
            });
            ui.add_space(TILE_SPACING);
        }

        ui.add_space(10.0);

        if board.is_won() {
            // The check action is gone for good once the game is won.
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("WELL DONE! GAME OVER")
                        .size(26.0)
                        .strong()
                        .color(styles::SUCCESS_GREEN),
                );
            });
        } else {
            let check_button = egui::Button::new(
                RichText::new("Check Pair")
                    .size(16.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .fill(styles::ACCENT_BLUE)
            .min_size(egui::Vec2::new(140.0, 40.0));

            if ui.add(check_button).clicked() {
                action = Some(BoardAction::Check);
            }
        }

        action
    }
}

pub enum BoardAction {
    Flip(usize),
    Check,
}
