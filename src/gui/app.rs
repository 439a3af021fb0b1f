use eframe::egui;

use crate::config::Config;
use crate::game::{Board, CheckOutcome};

use super::board_view::{BoardAction, BoardView};
use super::components::StatusBar;
use super::styles;

pub struct MemoryApp {
    config: Config,
    board: Board,
    board_view: BoardView,
    status_message: String,
}

impl MemoryApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        styles::setup_custom_style(&cc.egui_ctx);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let board = Board::new(&config.card_images, config.columns as usize);
        log::info!("New game: {} pairs", board.total_pairs());

        Self {
            config,
            board,
            board_view: BoardView::default(),
            status_message: String::new(),
        }
    }

    fn new_game(&mut self) {
        self.board = Board::new(&self.config.card_images, self.config.columns as usize);
        self.status_message.clear();
        log::info!("New game: {} pairs", self.board.total_pairs());
    }

    fn handle_check(&mut self) {
        match self.board.check_pair() {
            Some(CheckOutcome::Matched) => {
                self.status_message = format!(
                    "✓ Pair found ({} of {})",
                    self.board.pairs_found(),
                    self.board.total_pairs()
                );
            }
            Some(CheckOutcome::NoMatch) => {
                self.status_message = "No match, the cards turn back over".to_string();
            }
            // Fewer than two cards open; tolerated silently.
            None => {}
        }
    }
}

impl eframe::App for MemoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Memo Pairs");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("New Game").clicked() {
                        self.new_game();
                    }
                    ui.label(format!("Attempts: {}", self.board.attempts()));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(action) = self.board_view.ui(ui, &self.board) {
                match action {
                    BoardAction::Flip(slot) => self.board.flip(slot),
                    BoardAction::Check => self.handle_check(),
                }
            }

            let mut clear = false;
            StatusBar::show(ui, &self.status_message, &mut clear);
            if clear {
                self.status_message.clear();
            }
        });
    }
}
